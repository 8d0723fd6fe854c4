use alloc::vec::Vec;

use crate::{
    ColumnMode, ExpansionState, GridOptions, HasId, HasTasks, RowRange, RowSpan, VirtualItem,
};

/// The result of one layout pass over a grid of cards.
///
/// Items are placed left to right, `items_per_row` per row. Each card gets an estimated height
/// from the [`crate::HeightPolicy`]; every row is as tall as its tallest card, and rows are
/// stacked top to bottom with `gap` between them. Columns can therefore hold cards of different
/// heights while rows never overlap.
///
/// A layout is a pure function of its inputs. It is cheap to rebuild (`O(n)`) and should be
/// rebuilt whenever the items or their expansion state change; option changes that only move
/// cards can be applied with [`GridLayout::reflow`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    items: Vec<VirtualItem>,
    rows: Vec<RowSpan>,
    items_per_row: usize,
    total_height: u64,
}

impl GridLayout {
    /// Lays out `items`, looking up each item's expansion state by its [`HasId`] identity.
    pub fn compute<T, E>(items: &[T], expanded: &E, options: &GridOptions) -> Self
    where
        T: HasId + HasTasks,
        E: ExpansionState<T::Id> + ?Sized,
    {
        Self::build(items, options, |item| expanded.is_expanded(item.id()))
    }

    /// Lays out `items`, deriving each identity with `get_id`.
    ///
    /// `get_id` must be stable and injective over `items`.
    pub fn compute_by<T, K, E>(
        items: &[T],
        expanded: &E,
        get_id: impl Fn(&T) -> K,
        options: &GridOptions,
    ) -> Self
    where
        T: HasTasks,
        E: ExpansionState<K> + ?Sized,
    {
        Self::build(items, options, |item| expanded.is_expanded(&get_id(item)))
    }

    fn build<T: HasTasks>(
        items: &[T],
        options: &GridOptions,
        mut is_expanded: impl FnMut(&T) -> bool,
    ) -> Self {
        let policy = &options.height_policy;
        let heights: Vec<u32> = items
            .iter()
            .map(|item| policy.item_height(item, is_expanded(item), options.base_item_height))
            .collect();
        Self::arrange(&heights, options)
    }

    /// Places cards with known estimated heights into rows.
    fn arrange(heights: &[u32], options: &GridOptions) -> Self {
        let per_row = options.items_per_row.max(1);

        let gap = options.gap as u64;
        let mut rows = Vec::with_capacity(heights.len().div_ceil(per_row));
        let mut top = 0u64;
        for chunk in heights.chunks(per_row) {
            let height = chunk.iter().copied().max().unwrap_or(0);
            rows.push(RowSpan { top, height });
            top = top.saturating_add(height as u64).saturating_add(gap);
        }

        let width = options.column_width();
        let items: Vec<VirtualItem> = heights
            .iter()
            .enumerate()
            .map(|(index, &estimated_height)| {
                let row_index = index / per_row;
                let column_index = index % per_row;
                let row = rows[row_index];
                let height = match options.column_mode {
                    ColumnMode::RowLocked => row.height,
                    ColumnMode::FreeFlow => estimated_height,
                };
                VirtualItem {
                    index,
                    row_index,
                    column_index,
                    top: row.top,
                    height,
                    estimated_height,
                    left: column_index as f32 * width,
                    width,
                }
            })
            .collect();

        let content_bottom = rows.last().map_or(0, RowSpan::bottom);
        let total_height = content_bottom.saturating_add(options.bottom_padding as u64);

        vtrace!(
            items = items.len(),
            rows = rows.len(),
            total_height,
            "GridLayout::arrange"
        );

        Self {
            items,
            rows,
            items_per_row: per_row,
            total_height,
        }
    }

    /// Re-places the cards of this layout under new `options`, keeping each card's estimated
    /// height.
    ///
    /// Column count, gap, bottom padding and column mode take effect; `base_item_height` and
    /// `height_policy` only apply on the next full pass.
    pub fn reflow(&mut self, options: &GridOptions) {
        let heights: Vec<u32> = self.items.iter().map(|it| it.estimated_height).collect();
        *self = Self::arrange(&heights, options);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// Height the scroll content must report: last row bottom plus bottom padding.
    pub fn total_height(&self) -> u64 {
        self.total_height
    }

    pub fn items(&self) -> &[VirtualItem] {
        &self.items
    }

    pub fn rows(&self) -> &[RowSpan] {
        &self.rows
    }

    pub fn virtual_item(&self, index: usize) -> Option<VirtualItem> {
        self.items.get(index).copied()
    }

    pub fn row_span(&self, row: usize) -> Option<RowSpan> {
        self.rows.get(row).copied()
    }

    /// Row containing item `index`, if the index is in range.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        (index < self.items.len()).then(|| index / self.items_per_row.max(1))
    }

    /// Rows whose span intersects `[start, end)`.
    ///
    /// Row tops and bottoms are both non-decreasing, so this is two binary searches.
    pub fn row_range_for(&self, start: u64, end: u64) -> RowRange {
        let start_row = self.rows.partition_point(|r| r.bottom() <= start);
        let end_row = self.rows.partition_point(|r| r.top < end).max(start_row);
        RowRange { start_row, end_row }
    }

    /// Calls `f` for each item whose `[top, bottom)` intersects `[start, end)`, in item order.
    pub fn for_each_item_in(&self, start: u64, end: u64, mut f: impl FnMut(VirtualItem)) {
        let range = self.row_range_for(start, end);
        let per_row = self.items_per_row.max(1);
        let first = range.start_row.saturating_mul(per_row).min(self.items.len());
        let last = range.end_row.saturating_mul(per_row).min(self.items.len());
        for item in &self.items[first..last] {
            if item.intersects(start, end) {
                f(*item);
            }
        }
    }
}
