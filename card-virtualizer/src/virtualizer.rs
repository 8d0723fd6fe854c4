use alloc::vec::Vec;

use crate::{
    ExpansionState, GridFrame, GridLayout, GridOptions, GridResult, HasId, HasTasks, RowRange,
    RowSpan, ScrollState, VirtualItem, VisibleItem,
};

/// A headless virtualizer for a grid of expandable cards.
///
/// This type owns exactly one piece of mutable UI state, the scroll offset. Everything else is
/// derived from the caller's items and expansion state, which are passed in on every
/// [`GridVirtualizer::relayout`] and never retained:
///
/// - Call `relayout` whenever the items or their expansion state change, or when
///   [`GridVirtualizer::is_stale`] reports new height options.
/// - Forward scroll events to `handle_scroll`.
/// - Render `visible_items` (or iterate `for_each_visible_item`), positioning each card from its
///   [`VirtualItem`], inside a content box of `total_height`.
#[derive(Clone, Debug)]
pub struct GridVirtualizer {
    options: GridOptions,
    layout: GridLayout,
    scroll_top: u64,
    stale: bool,
}

impl GridVirtualizer {
    /// Creates a virtualizer with an empty layout.
    pub fn new(options: GridOptions) -> GridResult<Self> {
        validate(&options)?;
        vdebug!(
            items_per_row = options.items_per_row,
            container_height = options.container_height,
            overscan = options.overscan,
            "GridVirtualizer::new"
        );
        let mut layout = GridLayout::default();
        layout.reflow(&options);
        Ok(Self {
            options,
            layout,
            scroll_top: 0,
            stale: false,
        })
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Invalid options are rejected and the current ones kept.
    ///
    /// Column count, gap, bottom padding and column mode changes re-place the current cards
    /// immediately. A new `base_item_height` or `height_policy` needs the items, so the layout is
    /// marked stale until the next `relayout`.
    pub fn set_options(&mut self, options: GridOptions) -> GridResult<()> {
        validate(&options)?;
        if self.options.affects_heights(&options) {
            self.stale = true;
        }
        if self.options.affects_arrangement(&options) {
            self.layout.reflow(&options);
        }
        self.options = options;
        vtrace!(
            items_per_row = self.options.items_per_row,
            container_height = self.options.container_height,
            stale = self.stale,
            "GridVirtualizer::set_options"
        );
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut GridOptions)) -> GridResult<()> {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_items_per_row(&mut self, items_per_row: usize) -> GridResult<()> {
        self.update_options(|o| o.items_per_row = items_per_row)
    }

    pub fn set_container_height(&mut self, container_height: u32) -> GridResult<()> {
        self.update_options(|o| o.container_height = container_height)
    }

    pub fn set_overscan(&mut self, overscan: u32) {
        self.options.overscan = overscan;
    }

    /// Recomputes the layout, using each item's [`HasId`] identity for expansion lookups.
    pub fn relayout<T, E>(&mut self, items: &[T], expanded: &E)
    where
        T: HasId + HasTasks,
        E: ExpansionState<T::Id> + ?Sized,
    {
        self.install(GridLayout::compute(items, expanded, &self.options));
    }

    /// Recomputes the layout, deriving each identity with `get_id`.
    pub fn relayout_by<T, K, E>(&mut self, items: &[T], expanded: &E, get_id: impl Fn(&T) -> K)
    where
        T: HasTasks,
        E: ExpansionState<K> + ?Sized,
    {
        self.install(GridLayout::compute_by(items, expanded, get_id, &self.options));
    }

    fn install(&mut self, layout: GridLayout) {
        self.layout = layout;
        self.stale = false;
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Whether height-affecting options changed since the last `relayout`.
    ///
    /// Queries keep answering from the previous layout while stale.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn total_height(&self) -> u64 {
        self.layout.total_height()
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    /// Applies a scroll offset reported by the UI's scroll container.
    pub fn handle_scroll(&mut self, scroll_top: u64) {
        vtrace!(scroll_top, "GridVirtualizer::handle_scroll");
        self.scroll_top = scroll_top;
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.options.container_height as u64)
    }

    pub fn clamp_scroll_top(&self, scroll_top: u64) -> u64 {
        scroll_top.min(self.max_scroll_top())
    }

    pub fn set_scroll_top_clamped(&mut self, scroll_top: u64) {
        self.scroll_top = self.clamp_scroll_top(scroll_top);
    }

    /// Offset that brings the row holding item `index` to the top of the viewport.
    pub fn scroll_to_item_offset(&self, index: usize) -> Option<u64> {
        let row = self.layout.row_of(index)?;
        self.layout.row_span(row).map(|r| r.top)
    }

    /// Scrolls so that the row holding item `index` starts at the top of the viewport.
    ///
    /// Returns the resulting scroll offset. An out-of-range `index` leaves the offset unchanged.
    pub fn scroll_to_item(&mut self, index: usize) -> u64 {
        match self.scroll_to_item_offset(index) {
            Some(top) => {
                vtrace!(index, top, "GridVirtualizer::scroll_to_item");
                self.scroll_top = top;
            }
            None => {
                vwarn!(
                    index,
                    len = self.layout.len(),
                    "scroll_to_item: index out of range"
                );
            }
        }
        self.scroll_top
    }

    /// The `[start, end)` band in which cards are rendered: the viewport widened by the overscan
    /// margin on both sides.
    pub fn overscan_window(&self) -> (u64, u64) {
        let margin = self.options.overscan_margin();
        let start = self.scroll_top.saturating_sub(margin);
        let end = self
            .scroll_top
            .saturating_add(self.options.container_height as u64)
            .saturating_add(margin);
        (start, end)
    }

    pub fn visible_row_range(&self) -> RowRange {
        let (start, end) = self.overscan_window();
        self.layout.row_range_for(start, end)
    }

    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.layout.row_of(index)
    }

    pub fn row_span(&self, row: usize) -> Option<RowSpan> {
        self.layout.row_span(row)
    }

    pub fn virtual_item(&self, index: usize) -> Option<VirtualItem> {
        self.layout.virtual_item(index)
    }

    /// Iterates visible virtual items without allocating.
    pub fn for_each_visible_item(&self, f: impl FnMut(VirtualItem)) {
        let (start, end) = self.overscan_window();
        self.layout.for_each_item_in(start, end, f);
    }

    /// Collects visible virtual items into `out` (clears `out` first).
    ///
    /// This is allocation-free if `out` already has enough capacity.
    pub fn collect_visible_items(&self, out: &mut Vec<VirtualItem>) {
        out.clear();
        self.for_each_visible_item(|it| out.push(it));
    }

    /// Visible cards paired with their positions, in item order.
    ///
    /// `items` must be the slice passed to the last `relayout`. Positions without a matching item
    /// are skipped.
    pub fn visible_items<'a, T>(&self, items: &'a [T]) -> Vec<VisibleItem<'a, T>> {
        let mut out = Vec::new();
        self.for_each_visible_item(|virtual_item| {
            if let Some(item) = items.get(virtual_item.index) {
                out.push(VisibleItem { item, virtual_item });
            }
        });
        out
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            scroll_top: self.scroll_top,
        }
    }

    pub fn restore_scroll_state(&mut self, scroll: ScrollState) {
        self.scroll_top = scroll.scroll_top;
    }

    pub fn frame(&self) -> GridFrame {
        GridFrame {
            container_height: self.options.container_height,
            content_height: self.total_height(),
            scroll: self.scroll_state(),
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn validate(options: &GridOptions) -> GridResult<()> {
    let result = options.validate();
    if let Err(err) = &result {
        vwarn!(error = %err, "rejected grid options");
    }
    result
}
