/// How a card's vertical extent relates to its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnMode {
    /// Every card in a row reports the row height.
    #[default]
    RowLocked,
    /// Cards keep their own estimated height; only the row tops are shared.
    FreeFlow,
}

/// One row of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSpan {
    pub top: u64,
    /// Height of the tallest card in the row (excludes `gap`).
    pub height: u32,
}

impl RowSpan {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRange {
    pub start_row: usize,
    pub end_row: usize, // exclusive
}

impl RowRange {
    pub fn is_empty(&self) -> bool {
        self.start_row >= self.end_row
    }

    pub fn len(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }
}

/// Position of a single card, derived per layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem {
    pub index: usize,
    pub row_index: usize,
    pub column_index: usize,
    /// Offset of the card's row from the top of the content area.
    pub top: u64,
    /// Row height with [`ColumnMode::RowLocked`], the card's own estimate with
    /// [`ColumnMode::FreeFlow`].
    pub height: u32,
    /// The card's own estimated height, before row synchronization. Never exceeds the row
    /// height.
    pub estimated_height: u32,
    /// Horizontal offset as a percentage of the container width.
    pub left: f32,
    /// Width as a percentage of the container width.
    pub width: f32,
}

impl VirtualItem {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }

    /// Whether `[top, bottom)` overlaps `[start, end)`.
    pub fn intersects(&self, start: u64, end: u64) -> bool {
        self.bottom() > start && self.top < end
    }
}

/// A caller item paired with its computed position.
#[derive(Debug)]
pub struct VisibleItem<'a, T> {
    pub item: &'a T,
    pub virtual_item: VirtualItem,
}

impl<T> Clone for VisibleItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VisibleItem<'_, T> {}
