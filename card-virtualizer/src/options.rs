use crate::{ColumnMode, GridError, GridResult, HeightPolicy};

/// Configuration for [`crate::GridVirtualizer`] and [`crate::GridLayout`].
///
/// All lengths are in layout units (pixels for a DOM adapter, cells for a TUI).
///
/// With `feature = "serde"`, missing fields fall back to [`GridOptions::default`], so a partial
/// config such as `{"items_per_row": 2}` is valid input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    /// Height of a collapsed card.
    pub base_item_height: u32,
    /// Height of the scroll viewport.
    pub container_height: u32,
    pub items_per_row: usize,
    /// Extra margin around the viewport, in steps of `overscan_unit`.
    pub overscan: u32,
    pub overscan_unit: u32,
    /// Space between rows.
    pub gap: u32,
    /// Space after the last row, so momentum scrolling does not stop on a hard edge.
    pub bottom_padding: u32,
    pub column_mode: ColumnMode,
    pub height_policy: HeightPolicy,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            base_item_height: 280,
            container_height: 600,
            items_per_row: 3,
            overscan: 3,
            overscan_unit: 100,
            gap: 24,
            bottom_padding: 200,
            column_mode: ColumnMode::RowLocked,
            height_policy: HeightPolicy::default(),
        }
    }
}

impl GridOptions {
    /// Creates options with the required geometry and defaults for everything else.
    pub fn new(base_item_height: u32, container_height: u32, items_per_row: usize) -> Self {
        Self {
            base_item_height,
            container_height,
            items_per_row,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> GridResult<()> {
        if self.items_per_row == 0 {
            return Err(GridError::ZeroItemsPerRow);
        }
        if self.container_height == 0 {
            return Err(GridError::ZeroContainerHeight);
        }
        if self.base_item_height == 0 {
            return Err(GridError::ZeroBaseItemHeight);
        }
        self.height_policy.validate()
    }

    /// `overscan * overscan_unit`: how far past each viewport edge cards are still rendered.
    pub fn overscan_margin(&self) -> u64 {
        self.overscan as u64 * self.overscan_unit as u64
    }

    /// Card width as a percentage of the container width.
    pub fn column_width(&self) -> f32 {
        100.0 / self.items_per_row.max(1) as f32
    }

    pub fn with_base_item_height(mut self, base_item_height: u32) -> Self {
        self.base_item_height = base_item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_items_per_row(mut self, items_per_row: usize) -> Self {
        self.items_per_row = items_per_row;
        self
    }

    pub fn with_overscan(mut self, overscan: u32) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_overscan_unit(mut self, overscan_unit: u32) -> Self {
        self.overscan_unit = overscan_unit;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_bottom_padding(mut self, bottom_padding: u32) -> Self {
        self.bottom_padding = bottom_padding;
        self
    }

    pub fn with_column_mode(mut self, column_mode: ColumnMode) -> Self {
        self.column_mode = column_mode;
        self
    }

    pub fn with_height_policy(mut self, height_policy: HeightPolicy) -> Self {
        self.height_policy = height_policy;
        self
    }

    /// Whether switching from `self` to `other` changes the estimated card heights, which can
    /// only be recomputed from the items.
    pub(crate) fn affects_heights(&self, other: &Self) -> bool {
        self.base_item_height != other.base_item_height
            || self.height_policy != other.height_policy
    }

    /// Whether switching from `self` to `other` moves cards without changing their estimates.
    ///
    /// Viewport-only fields (`container_height`, `overscan`, `overscan_unit`) do neither.
    pub(crate) fn affects_arrangement(&self, other: &Self) -> bool {
        self.items_per_row != other.items_per_row
            || self.gap != other.gap
            || self.bottom_padding != other.bottom_padding
            || self.column_mode != other.column_mode
    }
}
