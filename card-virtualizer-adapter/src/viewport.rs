/// Width breakpoints that pick the number of grid columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Below this width the grid has one column.
    pub single_column_below: u32,
    /// Below this width (and at or above `single_column_below`) the grid has two columns.
    pub two_columns_below: u32,
    /// Columns used at or above `two_columns_below`.
    pub wide_columns: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_column_below: 640,
            two_columns_below: 1024,
            wide_columns: 3,
        }
    }
}

impl Breakpoints {
    pub fn columns_for_width(&self, width: u32) -> usize {
        if width < self.single_column_below {
            1
        } else if width < self.two_columns_below {
            2
        } else {
            self.wide_columns.max(1)
        }
    }
}

/// Derives the scroll container's height from the window height.
///
/// The container fills what is left below the page chrome (`offset_top`) minus a bottom margin,
/// but never shrinks below `min_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainerSizing {
    pub offset_top: u32,
    pub bottom_margin: u32,
    pub min_height: u32,
}

impl Default for ContainerSizing {
    fn default() -> Self {
        Self {
            offset_top: 200,
            bottom_margin: 100,
            min_height: 400,
        }
    }
}

impl ContainerSizing {
    pub fn height_for_viewport(&self, viewport_height: u32) -> u32 {
        viewport_height
            .saturating_sub(self.offset_top)
            .saturating_sub(self.bottom_margin)
            .max(self.min_height)
    }
}

/// When to offer a "back to top" affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollToTop {
    pub threshold: u64,
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self { threshold: 300 }
    }
}

impl ScrollToTop {
    pub fn is_visible(&self, scroll_top: u64) -> bool {
        scroll_top > self.threshold
    }
}
