/// Snapshot of the scroll offset, for restoring a grid across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_top: u64,
}

/// What a renderer needs to size its two boxes: the fixed-height scroll container and the
/// content area inside it whose height drives the native scrollbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridFrame {
    pub container_height: u32,
    pub content_height: u64,
    pub scroll: ScrollState,
}

impl GridFrame {
    /// Largest scroll offset the container can reach.
    pub fn max_scroll_top(&self) -> u64 {
        self.content_height
            .saturating_sub(self.container_height as u64)
    }
}
