use card_virtualizer::{
    ExpansionKey, ExpansionMap, GridOptions, GridResult, GridVirtualizer, HasId, HasTasks,
};

use crate::{Breakpoints, ContainerSizing, Easing, ScrollToTop, ScrollTween};

/// A framework-neutral controller that wraps a [`GridVirtualizer`] and owns the UI-side state
/// around it: which cards are expanded, the responsive column count, the container height and an
/// optional smooth-scroll animation.
///
/// Adapters drive it by calling:
/// - `on_container_width` / `on_viewport_height` when the window resizes
/// - `on_scroll` when the scroll container reports a new offset
/// - `relayout(items)` whenever items or expansion state changed
/// - `tick(now_ms)` each frame while `is_animating()`, writing the returned offset back to the
///   real scroll container
#[derive(Clone, Debug)]
pub struct GridController<K> {
    v: GridVirtualizer,
    expanded: ExpansionMap<K>,
    breakpoints: Breakpoints,
    sizing: ContainerSizing,
    scroll_to_top: ScrollToTop,
    reorder_follow_rows: usize,
    tween: Option<ScrollTween>,
}

impl<K: ExpansionKey> GridController<K> {
    pub fn new(options: GridOptions) -> GridResult<Self> {
        GridVirtualizer::new(options).map(Self::from_virtualizer)
    }

    pub fn from_virtualizer(v: GridVirtualizer) -> Self {
        Self {
            v,
            expanded: ExpansionMap::default(),
            breakpoints: Breakpoints::default(),
            sizing: ContainerSizing::default(),
            scroll_to_top: ScrollToTop::default(),
            reorder_follow_rows: 2,
            tween: None,
        }
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_container_sizing(mut self, sizing: ContainerSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_scroll_to_top(mut self, scroll_to_top: ScrollToTop) -> Self {
        self.scroll_to_top = scroll_to_top;
        self
    }

    /// A drag that moves a card by more than this many rows scrolls to its new position.
    pub fn with_reorder_follow_rows(mut self, rows: usize) -> Self {
        self.reorder_follow_rows = rows;
        self
    }

    pub fn virtualizer(&self) -> &GridVirtualizer {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut GridVirtualizer {
        &mut self.v
    }

    pub fn into_virtualizer(self) -> GridVirtualizer {
        self.v
    }

    pub fn expanded(&self) -> &ExpansionMap<K> {
        &self.expanded
    }

    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Records a card's expansion state. Takes effect on the next `relayout`.
    pub fn set_expanded(&mut self, id: K, expanded: bool) {
        self.expanded.insert(id, expanded);
    }

    /// Flips a card between expanded and collapsed and returns the new state.
    pub fn toggle_expanded(&mut self, id: K) -> bool {
        let next = !self.is_expanded(&id);
        self.expanded.insert(id, next);
        next
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn relayout<T>(&mut self, items: &[T])
    where
        T: HasId<Id = K> + HasTasks,
    {
        self.v.relayout(items, &self.expanded);
    }

    /// Applies a new container width. Returns `true` when the column count changed; the current
    /// cards are re-placed into the new columns right away.
    pub fn on_container_width(&mut self, width: u32) -> GridResult<bool> {
        let columns = self.breakpoints.columns_for_width(width);
        if columns == self.v.options().items_per_row {
            return Ok(false);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "card_virtualizer_adapter",
            width,
            columns,
            "column count changed"
        );
        self.v.set_items_per_row(columns)?;
        Ok(true)
    }

    /// Applies a new window height and returns the resulting container height.
    pub fn on_viewport_height(&mut self, viewport_height: u32) -> GridResult<u32> {
        let height = self.sizing.height_for_viewport(viewport_height);
        self.v.set_container_height(height)?;
        Ok(height)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active animation.
    pub fn on_scroll(&mut self, scroll_top: u64) {
        self.cancel_animation();
        self.v.handle_scroll(scroll_top);
    }

    pub fn scroll_top(&self) -> u64 {
        self.v.scroll_top()
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.scroll_to_top.is_visible(self.v.scroll_top())
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Advances the active animation.
    ///
    /// Returns the new scroll offset while animating, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;
        self.v.set_scroll_top_clamped(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.v.scroll_top())
    }

    /// Jumps to the row holding item `index` (no animation).
    ///
    /// Out-of-range indexes leave the offset unchanged. Returns the resulting offset.
    pub fn scroll_to_item(&mut self, index: usize) -> u64 {
        self.cancel_animation();
        self.v.scroll_to_item(index)
    }

    /// Starts animating towards the row holding item `index`.
    ///
    /// The target is clamped to what the container can scroll to. Returns it, or `None` (and
    /// starts nothing) if `index` is out of range.
    pub fn start_smooth_scroll_to_item(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<u64> {
        let top = self.v.scroll_to_item_offset(index)?;
        Some(self.start_tween(top, now_ms, duration_ms, easing))
    }

    pub fn start_smooth_scroll_to_top(
        &mut self,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        self.start_tween(0, now_ms, duration_ms, easing)
    }

    fn start_tween(&mut self, offset: u64, now_ms: u64, duration_ms: u64, easing: Easing) -> u64 {
        let to = self.v.clamp_scroll_top(offset);
        let tween = match self.tween {
            Some(mut tween) => {
                tween.retarget(now_ms, to, duration_ms);
                tween
            }
            None => ScrollTween::new(self.v.scroll_top(), to, now_ms, duration_ms, easing),
        };
        self.tween = Some(tween);
        to
    }

    /// Keeps a dragged card in view after a reorder from `old_index` to `new_index`.
    ///
    /// Small moves stay put; a move across more than `reorder_follow_rows` rows jumps to the new
    /// position. Returns the new offset if it scrolled.
    pub fn follow_reorder(&mut self, old_index: usize, new_index: usize) -> Option<u64> {
        let per_row = self.v.options().items_per_row.max(1);
        let rows_moved = (old_index / per_row).abs_diff(new_index / per_row);
        if rows_moved <= self.reorder_follow_rows {
            return None;
        }
        self.v.scroll_to_item_offset(new_index)?;
        Some(self.scroll_to_item(new_index))
    }
}
