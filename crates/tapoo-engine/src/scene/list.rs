use crate::coords::Rect;

use super::DrawCmd;

/// A single draw item: command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Items paint in insertion order. `clear()` keeps the allocation so a list
/// can be reused across frames.
///
/// # Clipping
///
/// Use [`push_clip`] / [`pop_clip`] to scope draw commands to a scissor rect.
/// Nested clips are intersected with their parent.
///
/// ```ignore
/// draw_list.push_clip(surface_rect);
/// // ... push lines ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command. The item inherits the current clip rect.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    /// Begins a scissor region. All draw commands pushed until [`pop_clip`] are clipped
    /// to `rect` (intersected with any parent clip rect).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap produces a zero-area rect; renderers skip those items.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by [`push_clip`].
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}
