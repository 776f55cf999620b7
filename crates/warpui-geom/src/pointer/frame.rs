use crate::raycast::CanvasHit;

/// Per-frame pointer transitions.
///
/// `PointerTracker` holds the persistent state (hovering, button held, last
/// position). `PointerFrame` reports what changed during one update.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerFrame {
    /// Where the pointer ray meets the canvas this frame.
    pub hit: Option<CanvasHit>,

    /// Pointer moved onto the canvas.
    pub entered: bool,

    /// Pointer moved off the canvas.
    pub exited: bool,

    /// Button went down while over the canvas.
    pub pressed: bool,

    /// Button went up after a press that started on the canvas.
    pub released: bool,

    /// Release over the canvas that completes a press over it.
    pub clicked: bool,

    /// Pointer travelled past the drag threshold while held.
    pub drag_started: bool,
}

impl PointerFrame {
    /// Whether anything changed beyond the hit itself.
    pub fn has_transitions(&self) -> bool {
        self.entered || self.exited || self.pressed || self.released || self.clicked || self.drag_started
    }
}
