use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::frame::PointerFrame;
use crate::coords::Ray;
use crate::shape::CurvedCanvas;

/// One control-method reading, already in canvas-local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub ray: Ray,
    pub pressed: bool,
}

impl PointerSample {
    #[inline]
    pub fn new(ray: Ray, pressed: bool) -> Self {
        Self { ray, pressed }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Canvas-space distance from the press position that starts a drag.
    pub drag_threshold: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { drag_threshold: 10.0 }
    }
}

/// Pointer state for a single canvas.
///
/// Holds whether the pointer is over the canvas, whether the button is held,
/// and the last canvas position. Transitions go into the returned
/// [`PointerFrame`].
#[derive(Debug, Default)]
pub struct PointerTracker {
    pub config: PointerConfig,

    /// Pointer ray currently hits the canvas.
    pub hovering: bool,

    /// Button is held.
    pub button_down: bool,

    /// Canvas position where the current press started over the canvas.
    pub press_position: Option<Vec2>,

    /// The current press has turned into a drag.
    pub dragging: bool,

    /// Last canvas position, `None` while off the canvas.
    pub position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new(config: PointerConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Applies one sample and returns this frame's transitions.
    pub fn update(&mut self, canvas: &CurvedCanvas, sample: PointerSample) -> PointerFrame {
        let mut frame = PointerFrame { hit: canvas.raycast(&sample.ray), ..PointerFrame::default() };
        let over = frame.hit.is_some();

        match (self.hovering, over) {
            (false, true) => frame.entered = true,
            (true, false) => frame.exited = true,
            _ => {}
        }
        self.hovering = over;
        self.position = frame.hit.map(|h| h.canvas_point);

        match (self.button_down, sample.pressed) {
            (false, true) => {
                self.button_down = true;
                if let Some(pos) = self.position {
                    self.press_position = Some(pos);
                    frame.pressed = true;
                }
            }
            (true, false) => {
                self.button_down = false;
                if self.press_position.take().is_some() {
                    frame.released = true;
                    frame.clicked = over && !self.dragging;
                }
                self.dragging = false;
            }
            (true, true) => {
                if let (Some(start), Some(pos), false) = (self.press_position, self.position, self.dragging) {
                    if start.distance(pos) >= self.config.drag_threshold {
                        self.dragging = true;
                        frame.drag_started = true;
                    }
                }
            }
            (false, false) => {}
        }

        if frame.has_transitions() {
            log::trace!("pointer frame: {:?}", frame);
        }
        frame
    }

    /// Forgets all state, e.g. when the control method changes.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}
