//! Pointer normalization and the intro gate in front of it.

use crate::viewport::Viewport;

/// Cursor position centered on the viewport: x grows to the right, y grows
/// upward, both roughly within [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client_x: f32, client_y: f32, viewport: &Viewport) -> Self {
        let w = viewport.width.max(1) as f32;
        let h = viewport.height.max(1) as f32;
        Self {
            x: client_x / w - 0.5,
            y: -(client_y / h - 0.5),
        }
    }
}

/// What the caller must do with the raw event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    Accepted,
    /// The intro is still running: block default handling and propagation.
    Suppressed,
}

/// Accepts pointer moves only once the camera has dollied in to the
/// threshold; before that the pointer state is left untouched.
#[derive(Clone, Copy, Debug)]
pub struct PointerGate {
    pub threshold_z: f32,
}

impl PointerGate {
    pub fn new(threshold_z: f32) -> Self {
        Self { threshold_z }
    }

    pub fn on_pointer_move(
        &self,
        pointer: &mut PointerState,
        client_x: f32,
        client_y: f32,
        viewport: &Viewport,
        camera_z: f32,
    ) -> PointerOutcome {
        if camera_z <= self.threshold_z {
            *pointer = PointerState::from_client(client_x, client_y, viewport);
            PointerOutcome::Accepted
        } else {
            PointerOutcome::Suppressed
        }
    }
}
