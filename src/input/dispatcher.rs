//! Converts raw pointer/wheel events into camera navigation.
//!
//! The `Dispatcher` owns all transient gesture state (drag flag, press and
//! last positions, held button). One dispatcher serves one viewbox; state is
//! never shared across viewboxes, and every press/release cycle starts
//! fresh.

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use crate::camera::Unsupported;
use crate::error::VantageError;
use crate::viewbox::ViewBox;

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchOutcome {
    /// Camera state (or viewbox extents) changed; a redraw is warranted.
    CameraUpdated,
    /// Only internal tracking state changed.
    Tracked,
    /// The gesture asked for a capability the active camera lacks; the
    /// operation was a no-op.
    Unsupported(Unsupported),
}

/// Per-viewbox gesture interpreter.
///
/// Drag deltas are normalized into the viewbox's `[-1, 1]` range with the
/// vertical axis negated (screen-down is world-up), then routed by button:
/// primary pans, secondary zooms anchored at the press point, middle
/// rotates. Wheel turns zoom about the cursor.
#[derive(Debug)]
pub struct Dispatcher {
    is_dragging: bool,
    press_position: Vec2,
    last_position: Vec2,
    held_button: Option<PointerButton>,
    wheel_sensitivity: f32,
}

impl Dispatcher {
    /// A dispatcher with the reference wheel sensitivity (0.1 zoom units
    /// per wheel line).
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_dragging: false,
            press_position: Vec2::ZERO,
            last_position: Vec2::ZERO,
            held_button: None,
            wheel_sensitivity: 0.1,
        }
    }

    /// Override the wheel-to-zoom sensitivity.
    #[must_use]
    pub fn with_wheel_sensitivity(mut self, sensitivity: f32) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Feed one event through the dispatcher.
    ///
    /// Missing-camera errors abort the operation and are returned to the
    /// caller; unsupported capabilities are logged and reported as a benign
    /// [`DispatchOutcome::Unsupported`] so the event loop keeps running.
    pub fn handle_event(
        &mut self,
        viewbox: &mut ViewBox,
        event: InputEvent,
    ) -> Result<DispatchOutcome, VantageError> {
        match event {
            InputEvent::PointerPressed { button, x, y } => {
                self.press_position = Vec2::new(x, y);
                self.last_position = self.press_position;
                self.held_button = Some(button);
                self.is_dragging = true;
                Ok(DispatchOutcome::Tracked)
            }
            InputEvent::PointerMoved { x, y } => {
                self.handle_moved(viewbox, Vec2::new(x, y))
            }
            InputEvent::PointerReleased { .. } => {
                self.is_dragging = false;
                self.held_button = None;
                Ok(DispatchOutcome::Tracked)
            }
            InputEvent::Wheel { delta, x, y } => {
                let step = delta * self.wheel_sensitivity;
                let center = viewbox.normalize(Vec2::new(x, y));
                self.apply(viewbox.camera_mut()?.zoom(Vec2::splat(step), center))
            }
            InputEvent::Resized { width, height } => {
                viewbox.resize(width, height);
                Ok(DispatchOutcome::CameraUpdated)
            }
        }
    }

    fn handle_moved(
        &mut self,
        viewbox: &mut ViewBox,
        position: Vec2,
    ) -> Result<DispatchOutcome, VantageError> {
        let last = std::mem::replace(&mut self.last_position, position);
        let Some(button) = self.held_button.filter(|_| self.is_dragging)
        else {
            return Ok(DispatchOutcome::Tracked);
        };

        let current = viewbox.normalize(position);
        let previous = viewbox.normalize(last);
        // Screen-down is world-up: negate the vertical delta.
        let delta =
            Vec2::new(current.x - previous.x, -(current.y - previous.y));
        let center = viewbox.normalize(self.press_position);

        let camera = viewbox.camera_mut()?;
        match button {
            PointerButton::Primary => self.apply(camera.pan(delta)),
            PointerButton::Secondary => self.apply(camera.zoom(delta, center)),
            PointerButton::Middle => self.apply(camera.rotate(delta)),
        }
    }

    fn apply(
        &self,
        result: Result<(), Unsupported>,
    ) -> Result<DispatchOutcome, VantageError> {
        match result {
            Ok(()) => Ok(DispatchOutcome::CameraUpdated),
            Err(unsupported) => {
                log::debug!("ignoring gesture: {unsupported}");
                Ok(DispatchOutcome::Unsupported(unsupported))
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
