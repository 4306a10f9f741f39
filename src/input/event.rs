/// Platform-agnostic input events.
///
/// These are fed into a [`Dispatcher`](super::Dispatcher) which turns them
/// into pan/zoom/rotate calls on the active camera of a viewbox.
///
/// # Example
///
/// ```ignore
/// let outcome = dispatcher.handle_event(
///     &mut viewbox,
///     InputEvent::PointerMoved { x: 330.0, y: 300.0 },
/// )?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed at an absolute pixel position.
    PointerPressed {
        /// Which button went down.
        button: PointerButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer moved to an absolute pixel position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button released.
    PointerReleased {
        /// Which button went up.
        button: PointerButton,
    },
    /// Scroll wheel turned at an absolute pixel position.
    Wheel {
        /// Scroll amount in lines/units (positive = zoom in).
        delta: f32,
        /// Horizontal cursor position in physical pixels.
        x: f32,
        /// Vertical cursor position in physical pixels.
        y: f32,
    },
    /// The host surface was resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button — drives panning.
    Primary,
    /// Secondary (right) button — drives drag-zoom.
    Secondary,
    /// Middle button (wheel click) — drives orbit/look rotation.
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}
