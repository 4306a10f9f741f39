//! Input handling: event types and the dispatcher that converts raw
//! pointer/wheel events into camera navigation calls.

/// Platform-agnostic input events.
pub mod event;

/// Routes events to the active camera of a viewbox.
pub mod dispatcher;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use event::{InputEvent, PointerButton};
