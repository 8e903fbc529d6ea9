//! Platform-agnostic input: event types and the handler capability that
//! turns them into view changes.

pub mod event;
pub mod handler;

pub use event::{InputEvent, Key, MouseButton};
pub use handler::{EventResponse, InputHandler, WindowRequest};
