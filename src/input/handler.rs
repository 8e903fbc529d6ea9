use std::time::Instant;

use super::InputEvent;

/// Something the window system has to do on behalf of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    EnterFullscreen,
    /// Leave fullscreen and restore the windowed size.
    Restore { width: u32, height: u32 },
}

/// What the host has to do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
    pub window: Option<WindowRequest>,
}

impl EventResponse {
    pub fn repaint() -> Self {
        Self {
            repaint: true,
            ..Self::default()
        }
    }

    pub fn exit() -> Self {
        Self {
            exit: true,
            ..Self::default()
        }
    }

    pub fn window(request: WindowRequest) -> Self {
        Self {
            window: Some(request),
            ..Self::default()
        }
    }
}

/// Consumes platform-agnostic input. `now` is the event arrival time and
/// `window_size` the current inner size of the window.
pub trait InputHandler {
    fn handle_input(
        &mut self,
        event: InputEvent,
        now: Instant,
        window_size: (u32, u32),
    ) -> EventResponse;
}
