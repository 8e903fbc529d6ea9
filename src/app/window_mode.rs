use crate::input::WindowRequest;

/// Fullscreen flag plus the windowed size to come back to.
#[derive(Debug, Clone, Default)]
pub struct WindowMode {
    fullscreen: bool,
    windowed_size: (u32, u32),
}

impl WindowMode {
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle(&mut self, current_size: (u32, u32)) -> WindowRequest {
        self.fullscreen = !self.fullscreen;
        if self.fullscreen {
            self.windowed_size = current_size;
            WindowRequest::EnterFullscreen
        } else {
            let (width, height) = self.windowed_size;
            WindowRequest::Restore { width, height }
        }
    }
}
