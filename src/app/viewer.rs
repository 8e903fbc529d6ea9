use std::time::Instant;

use crate::animation::{AnimationClock, Toggle};
use crate::app::window_mode::WindowMode;
use crate::input::{EventResponse, InputEvent, InputHandler, Key};
use crate::renderer::camera::{CameraController, CameraState};
use crate::settings::ControlSettings;
use crate::ui::Ui;

/// Everything the viewer knows apart from the GPU: camera, animation mode,
/// window mode and the help overlay.
pub struct Viewer {
    pub camera_controller: CameraController,
    pub clock: AnimationClock,
    pub window_mode: WindowMode,
    pub ui: Ui,
    alt_pressed: bool,
}

impl Viewer {
    pub fn new(controls: ControlSettings) -> Self {
        Self {
            camera_controller: CameraController::new(CameraState::default(), controls),
            clock: AnimationClock::new(),
            window_mode: WindowMode::default(),
            ui: Ui::new(),
            alt_pressed: false,
        }
    }

    pub fn camera(&self) -> &CameraState {
        self.camera_controller.state()
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_animating()
    }

    fn on_key(&mut self, key: Key, now: Instant, window_size: (u32, u32)) -> EventResponse {
        match key {
            Key::Escape | Key::Char('q') => EventResponse::exit(),
            Key::Space => {
                match self.clock.toggle(now) {
                    Toggle::Started => log::debug!("Animation started"),
                    Toggle::Stopped(rate) => {
                        log::debug!("Animation stopped after {} frames", self.clock.frames());
                        log::info!("framerate: {rate}");
                    }
                }
                EventResponse::repaint()
            }
            Key::F1 => {
                self.ui.toggle_help();
                log::debug!("Help visible: {}", self.ui.help_visible());
                EventResponse::repaint()
            }
            Key::Enter if !self.alt_pressed => EventResponse::default(),
            Key::Enter | Key::Char('f') => {
                let request = self.window_mode.toggle(window_size);
                log::debug!(
                    "Window request: {request:?} (fullscreen: {})",
                    self.window_mode.is_fullscreen()
                );
                EventResponse::window(request)
            }
            _ => EventResponse::default(),
        }
    }
}

impl InputHandler for Viewer {
    fn handle_input(
        &mut self,
        event: InputEvent,
        now: Instant,
        window_size: (u32, u32),
    ) -> EventResponse {
        match event {
            InputEvent::CursorMoved { x, y } => {
                if self.camera_controller.on_mouse_move((x, y)) {
                    EventResponse::repaint()
                } else {
                    EventResponse::default()
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                self.camera_controller.on_mouse_button(button, pressed);
                EventResponse::default()
            }
            InputEvent::ModifiersChanged { alt } => {
                self.alt_pressed = alt;
                EventResponse::default()
            }
            InputEvent::Key(key) => self.on_key(key, now, window_size),
        }
    }
}
