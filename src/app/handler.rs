use crate::app::app::App;
use crate::error::ViewerError;
use crate::settings::Settings;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

pub struct AppHandler {
    pub app: Option<App>,
    pub settings: Settings,
    /// Set when startup failed; the loop exits and `main` reports it.
    pub error: Option<ViewerError>,
}

impl AppHandler {
    pub fn new(settings: Settings) -> Self {
        Self {
            app: None,
            settings,
            error: None,
        }
    }

    fn create_app(&self, event_loop: &ActiveEventLoop) -> Result<App, ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.settings.window.title.as_str())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        pollster::block_on(App::new(window, &self.settings))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(app) = &mut self.app else { return };

        match app.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                app.reconfigure_surface();
                if !app.is_minimized() {
                    app.window.request_redraw();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Skipped frame: {e}"),
        }

        // A minimised window gets its next redraw from the Resized event
        if app.is_animating() && !app.is_minimized() {
            app.window.request_redraw();
        }
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match self.create_app(event_loop) {
            Ok(app) => {
                app.window.request_redraw();
                self.app = Some(app);
            }
            Err(e) => {
                log::error!("Startup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::RedrawRequested = event {
            self.redraw(event_loop);
            return;
        }

        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Spin continuously while animating, otherwise sleep until input
        let animating = self
            .app
            .as_ref()
            .is_some_and(|app| app.is_animating() && !app.is_minimized());
        event_loop.set_control_flow(if animating {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        });
    }
}
