use crate::app::viewer::Viewer;
use crate::error::ViewerError;
use crate::input::{EventResponse, InputEvent, InputHandler, Key, WindowRequest};
use crate::renderer::renderer::Renderer;
use crate::scene::Scene;
use crate::settings::Settings;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use std::sync::Arc;
use std::time::Instant;
use winit::event::{ElementState, WindowEvent};
use winit::window::{Fullscreen, Window};

pub struct App {
    pub window: Arc<Window>,
    viewer: Viewer,
    renderer: Renderer,
    egui_state: State,
}

impl App {
    pub async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, ViewerError> {
        let scene = Scene::demo();
        let renderer = Renderer::new(window.clone(), &scene).await?;

        let egui_state = State::new(
            renderer.egui_context(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        Ok(Self {
            window,
            viewer: Viewer::new(settings.controls),
            renderer,
            egui_state,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.viewer.is_animating()
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        // The overlay has no widgets, egui only needs to see the events
        let _ = self.egui_state.on_window_event(&self.window, event);

        let input = match event {
            WindowEvent::CloseRequested => return EventResponse::exit(),
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                return EventResponse::repaint();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return EventResponse::default();
                }
                InputEvent::Key(Key::from(&event.logical_key))
            }
            WindowEvent::ModifiersChanged(modifiers) => InputEvent::ModifiersChanged {
                alt: modifiers.state().alt_key(),
            },
            WindowEvent::MouseInput { state, button, .. } => InputEvent::MouseButton {
                button: (*button).into(),
                pressed: *state == ElementState::Pressed,
            },
            WindowEvent::CursorMoved { position, .. } => InputEvent::CursorMoved {
                x: position.x as i32,
                y: position.y as i32,
            },
            _ => return EventResponse::default(),
        };

        let size = self.window.inner_size();
        let response = self
            .viewer
            .handle_input(input, Instant::now(), (size.width, size.height));

        if let Some(request) = response.window {
            self.apply_window_request(request);
        }
        response
    }

    fn apply_window_request(&self, request: WindowRequest) {
        match request {
            WindowRequest::EnterFullscreen => {
                self.window
                    .set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
            WindowRequest::Restore { width, height } => {
                self.window.set_fullscreen(None);
                let _ = self
                    .window
                    .request_inner_size(winit::dpi::PhysicalSize::new(width, height));
            }
        }
    }

    /// Draw one frame and count it towards the animation frame rate.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let full_output = egui_ctx.run(raw_input, |ctx| {
            self.viewer.ui.show(ctx);
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let (width, height) = self.renderer.size();
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let spin = self.viewer.clock.spin_degrees(Instant::now());
        self.renderer.render(
            self.viewer.camera(),
            spin,
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
        )?;

        self.viewer.clock.record_frame();
        Ok(())
    }

    pub fn is_minimized(&self) -> bool {
        self.renderer.is_minimized()
    }

    pub fn reconfigure_surface(&mut self) {
        self.renderer.reconfigure();
    }
}
