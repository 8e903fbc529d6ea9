use winit::event_loop::{ControlFlow, EventLoop};

mod animation;
mod app;
mod error;
mod input;
mod renderer;
mod scene;
mod settings;
mod ui;

pub const CONFY_APP_NAME: &str = "viewdemo-rs";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = settings::Settings::load();
    log::info!(
        "Window {}x{}, drag sensitivity orbit={} pan={} zoom={}",
        settings.window.width,
        settings.window.height,
        settings.controls.orbit,
        settings.controls.pan,
        settings.controls.zoom
    );

    let event_loop = EventLoop::new().map_err(error::ViewerError::from)?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = app::AppHandler::new(settings);
    event_loop
        .run_app(&mut handler)
        .map_err(error::ViewerError::from)?;

    if let Some(e) = handler.error.take() {
        return Err(e.into());
    }

    Ok(())
}
