#[allow(clippy::module_inception)]
pub mod app;
pub mod handler;
pub mod viewer;
pub mod window_mode;

pub use handler::AppHandler;
