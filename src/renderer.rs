pub mod camera;
pub mod projection;
pub mod render;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod vertex;
