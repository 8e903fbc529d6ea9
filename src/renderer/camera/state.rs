use nalgebra_glm as glm;

pub const PITCH_LIMIT: f32 = 90.0;

/// Orbit camera parameters. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub orbit: f32,
    pub pitch: f32,
    pub distance: f32,
    pub pan: [f32; 3],
}

impl CameraState {
    /// Pitch is clamped to [-90, 90] and distance to >= 0.
    pub fn new(orbit: f32, pitch: f32, distance: f32, pan: [f32; 3]) -> Self {
        Self {
            orbit,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance: distance.max(0.0),
            pan,
        }
    }

    /// `translate(0, 0, -distance) * rotateX(pitch) * rotateY(orbit) * translate(pan)`
    pub fn view_matrix(&self) -> glm::Mat4 {
        let view = glm::translate(&glm::identity(), &glm::vec3(0.0, 0.0, -self.distance));
        let view = glm::rotate_x(&view, self.pitch.to_radians());
        let view = glm::rotate_y(&view, self.orbit.to_radians());
        glm::translate(&view, &glm::vec3(self.pan[0], self.pan[1], self.pan[2]))
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(0.0, 25.0, 8.0, [0.0, 0.0, 0.0])
    }
}
