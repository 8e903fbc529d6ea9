use nalgebra_glm as glm;

pub const Z_NEAR: f32 = 0.5;
pub const Z_FAR: f32 = 500.0;
/// Vertical half-extent of the near plane per unit of near distance.
const HALF_HEIGHT: f32 = 0.4663;

/// Perspective frustum for a window of the given size: a fixed vertical
/// extent widened by the aspect ratio. Depth maps to 0..1.
pub fn perspective(width: u32, height: u32) -> glm::Mat4 {
    let aspect = width as f32 / height.max(1) as f32;
    let vsz = HALF_HEIGHT * Z_NEAR;
    frustum(-aspect * vsz, aspect * vsz, -vsz, vsz, Z_NEAR, Z_FAR)
}

/// Right-handed off-axis frustum with zero-to-one depth.
#[rustfmt::skip]
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> glm::Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;
    glm::Mat4::new(
        2.0 * near / w, 0.0, (right + left) / w, 0.0,
        0.0, 2.0 * near / h, (top + bottom) / h, 0.0,
        0.0, 0.0, -far / d, -far * near / d,
        0.0, 0.0, -1.0, 0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(m: &glm::Mat4, p: glm::Vec3) -> glm::Vec3 {
        let clip = m * glm::vec4(p.x, p.y, p.z, 1.0);
        glm::vec3(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let m = perspective(800, 600);
        let near = project(&m, glm::vec3(0.0, 0.0, -Z_NEAR));
        let far = project(&m, glm::vec3(0.0, 0.0, -Z_FAR));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn near_plane_corner_maps_to_ndc_corner() {
        let m = perspective(800, 600);
        let vsz = HALF_HEIGHT * Z_NEAR;
        let aspect = 800.0 / 600.0;
        let corner = project(&m, glm::vec3(aspect * vsz, vsz, -Z_NEAR));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let m = perspective(800, 0);
        assert!(m.iter().all(|v| v.is_finite()));
    }
}
