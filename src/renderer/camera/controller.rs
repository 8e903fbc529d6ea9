use super::CameraState;
use super::state::PITCH_LIMIT;
use crate::input::MouseButton;
use crate::settings::ControlSettings;

/// Handles camera input and transformations
pub struct CameraController {
    state: CameraState,
    sensitivity: ControlSettings,
    left_mouse_pressed: bool,
    middle_mouse_pressed: bool,
    right_mouse_pressed: bool,
    last_mouse_pos: (i32, i32),
}

impl CameraController {
    pub fn new(state: CameraState, sensitivity: ControlSettings) -> Self {
        Self {
            state,
            sensitivity,
            left_mouse_pressed: false,
            middle_mouse_pressed: false,
            right_mouse_pressed: false,
            last_mouse_pos: (0, 0),
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.left_mouse_pressed || self.middle_mouse_pressed || self.right_mouse_pressed
    }

    /// Handle mouse button press/release. No position is recorded here:
    /// `on_mouse_move` tracks the cursor on every move, so the first drag
    /// delta is measured from the last reported position.
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left_mouse_pressed = pressed,
            MouseButton::Middle => self.middle_mouse_pressed = pressed,
            MouseButton::Right => self.right_mouse_pressed = pressed,
            MouseButton::Other => {}
        }
    }

    /// Handle cursor movement. Returns true when the view needs a redraw.
    pub fn on_mouse_move(&mut self, position: (i32, i32)) -> bool {
        let (dx, dy) = (position.0 - self.last_mouse_pos.0, position.1 - self.last_mouse_pos.1);
        self.last_mouse_pos = position;
        if !self.is_dragging() {
            return false;
        }
        self.drag(dx, dy)
    }

    /// Apply a drag delta to every operation whose button is held.
    /// Returns true when the camera changed.
    pub fn drag(&mut self, dx: i32, dy: i32) -> bool {
        if dx == 0 && dy == 0 {
            return false;
        }

        let mut changed = false;
        if self.left_mouse_pressed {
            self.rotate(dx as f32, dy as f32);
            changed = true;
        }
        if self.middle_mouse_pressed {
            self.pan(dx as f32, dy as f32);
            changed = true;
        }
        if self.right_mouse_pressed {
            self.zoom(dy as f32);
            changed = true;
        }
        changed
    }

    /// Rotate camera around the scene origin
    fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.state.orbit += delta_x * self.sensitivity.orbit;
        self.state.pitch += delta_y * self.sensitivity.orbit;
        self.state.pitch = self.state.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Pan camera (move scene origin) along the current screen axes
    fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let theta = self.state.orbit.to_radians();
        let phi = self.state.pitch.to_radians();

        let up = nalgebra_glm::vec3(
            -theta.sin() * phi.sin(),
            -phi.cos(),
            theta.cos() * phi.sin(),
        );
        let right = nalgebra_glm::vec3(theta.cos(), 0.0, theta.sin());

        let speed = self.sensitivity.pan;
        self.state.pan[0] += (right.x * delta_x + up.x * delta_y) * speed;
        self.state.pan[1] += up.y * delta_y * speed;
        self.state.pan[2] += (right.z * delta_x + up.z * delta_y) * speed;
    }

    /// Move the camera towards or away from the origin
    fn zoom(&mut self, delta_y: f32) {
        self.state.distance += delta_y * self.sensitivity.zoom;
        if self.state.distance < 0.0 {
            self.state.distance = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(CameraState::default(), ControlSettings::default())
    }

    fn held(button: MouseButton) -> CameraController {
        let mut c = controller();
        c.on_mouse_button(button, true);
        c
    }

    #[test]
    fn orbit_drag_clamps_pitch() {
        let mut c = held(MouseButton::Left);
        assert!(c.drag(10, 200));
        assert_eq!(c.state().orbit, 5.0);
        assert_eq!(c.state().pitch, 90.0);
    }

    #[test]
    fn pitch_stays_in_range_for_any_drag_sequence() {
        let mut c = held(MouseButton::Left);
        let deltas = [
            (3, 500),
            (-7, -1000),
            (0, 13),
            (120, -333),
            (-1, 999),
            (5, -1),
            (0, -720),
            (42, 180),
        ];
        for (dx, dy) in deltas.iter().cycle().take(64) {
            c.drag(*dx, *dy);
            let pitch = c.state().pitch;
            assert!((-90.0..=90.0).contains(&pitch), "pitch {pitch} out of range");
        }
    }

    #[test]
    fn orbit_is_not_wrapped() {
        let mut c = held(MouseButton::Left);
        for _ in 0..10 {
            c.drag(100, 0);
        }
        assert_eq!(c.state().orbit, 500.0);
    }

    #[test]
    fn zoom_drag_clamps_distance_at_zero() {
        let mut c = held(MouseButton::Right);
        assert!(c.drag(0, -100));
        assert_eq!(c.state().distance, 0.0);
    }

    #[test]
    fn distance_never_negative() {
        let mut c = controller();
        c.on_mouse_button(MouseButton::Right, true);
        c.on_mouse_button(MouseButton::Left, true);
        for (i, dy) in [-30, 12, -200, 5, -1, 80, -81, -3].iter().enumerate() {
            c.drag(i as i32 - 4, *dy);
            assert!(c.state().distance >= 0.0);
        }
    }

    #[test]
    fn zoom_grows_with_downward_drag() {
        let mut c = held(MouseButton::Right);
        c.drag(50, 20);
        assert!((c.state().distance - 10.0).abs() < 1e-5);
        assert_eq!(c.state().orbit, 0.0);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut c = controller();
        c.on_mouse_button(MouseButton::Left, true);
        c.on_mouse_button(MouseButton::Middle, true);
        c.on_mouse_button(MouseButton::Right, true);
        let before = c.state().clone();
        assert!(!c.drag(0, 0));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn repeated_cursor_position_does_not_redraw() {
        let mut c = held(MouseButton::Left);
        assert!(c.on_mouse_move((10, 10)));
        let before = c.state().clone();
        assert!(!c.on_mouse_move((10, 10)));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn motion_without_buttons_only_tracks_cursor() {
        let mut c = controller();
        assert!(!c.on_mouse_move((40, 25)));
        assert_eq!(c.state(), &CameraState::default());

        c.on_mouse_button(MouseButton::Left, true);
        assert!(c.on_mouse_move((42, 25)));
        assert_eq!(c.state().orbit, 1.0);
    }

    #[test]
    fn release_stops_dragging() {
        let mut c = held(MouseButton::Middle);
        assert!(c.is_dragging());
        c.on_mouse_button(MouseButton::Middle, false);
        assert!(!c.is_dragging());
        assert!(!c.drag(5, 5));
    }

    #[test]
    fn pan_follows_screen_axes_when_level() {
        let mut c = controller();
        c.state = CameraState::new(0.0, 0.0, 8.0, [0.0, 0.0, 0.0]);
        c.on_mouse_button(MouseButton::Middle, true);

        c.drag(100, 0);
        assert!((c.state().pan[0] - 1.0).abs() < 1e-5);
        assert!(c.state().pan[1].abs() < 1e-5);
        assert!(c.state().pan[2].abs() < 1e-5);

        c.drag(0, 100);
        assert!((c.state().pan[1] + 1.0).abs() < 1e-5);
    }

    #[test]
    fn pan_uses_orbit_for_right_axis() {
        let mut c = controller();
        c.state = CameraState::new(90.0, 0.0, 8.0, [0.0, 0.0, 0.0]);
        c.on_mouse_button(MouseButton::Middle, true);
        c.drag(100, 0);
        assert!(c.state().pan[0].abs() < 1e-5);
        assert!((c.state().pan[2] - 1.0).abs() < 1e-5);
    }

    fn pan_by(orbit: f32, pitch: f32, dx: i32, dy: i32) -> [f32; 3] {
        let mut c = controller();
        c.state = CameraState::new(orbit, pitch, 8.0, [0.0, 0.0, 0.0]);
        c.on_mouse_button(MouseButton::Middle, true);
        c.drag(dx, dy);
        c.state().pan
    }

    fn assert_pan(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-5, "pan {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    fn vertical_pan_uses_full_up_vector_when_pitched() {
        // orbit 90, pitch 30: up = (-sin90 sin30, -cos30, cos90 sin30)
        assert_pan(pan_by(90.0, 30.0, 0, 100), [-0.5, -0.866_025_4, 0.0]);
        // orbit 0, pitch 30: up = (0, -cos30, sin30)
        assert_pan(pan_by(0.0, 30.0, 0, 100), [0.0, -0.866_025_4, 0.5]);
    }

    #[test]
    fn horizontal_pan_ignores_pitch() {
        assert_pan(pan_by(90.0, 30.0, 100, 0), [0.0, 0.0, 1.0]);
        assert_pan(pan_by(0.0, -45.0, -100, 0), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn overlapping_buttons_apply_every_operation() {
        let mut c = controller();
        c.on_mouse_button(MouseButton::Left, true);
        c.on_mouse_button(MouseButton::Right, true);
        assert!(c.drag(4, 10));
        assert_eq!(c.state().orbit, 2.0);
        assert_eq!(c.state().pitch, 30.0);
        assert!((c.state().distance - 9.0).abs() < 1e-5);
    }

    #[test]
    fn custom_sensitivity_is_used() {
        let sensitivity = ControlSettings {
            orbit: 1.0,
            pan: 0.01,
            zoom: 0.5,
        };
        let mut c = CameraController::new(CameraState::default(), sensitivity);
        c.on_mouse_button(MouseButton::Left, true);
        c.drag(10, 0);
        assert_eq!(c.state().orbit, 10.0);
    }
}
