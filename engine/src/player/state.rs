//! Per-character simulation state.

use glam::Vec3;

/// Everything the controller mutates from one tick to the next.
///
/// Owned by [`ThirdPersonController`](super::ThirdPersonController) and
/// written only from its `step()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    /// World position as last reported by the mover
    pub position: Vec3,
    /// Smoothed yaw in degrees, `[0, 360)`; 0 faces +Z, 90 faces +X
    pub facing_angle: f32,
    /// Angular velocity carried by the yaw smoother (deg/s)
    pub turn_velocity: f32,
    /// Vertical velocity in m/s (positive = up)
    pub vertical_velocity: f32,
    pub is_grounded: bool,
    pub is_crouching: bool,
    /// Airborne and moving down
    pub is_falling: bool,
    /// Highest point of the current airborne phase
    pub fall_start_height: f32,
    /// Terminal: set once health reaches zero
    pub is_dead: bool,
    /// Last finite camera heading, reused when the camera reports NaN/Inf
    pub last_camera_heading: f32,
}

impl CharacterState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            facing_angle: 0.0,
            turn_velocity: 0.0,
            vertical_velocity: 0.0,
            is_grounded: false,
            is_crouching: false,
            is_falling: false,
            fall_start_height: position.y,
            is_dead: false,
            last_camera_heading: 0.0,
        }
    }

    /// Forward direction on the XZ plane for the current facing angle.
    pub fn forward(&self) -> Vec3 {
        forward_from_yaw(self.facing_angle)
    }

    /// Whether every float in the state is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.facing_angle.is_finite()
            && self.turn_velocity.is_finite()
            && self.vertical_velocity.is_finite()
            && self.fall_start_height.is_finite()
            && self.last_camera_heading.is_finite()
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Unit vector on the XZ plane for a yaw in degrees (0 = +Z, 90 = +X).
pub fn forward_from_yaw(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}
