//! Third-Person Orbit Camera
//!
//! Unity-style orbit: mouse movement turns a target yaw/pitch, the actual
//! rotation eases toward it with a critically damped smoother, and the camera
//! sits `distance` meters behind the target along the view direction. The
//! position then trails the ideal spot by `camera_lag` per tick.
//!
//! Pitch here is the camera's elevation: positive places the camera above the
//! target looking down. Yaw follows the character convention (0 = +Z).

use glam::{Vec2, Vec3};

use crate::config::OrbitConfig;
use crate::player::turn::{smooth_damp_vec3, wrap_degrees};

#[derive(Clone, Debug)]
pub struct ThirdPersonOrbit {
    config: OrbitConfig,
    /// Yaw the mouse asked for (degrees, unrestricted)
    target_yaw: f32,
    /// Pitch the mouse asked for (degrees, clamped)
    target_pitch: f32,
    /// Smoothed rotation: x = pitch, y = yaw
    rotation: Vec3,
    rotation_velocity: Vec3,
    /// Camera world position (None until the first update)
    position: Option<Vec3>,
}

impl Default for ThirdPersonOrbit {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl ThirdPersonOrbit {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            target_yaw: 0.0,
            target_pitch: 0.0,
            rotation: Vec3::ZERO,
            rotation_velocity: Vec3::ZERO,
            position: None,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Smoothed yaw in degrees (unrestricted).
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    /// Smoothed pitch in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    /// Smoothed yaw wrapped into `[0, 360)`, for the movement controller.
    pub fn heading(&self) -> f32 {
        wrap_degrees(self.rotation.y)
    }

    /// Jump straight to `yaw` with no smoothing (mode switches, respawn).
    pub fn snap_yaw(&mut self, yaw: f32) {
        if yaw.is_finite() {
            self.target_yaw = yaw;
            self.rotation.y = yaw;
            self.rotation_velocity.y = 0.0;
        }
    }

    /// Apply one tick of mouse movement without moving the camera.
    ///
    /// Positive `delta.x` orbits right; positive `delta.y` (mouse up) lowers
    /// the camera so it looks up.
    pub fn apply_look(&mut self, delta: Vec2, dt: f32) {
        if !delta.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let sensitivity = self.config.mouse_sensitivity;
        self.target_yaw += delta.x * sensitivity * dt;
        self.target_pitch = (self.target_pitch - delta.y * sensitivity * dt)
            .clamp(self.config.min_pitch, self.config.max_pitch);
    }

    /// Full tick: look input, rotation smoothing, then follow `target`.
    ///
    /// Returns the new camera position.
    pub fn update(&mut self, delta: Vec2, target: Vec3, dt: f32) -> Vec3 {
        self.apply_look(delta, dt);

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.rotation = smooth_damp_vec3(
            self.rotation,
            Vec3::new(self.target_pitch, self.target_yaw, 0.0),
            &mut self.rotation_velocity,
            self.config.rotation_smooth_time,
            dt,
        );

        let desired = self.desired_position(target);
        let position = match self.position {
            Some(current) if desired.is_finite() => current.lerp(desired, self.config.camera_lag),
            Some(current) => current,
            None => desired,
        };
        self.position = Some(position);
        position
    }

    /// Where the camera would sit with no lag.
    pub fn desired_position(&self, target: Vec3) -> Vec3 {
        target - self.forward() * self.config.distance
    }

    /// Last camera position, or `None` before the first update.
    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    /// View direction from the smoothed rotation.
    pub fn forward(&self) -> Vec3 {
        let (pitch, yaw) = (self.rotation.x.to_radians(), self.rotation.y.to_radians());
        Vec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }
}
