//! First-Person Look Module
//!
//! Mouse movement rotates the view directly: horizontal motion turns the yaw,
//! vertical motion tilts the pitch, which is clamped so the view never flips
//! over the top.
//!
//! Angles are in degrees. Yaw 0 looks toward +Z, yaw 90 toward +X, matching
//! the character's facing convention so `heading()` can be handed straight
//! to the movement controller.

use glam::{Vec2, Vec3};

use crate::config::FirstPersonConfig;
use crate::player::turn::wrap_degrees;

/// First-person mouse look.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = FirstPersonLook::new(config.camera.first_person.clone());
///
/// // Each tick, with the mouse delta accumulated since the last tick
/// look.apply_look(frame.look_delta, dt);
/// let heading = look.heading();
/// ```
#[derive(Clone, Debug)]
pub struct FirstPersonLook {
    /// Horizontal angle (degrees), unrestricted
    yaw: f32,
    /// Vertical angle (degrees), positive = up, clamped to the pitch limit
    pitch: f32,
    config: FirstPersonConfig,
}

impl Default for FirstPersonLook {
    fn default() -> Self {
        Self::new(FirstPersonConfig::default())
    }
}

impl FirstPersonLook {
    pub fn new(config: FirstPersonConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            config,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the yaw directly (degrees).
    pub fn set_yaw(&mut self, yaw: f32) {
        if yaw.is_finite() {
            self.yaw = yaw;
        }
    }

    /// Set the pitch directly (degrees, clamped to the limit).
    pub fn set_pitch(&mut self, pitch: f32) {
        if pitch.is_finite() {
            let limit = self.config.pitch_limit;
            self.pitch = pitch.clamp(-limit, limit);
        }
    }

    /// Apply one tick of mouse movement.
    ///
    /// Positive `delta.x` turns right; positive `delta.y` (mouse up) looks up.
    pub fn apply_look(&mut self, delta: Vec2, dt: f32) {
        if !delta.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.yaw += delta.x * self.config.sensitivity_x * dt;
        self.set_pitch(self.pitch + delta.y * self.config.sensitivity_y * dt);
    }

    /// Yaw wrapped into `[0, 360)`, for the movement controller.
    pub fn heading(&self) -> f32 {
        wrap_degrees(self.yaw)
    }

    /// View direction, normalized.
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    /// Body orientation: view direction flattened onto the ground plane.
    pub fn orientation(&self) -> Vec3 {
        crate::player::state::forward_from_yaw(self.yaw)
    }
}
