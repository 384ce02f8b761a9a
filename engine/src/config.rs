//! Rig Configuration
//!
//! Centralized tuning for the character rig: movement, gravity, ground probe,
//! fall damage, crouch presets, cameras and health.
//!
//! `Default` returns the values the character was tuned with. Every section is
//! `#[serde(default)]`, so a JSON file only needs the fields it overrides:
//!
//! ```json
//! { "movement": { "speed": 8.0 }, "fall_damage": { "max_damage": 80 } }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RigError};
use crate::player::ground::LayerMask;

/// Horizontal movement and turning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Standing move speed in m/s
    pub speed: f32,
    /// Upward velocity applied on jump in m/s
    pub jump_force: f32,
    /// Time constant of the yaw smoother in seconds
    pub turn_smooth_time: f32,
    /// Input magnitude below which the character does not move or turn
    pub input_deadzone: f32,
    /// Upper bound applied to the frame delta
    pub max_dt: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 6.0,
            jump_force: 7.0,
            turn_smooth_time: 0.1,
            input_deadzone: 0.1,
            max_dt: 0.1,
        }
    }
}

/// Vertical integration tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Gravity acceleration in m/s^2 (negative = down)
    pub gravity: f32,
    /// Gravity scale while descending
    pub fall_multiplier: f32,
    /// Gravity scale while ascending with the jump button released
    pub low_jump_multiplier: f32,
    /// Downward velocity held while grounded
    pub grounding_bias: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            grounding_bias: -2.0,
        }
    }
}

/// Ground probe placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Probe center relative to the character position (the feet)
    pub check_offset: Vec3,
    /// Probe sphere radius in meters
    pub distance: f32,
    /// Layers that count as walkable
    pub mask: LayerMask,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            check_offset: Vec3::new(0.0, 0.3, 0.0),
            distance: 0.4,
            mask: LayerMask::GROUND,
        }
    }
}

/// Height-based fall damage envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallDamageConfig {
    /// Falls at or below this distance deal no damage (meters)
    pub min_height: f32,
    /// Falls at or above this distance deal `max_damage` (meters)
    pub max_height: f32,
    /// Damage dealt by a fall of `max_height` or more
    pub max_damage: u32,
}

impl Default for FallDamageConfig {
    fn default() -> Self {
        Self {
            min_height: 3.0,
            max_height: 10.0,
            max_damage: 50,
        }
    }
}

/// Collider dimensions for one stance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColliderPreset {
    /// Capsule height in meters
    pub height: f32,
    /// Capsule center relative to the character position
    pub center: Vec3,
}

/// Crouch presets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrouchConfig {
    pub standing: ColliderPreset,
    pub crouched: ColliderPreset,
    /// Fraction of the standing speed used while crouched
    pub speed_multiplier: f32,
}

impl Default for CrouchConfig {
    fn default() -> Self {
        Self {
            standing: ColliderPreset {
                height: 2.0,
                center: Vec3::new(0.0, 1.0, 0.0),
            },
            crouched: ColliderPreset {
                height: 1.0,
                center: Vec3::new(0.0, 0.5, 0.0),
            },
            speed_multiplier: 0.5,
        }
    }
}

/// First-person mouse look.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstPersonConfig {
    /// Degrees per mouse unit per second, horizontal
    pub sensitivity_x: f32,
    /// Degrees per mouse unit per second, vertical
    pub sensitivity_y: f32,
    /// Pitch limit in degrees (applied symmetrically)
    pub pitch_limit: f32,
}

impl Default for FirstPersonConfig {
    fn default() -> Self {
        Self {
            sensitivity_x: 400.0,
            sensitivity_y: 400.0,
            pitch_limit: 90.0,
        }
    }
}

/// Third-person orbit camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub mouse_sensitivity: f32,
    /// Distance from the target in meters
    pub distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub rotation_smooth_time: f32,
    /// Fraction of the gap to the target closed per tick (0..=1)
    pub camera_lag: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 100.0,
            distance: 25.0,
            min_pitch: -35.0,
            max_pitch: 60.0,
            rotation_smooth_time: 0.12,
            camera_lag: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub first_person: FirstPersonConfig,
    pub third_person: OrbitConfig,
    pub start_in_first_person: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            first_person: FirstPersonConfig::default(),
            third_person: OrbitConfig::default(),
            start_in_first_person: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub max_health: u32,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { max_health: 100 }
    }
}

/// Complete rig configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub movement: MovementConfig,
    pub gravity: GravityConfig,
    pub ground: GroundConfig,
    pub fall_damage: FallDamageConfig,
    pub crouch: CrouchConfig,
    pub camera: CameraConfig,
    pub health: HealthConfig,
}

impl RigConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RigConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded rig config");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is finite and inside its meaningful range.
    pub fn validate(&self) -> Result<(), RigError> {
        let m = &self.movement;
        check_finite("movement.speed", m.speed)?;
        check_finite("movement.jump_force", m.jump_force)?;
        check_finite("movement.turn_smooth_time", m.turn_smooth_time)?;
        check_finite("movement.input_deadzone", m.input_deadzone)?;
        check_finite("movement.max_dt", m.max_dt)?;
        ensure(m.speed >= 0.0, "movement.speed must be >= 0")?;
        ensure(m.jump_force >= 0.0, "movement.jump_force must be >= 0")?;
        ensure(m.turn_smooth_time >= 0.0, "movement.turn_smooth_time must be >= 0")?;
        ensure(
            (0.0..1.0).contains(&m.input_deadzone),
            "movement.input_deadzone must be in [0, 1)",
        )?;
        ensure(m.max_dt > 0.0, "movement.max_dt must be > 0")?;

        let g = &self.gravity;
        check_finite("gravity.gravity", g.gravity)?;
        check_finite("gravity.fall_multiplier", g.fall_multiplier)?;
        check_finite("gravity.low_jump_multiplier", g.low_jump_multiplier)?;
        check_finite("gravity.grounding_bias", g.grounding_bias)?;
        ensure(g.gravity < 0.0, "gravity.gravity must point down (< 0)")?;
        ensure(
            g.fall_multiplier >= 0.0 && g.low_jump_multiplier >= 0.0,
            "gravity multipliers must be >= 0",
        )?;
        ensure(g.grounding_bias <= 0.0, "gravity.grounding_bias must be <= 0")?;

        let ground = &self.ground;
        ensure(
            ground.check_offset.is_finite(),
            "ground.check_offset must be finite",
        )?;
        check_finite("ground.distance", ground.distance)?;
        ensure(ground.distance > 0.0, "ground.distance must be > 0")?;

        let f = &self.fall_damage;
        check_finite("fall_damage.min_height", f.min_height)?;
        check_finite("fall_damage.max_height", f.max_height)?;
        ensure(f.min_height >= 0.0, "fall_damage.min_height must be >= 0")?;
        ensure(
            f.max_height > f.min_height,
            "fall_damage.max_height must be greater than min_height",
        )?;

        let c = &self.crouch;
        for (name, preset) in [("crouch.standing", c.standing), ("crouch.crouched", c.crouched)] {
            ensure(
                preset.height.is_finite() && preset.height > 0.0 && preset.center.is_finite(),
                &format!("{name} must have a finite positive height and finite center"),
            )?;
        }
        check_finite("crouch.speed_multiplier", c.speed_multiplier)?;
        ensure(
            (0.0..=1.0).contains(&c.speed_multiplier),
            "crouch.speed_multiplier must be in [0, 1]",
        )?;

        let fp = &self.camera.first_person;
        check_finite("camera.first_person.sensitivity_x", fp.sensitivity_x)?;
        check_finite("camera.first_person.sensitivity_y", fp.sensitivity_y)?;
        check_finite("camera.first_person.pitch_limit", fp.pitch_limit)?;
        ensure(
            (0.0..=90.0).contains(&fp.pitch_limit),
            "camera.first_person.pitch_limit must be in [0, 90]",
        )?;

        let tp = &self.camera.third_person;
        check_finite("camera.third_person.mouse_sensitivity", tp.mouse_sensitivity)?;
        check_finite("camera.third_person.distance", tp.distance)?;
        check_finite("camera.third_person.min_pitch", tp.min_pitch)?;
        check_finite("camera.third_person.max_pitch", tp.max_pitch)?;
        check_finite(
            "camera.third_person.rotation_smooth_time",
            tp.rotation_smooth_time,
        )?;
        check_finite("camera.third_person.camera_lag", tp.camera_lag)?;
        ensure(
            tp.min_pitch < tp.max_pitch,
            "camera.third_person.min_pitch must be below max_pitch",
        )?;
        ensure(
            (0.0..=1.0).contains(&tp.camera_lag),
            "camera.third_person.camera_lag must be in [0, 1]",
        )?;

        ensure(self.health.max_health > 0, "health.max_health must be > 0")?;
        Ok(())
    }
}

fn check_finite(name: &str, value: f32) -> Result<(), RigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RigError::InvalidConfig(format!("{name} must be finite")))
    }
}

fn ensure(condition: bool, reason: &str) -> Result<(), RigError> {
    if condition {
        Ok(())
    } else {
        Err(RigError::InvalidConfig(reason.to_string()))
    }
}
