//! Fall Damage
//!
//! Height-based policy: damage scales linearly with the distance fallen
//! between a minimum and maximum height.
//!
//! ```text
//! fall <= min_height               -> 0
//! min_height < fall < max_height   -> round(max_damage * (fall - min) / (max - min))
//! fall >= max_height               -> max_damage
//! ```
//!
//! Evaluated once, on the Airborne -> Grounded edge.

use crate::config::FallDamageConfig;

/// Result of evaluating one landing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Height lost between the apex and the landing point (negative when
    /// landing higher than the apex, e.g. jumping onto a ledge)
    pub fall_distance: f32,
    pub damage: u32,
}

#[derive(Debug, Clone)]
pub struct FallDamageEvaluator {
    config: FallDamageConfig,
}

impl FallDamageEvaluator {
    pub fn new(config: FallDamageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FallDamageConfig {
        &self.config
    }

    /// Evaluate a landing at `landing_height` after falling from `fall_start_height`.
    pub fn evaluate(&self, fall_start_height: f32, landing_height: f32) -> Landing {
        let fall_distance = fall_start_height - landing_height;
        Landing {
            fall_distance,
            damage: self.damage_for(fall_distance),
        }
    }

    /// Damage for a fall of `fall_distance` meters.
    pub fn damage_for(&self, fall_distance: f32) -> u32 {
        if !fall_distance.is_finite() || fall_distance <= self.config.min_height {
            return 0;
        }
        let t = inverse_lerp(self.config.min_height, self.config.max_height, fall_distance);
        let damage = lerp(0.0, self.config.max_damage as f32, t).round();
        (damage as u32).min(self.config.max_damage)
    }
}

impl Default for FallDamageEvaluator {
    fn default() -> Self {
        Self::new(FallDamageConfig::default())
    }
}

/// Linear interpolation between two values.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Where `value` sits between `a` and `b`, clamped to `[0, 1]`.
fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() <= f32::EPSILON {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}
