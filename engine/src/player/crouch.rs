//! Player Crouch Toggle
//!
//! Two stances, switched instantly on the key-down edge of the crouch action.
//! Edges come from the input layer, so a release and press between two
//! ticks still counts.
//!
//! # Stances
//!
//! - Standing: standing collider preset, full speed
//! - Crouching: crouched collider preset, `speed_multiplier` of full speed
//!
//! # Usage
//!
//! ```rust,ignore
//! use character_rig::player::CrouchToggle;
//!
//! let mut crouch = CrouchToggle::new(config.crouch.clone());
//!
//! // Each frame:
//! if let Some(preset) = crouch.update(input.crouch_pressed) {
//!     mover.set_collider(preset);
//! }
//! let speed = base_speed * crouch.speed_multiplier();
//! ```

use crate::config::{ColliderPreset, CrouchConfig};

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

impl Stance {
    pub fn toggled(self) -> Self {
        match self {
            Stance::Standing => Stance::Crouching,
            Stance::Crouching => Stance::Standing,
        }
    }
}

/// Edge-triggered crouch toggle.
#[derive(Debug, Clone)]
pub struct CrouchToggle {
    config: CrouchConfig,

    /// Current stance state
    stance: Stance,
}

impl CrouchToggle {
    pub fn new(config: CrouchConfig) -> Self {
        Self {
            config,
            stance: Stance::Standing,
        }
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_crouching(&self) -> bool {
        self.stance == Stance::Crouching
    }

    /// Collider preset for the current stance.
    pub fn collider(&self) -> ColliderPreset {
        match self.stance {
            Stance::Standing => self.config.standing,
            Stance::Crouching => self.config.crouched,
        }
    }

    /// Speed multiplier for the current stance.
    pub fn speed_multiplier(&self) -> f32 {
        match self.stance {
            Stance::Standing => 1.0,
            Stance::Crouching => self.config.speed_multiplier,
        }
    }

    /// Feed this tick's crouch key-down edge.
    ///
    /// Returns the new collider preset when the stance flipped.
    pub fn update(&mut self, crouch_pressed: bool) -> Option<ColliderPreset> {
        if !crouch_pressed {
            return None;
        }
        self.stance = self.stance.toggled();
        tracing::debug!(stance = ?self.stance, "crouch toggled");
        Some(self.collider())
    }
}

impl Default for CrouchToggle {
    fn default() -> Self {
        Self::new(CrouchConfig::default())
    }
}
