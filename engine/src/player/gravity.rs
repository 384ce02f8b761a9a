//! Gravity & Grounding
//!
//! Two-state machine (`Grounded` / `Airborne`) plus vertical velocity
//! integration.
//!
//! # Transitions
//!
//! - Airborne -> Grounded: the ground probe hits and the character is not
//!   moving up. Rising through a ledge edge right after a jump is not a landing.
//! - Grounded -> Airborne: the probe misses, or a jump is started.
//!
//! # Integration
//!
//! While grounded and not rising, the velocity is pinned to a small downward
//! bias so the mover keeps the capsule pressed onto slopes. While airborne:
//!
//! ```text
//! v += gravity * multiplier * dt
//! multiplier = fall_multiplier      if v < 0
//!            = low_jump_multiplier  if v >= 0 and jump released
//!            = 1                    otherwise
//! ```
//!
//! which falls faster than it rises and cuts a jump short when the button is
//! let go early.

use crate::config::GravityConfig;

use super::state::CharacterState;

/// Grounding phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundPhase {
    Grounded,
    Airborne,
}

/// Edge detected by [`GravityIntegrator::update_grounding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    None,
    /// Airborne -> Grounded this tick
    Landed,
    /// Grounded -> Airborne this tick (walked off an edge)
    LeftGround,
}

#[derive(Debug, Clone)]
pub struct GravityIntegrator {
    config: GravityConfig,
}

impl GravityIntegrator {
    pub fn new(config: GravityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    /// Current phase of `state`.
    pub fn phase(state: &CharacterState) -> GroundPhase {
        if state.is_grounded {
            GroundPhase::Grounded
        } else {
            GroundPhase::Airborne
        }
    }

    /// Apply this tick's probe result and report the edge, if any.
    ///
    /// The vertical velocity is left untouched so a landing can still be
    /// evaluated against it; [`integrate`](Self::integrate) applies the reset.
    pub fn update_grounding(&self, state: &mut CharacterState, probe_hit: bool) -> GroundTransition {
        match Self::phase(state) {
            GroundPhase::Grounded if !probe_hit => {
                state.is_grounded = false;
                state.fall_start_height = state.position.y;
                GroundTransition::LeftGround
            }
            GroundPhase::Airborne if probe_hit && state.vertical_velocity <= 0.0 => {
                state.is_grounded = true;
                state.is_falling = false;
                GroundTransition::Landed
            }
            _ => GroundTransition::None,
        }
    }

    /// Start a jump if grounded. Returns whether the jump happened.
    ///
    /// The character is airborne immediately, with `vertical_velocity` set to
    /// `jump_force`.
    pub fn try_jump(&self, state: &mut CharacterState, jump_force: f32) -> bool {
        if !state.is_grounded {
            return false;
        }
        state.vertical_velocity = jump_force;
        state.is_grounded = false;
        state.is_falling = false;
        state.fall_start_height = state.position.y;
        true
    }

    /// Advance vertical velocity by `dt` seconds.
    pub fn integrate(&self, state: &mut CharacterState, jump_held: bool, dt: f32) {
        if state.is_grounded {
            if state.vertical_velocity <= 0.0 {
                state.vertical_velocity = self.config.grounding_bias;
            }
        } else {
            let multiplier = self.multiplier(state.vertical_velocity, jump_held);
            state.vertical_velocity += self.config.gravity * multiplier * dt;
        }
        state.is_falling = !state.is_grounded && state.vertical_velocity < 0.0;
    }

    /// Raise the recorded fall start while the character is still climbing.
    pub fn track_apex(&self, state: &mut CharacterState) {
        if !state.is_grounded && state.position.y > state.fall_start_height {
            state.fall_start_height = state.position.y;
        }
    }

    fn multiplier(&self, vertical_velocity: f32, jump_held: bool) -> f32 {
        if vertical_velocity < 0.0 {
            self.config.fall_multiplier
        } else if !jump_held {
            self.config.low_jump_multiplier
        } else {
            1.0
        }
    }
}

impl Default for GravityIntegrator {
    fn default() -> Self {
        Self::new(GravityConfig::default())
    }
}
