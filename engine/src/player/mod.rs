//! Player Module
//!
//! Character movement and the pieces it is built from.
//!
//! # Components
//!
//! - [`ThirdPersonController`] - Per-tick controller, camera-relative movement
//!   - Built with [`ControllerBuilder`] from injected collaborators
//!   - Reports [`ControllerEvent`]s (landing, jump, crouch, death)
//! - [`GravityIntegrator`] - Grounded/airborne phases and asymmetric gravity
//! - [`FallDamageEvaluator`] - Height-based landing damage
//! - [`CrouchToggle`] - Edge-triggered stance switch with collider presets
//! - [`GroundSensor`], [`HealthSink`], [`AnimationSink`] - Collaborator traits

pub mod animation;
pub mod crouch;
pub mod fall_damage;
pub mod gravity;
pub mod ground;
pub mod health;
pub mod movement_controller;
pub mod state;
pub mod turn;

pub use animation::{AnimParam, AnimTrigger, AnimationFlags, AnimationSink, NullAnimator};
pub use crouch::{CrouchToggle, Stance};
pub use fall_damage::{FallDamageEvaluator, Landing};
pub use gravity::{GravityIntegrator, GroundPhase, GroundTransition};
pub use ground::{GroundSensor, LayerMask, NoGround};
pub use health::{HealthSink, HealthStatus, PlayerHealth};
pub use movement_controller::{ControllerBuilder, ControllerEvent, StepOutcome, ThirdPersonController};
pub use state::CharacterState;
