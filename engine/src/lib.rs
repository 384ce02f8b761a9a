//! Character Rig Library
//!
//! A headless third-person character controller: camera-relative movement,
//! asymmetric gravity with variable jump height, height-based fall damage,
//! crouch toggle and a death gate, plus the cameras and input plumbing that
//! feed it. Rendering, physics engines and animation graphs stay outside;
//! they plug in through small traits.
//!
//! # Modules
//!
//! - [`player`] - The movement controller and its building blocks
//! - [`physics`] - Static AABB world, ground probe and kinematic mover
//! - [`camera`] - First-person look, third-person orbit and the switching rig
//! - [`input`] - Platform-agnostic key bindings and per-tick input sampling
//! - [`config`] - Serde-backed tuning with validation
//! - [`error`] - Construction and config-loading errors
//!
//! # Example
//!
//! ```ignore
//! use character_rig::{CameraRig, ControllerBuilder, InputState, KeyCode, RigConfig};
//! use character_rig::physics::{KinematicMover, StaticWorld};
//! use character_rig::player::PlayerHealth;
//! use glam::Vec3;
//!
//! let config = RigConfig::default();
//! let mut world = StaticWorld::new();
//! world.add_platform((-20.0, -20.0), (20.0, 20.0), 0.0, 1.0);
//!
//! let mover = KinematicMover::new(world.clone(), Vec3::ZERO, config.crouch.standing);
//! let mut camera = CameraRig::new(config.camera.clone());
//! let mut controller = ControllerBuilder::new(config)
//!     .ground(world)
//!     .mover(mover)
//!     .health(PlayerHealth::new(100))
//!     .build()?;
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//!
//! // Once per tick
//! let frame = input.frame();
//! let heading = camera.update(&frame, controller.position(), dt);
//! let outcome = controller.step(&frame, heading, dt);
//! for event in &outcome.events {
//!     // React to landings, jumps, death...
//! }
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;

// Re-export the types most hosts need at crate level
pub use camera::{CameraMode, CameraRig};
pub use config::RigConfig;
pub use error::{ConfigError, RigError};
pub use input::{FrameInput, InputAction, InputState, KeyBindings, KeyCode};
pub use player::{
    ControllerBuilder, ControllerEvent, StepOutcome, ThirdPersonController,
};
