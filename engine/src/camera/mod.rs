//! Camera Module
//!
//! Camera look and follow for the character rig. This module is window-system
//! agnostic: it only deals with camera state and math, and reports a heading
//! (degrees, 0 = +Z) for the movement controller.

pub mod fps_controller;
pub mod orbit;
pub mod rig;

pub use fps_controller::FirstPersonLook;
pub use orbit::ThirdPersonOrbit;
pub use rig::{CameraMode, CameraRig};
