//! Camera Rig
//!
//! Owns both cameras and switches between them on the camera-toggle key.
//! Only the active camera receives mouse motion; on a switch the newly active
//! camera takes over the current heading so movement direction does not jump.

use glam::{Vec2, Vec3};

use crate::config::CameraConfig;
use crate::input::FrameInput;

use super::fps_controller::FirstPersonLook;
use super::orbit::ThirdPersonOrbit;

/// Which camera drives the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    FirstPerson,
    ThirdPerson,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FirstPerson => CameraMode::ThirdPerson,
            CameraMode::ThirdPerson => CameraMode::FirstPerson,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    mode: CameraMode,
    first_person: FirstPersonLook,
    third_person: ThirdPersonOrbit,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let mode = if config.start_in_first_person {
            CameraMode::FirstPerson
        } else {
            CameraMode::ThirdPerson
        };
        Self {
            mode,
            first_person: FirstPersonLook::new(config.first_person),
            third_person: ThirdPersonOrbit::new(config.third_person),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn first_person(&self) -> &FirstPersonLook {
        &self.first_person
    }

    pub fn third_person(&self) -> &ThirdPersonOrbit {
        &self.third_person
    }

    /// Switch to the other camera, carrying the heading across.
    pub fn toggle(&mut self) {
        let heading = self.heading();
        self.mode = self.mode.toggled();
        match self.mode {
            CameraMode::FirstPerson => self.first_person.set_yaw(heading),
            CameraMode::ThirdPerson => self.third_person.snap_yaw(heading),
        }
        tracing::debug!(mode = ?self.mode, heading, "camera switched");
    }

    /// Feed one tick of input. `target` is the followed character's position.
    ///
    /// Returns the heading to hand to the movement controller.
    pub fn update(&mut self, input: &FrameInput, target: Vec3, dt: f32) -> f32 {
        if input.camera_toggle_pressed {
            self.toggle();
        }
        match self.mode {
            CameraMode::FirstPerson => self.first_person.apply_look(input.look_delta, dt),
            CameraMode::ThirdPerson => {
                self.third_person.update(input.look_delta, target, dt);
            }
        }
        self.heading()
    }

    /// Active camera's yaw in degrees, `[0, 360)`.
    pub fn heading(&self) -> f32 {
        match self.mode {
            CameraMode::FirstPerson => self.first_person.heading(),
            CameraMode::ThirdPerson => self.third_person.heading(),
        }
    }

    /// Mouse motion for the active camera only, with no follow update.
    pub fn look(&mut self, delta: Vec2, dt: f32) {
        match self.mode {
            CameraMode::FirstPerson => self.first_person.apply_look(delta, dt),
            CameraMode::ThirdPerson => self.third_person.apply_look(delta, dt),
        }
    }
}
