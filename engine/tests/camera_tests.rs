//! Camera Tests - Look, Orbit and Mode Switching
//!
//! Tests for the camera module driven the way a host drives it: key and mouse
//! events into `InputState`, one `FrameInput` per tick into `CameraRig`, and
//! the resulting heading into the movement controller.

use character_rig::camera::{FirstPersonLook, ThirdPersonOrbit};
use character_rig::config::{CameraConfig, OrbitConfig, RigConfig};
use character_rig::physics::{KinematicMover, StaticWorld};
use character_rig::player::PlayerHealth;
use character_rig::{CameraMode, CameraRig, ControllerBuilder, InputState, KeyCode};
use glam::{Vec2, Vec3};

const DT: f32 = 0.02;

fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

// ============================================================================
// FirstPersonLook Tests
// ============================================================================

#[test]
fn test_first_person_default() {
    let look = FirstPersonLook::default();
    assert_eq!(look.yaw(), 0.0);
    assert_eq!(look.pitch(), 0.0);
    assert!((look.forward() - Vec3::Z).length() < 1e-5);
}

#[test]
fn test_first_person_forward_normalized() {
    let mut look = FirstPersonLook::default();
    look.set_yaw(37.0);
    look.set_pitch(-20.0);
    assert!(approx_eq(look.forward().length(), 1.0, 1e-5));
    assert!(look.forward().y < 0.0);
}

#[test]
fn test_first_person_orientation_is_flat() {
    let mut look = FirstPersonLook::default();
    look.set_yaw(180.0);
    look.set_pitch(45.0);
    let orientation = look.orientation();
    assert_eq!(orientation.y, 0.0);
    assert!(approx_eq(orientation.z, -1.0, 1e-5));
}

// ============================================================================
// ThirdPersonOrbit Tests
// ============================================================================

#[test]
fn test_orbit_distance_from_target() {
    let mut orbit = ThirdPersonOrbit::new(OrbitConfig {
        distance: 5.0,
        ..OrbitConfig::default()
    });
    let target = Vec3::new(3.0, 1.0, -2.0);
    orbit.apply_look(Vec2::new(0.4, -0.2), 1.0);
    let mut position = Vec3::ZERO;
    for _ in 0..500 {
        position = orbit.update(Vec2::ZERO, target, DT);
    }
    assert!(approx_eq(position.distance(target), 5.0, 0.01));
}

#[test]
fn test_orbit_follows_moving_target() {
    let mut orbit = ThirdPersonOrbit::default();
    let mut target = Vec3::ZERO;
    orbit.update(Vec2::ZERO, target, DT);

    for _ in 0..200 {
        target.x += 0.1;
        orbit.update(Vec2::ZERO, target, DT);
    }
    let position = orbit.position().unwrap();
    // Lags behind but keeps up on average
    assert!(position.x < target.x);
    assert!(position.x > target.x - 2.0);
}

// ============================================================================
// CameraRig Tests
// ============================================================================

#[test]
fn test_rig_with_input_state() {
    let mut input = InputState::new();
    let mut rig = CameraRig::default();
    assert_eq!(rig.mode(), CameraMode::FirstPerson);

    input.handle_key(KeyCode::V, true);
    rig.update(&input.frame(), Vec3::ZERO, DT);
    assert_eq!(rig.mode(), CameraMode::ThirdPerson);

    // Still held: no second toggle
    rig.update(&input.frame(), Vec3::ZERO, DT);
    assert_eq!(rig.mode(), CameraMode::ThirdPerson);

    input.handle_key(KeyCode::V, false);
    input.handle_key(KeyCode::V, true);
    rig.update(&input.frame(), Vec3::ZERO, DT);
    assert_eq!(rig.mode(), CameraMode::FirstPerson);
}

#[test]
fn test_rig_mouse_turns_heading() {
    let mut input = InputState::new();
    let mut rig = CameraRig::default();

    // 400 deg per unit per second * 0.02 s * 11.25 units = 90 degrees
    input.add_look_delta(11.25, 0.0);
    let heading = rig.update(&input.frame(), Vec3::ZERO, DT);
    assert!(approx_eq(heading, 90.0, 0.01));

    // Consumed: the next tick does not turn again
    let heading = rig.update(&input.frame(), Vec3::ZERO, DT);
    assert!(approx_eq(heading, 90.0, 0.01));
}

#[test]
fn test_rig_third_person_start() {
    let rig = CameraRig::new(CameraConfig {
        start_in_first_person: false,
        ..CameraConfig::default()
    });
    assert_eq!(rig.mode(), CameraMode::ThirdPerson);
    assert_eq!(rig.heading(), 0.0);
}

// ============================================================================
// Camera + Controller
// ============================================================================

#[test]
fn test_camera_heading_drives_movement() {
    let config = RigConfig::default();
    let mut world = StaticWorld::new();
    world.add_platform((-50.0, -50.0), (50.0, 50.0), 0.0, 1.0);
    let mover = KinematicMover::new(world.clone(), Vec3::ZERO, config.crouch.standing);
    let mut rig = CameraRig::new(config.camera.clone());
    let mut controller = ControllerBuilder::new(config)
        .ground(world)
        .mover(mover)
        .health(PlayerHealth::default())
        .build()
        .unwrap();

    let mut input = InputState::new();
    // Turn to face -X, then walk forward
    input.add_look_delta(-11.25, 0.0);
    input.handle_key(KeyCode::W, true);

    for _ in 0..100 {
        let frame = input.frame();
        let heading = rig.update(&frame, controller.position(), DT);
        controller.step(&frame, heading, DT);
    }

    assert!(approx_eq(rig.heading(), 270.0, 0.01));
    assert!(controller.position().x < -8.0);
    assert!(controller.position().z.abs() < 1.5);
}
