//! Controller Tests - Full Ticks Against a Static World
//!
//! Drives `ThirdPersonController` with a `KinematicMover` over `StaticWorld`
//! geometry: walking, jumping, ledge drops, crouching under overhangs and
//! the death gate.

use character_rig::config::RigConfig;
use character_rig::physics::{Aabb, KinematicMover, StaticWorld};
use character_rig::player::{LayerMask, PlayerHealth};
use character_rig::{
    ControllerBuilder, ControllerEvent, FrameInput, InputState, KeyCode, ThirdPersonController,
};
use glam::Vec3;

const DT: f32 = 0.02;

fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Large floor at y = 0 plus a 6 m high block around the origin.
fn ledge_world() -> StaticWorld {
    let mut world = StaticWorld::new();
    world
        .add_platform((-50.0, -50.0), (50.0, 50.0), 0.0, 1.0)
        .add_platform((-2.0, -2.0), (2.0, 2.0), 6.0, 6.0);
    world
}

fn flat_world() -> StaticWorld {
    let mut world = StaticWorld::new();
    world.add_platform((-50.0, -50.0), (50.0, 50.0), 0.0, 1.0);
    world
}

fn controller_in(world: StaticWorld, spawn: Vec3, max_health: u32) -> ThirdPersonController {
    let config = RigConfig::default();
    let mover = KinematicMover::new(world.clone(), spawn, config.crouch.standing);
    ControllerBuilder::new(config)
        .ground(world)
        .mover(mover)
        .health(PlayerHealth::new(max_health))
        .build()
        .unwrap()
}

/// Step `ticks` times with the same input, collecting every event.
fn run(
    controller: &mut ThirdPersonController,
    input: &FrameInput,
    heading: f32,
    ticks: usize,
) -> Vec<ControllerEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(controller.step(input, heading, DT).events);
    }
    events
}

fn landings(events: &[ControllerEvent]) -> Vec<(f32, u32)> {
    events
        .iter()
        .filter_map(|event| match event {
            ControllerEvent::Landed {
                fall_distance,
                damage,
            } => Some((*fall_distance, *damage)),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Walking
// ============================================================================

#[test]
fn test_spawn_on_floor_is_not_a_landing() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    assert!(controller.state().is_grounded);

    let events = run(&mut controller, &FrameInput::default(), 0.0, 10);
    assert!(events.is_empty(), "events: {events:?}");
}

#[test]
fn test_walk_forward_on_floor() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    controller.step(&FrameInput::default(), 0.0, DT);
    assert!(controller.state().is_grounded);

    let outcome = controller.step(&FrameInput::axes(0.0, 1.0), 0.0, 0.1);
    assert!(approx_eq(outcome.displacement.z, 0.6, 1e-3));
    assert!(approx_eq(outcome.position.z, 0.6, 1e-3));
    // Grounding bias pushes into the floor, the mover keeps the feet on top
    assert!(approx_eq(outcome.position.y, 0.0, 1e-3));
    assert!(controller.state().is_grounded);
}

#[test]
fn test_movement_follows_camera_heading() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    run(&mut controller, &FrameInput::axes(0.0, 1.0), 90.0, 50);

    let state = controller.state();
    assert!(approx_eq(state.facing_angle, 90.0, 0.5));
    assert!(state.position.x > 4.0);
    // Some forward drift while the turn settles
    assert!(state.position.z.abs() < 1.5);
}

#[test]
fn test_strafe_turns_by_short_path() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    // Input left with heading 0 targets 270; the smoother goes through 315, not 90
    let outcome = controller.step(&FrameInput::axes(-1.0, 0.0), 0.0, DT);
    let angle = controller.state().facing_angle;
    assert!(angle > 180.0, "turned the long way: {angle}");
    assert!(outcome.displacement.x < 0.0);
}

#[test]
fn test_wall_stops_movement() {
    let mut world = flat_world();
    world.add(
        Aabb::new(Vec3::new(-5.0, 0.0, 3.0), Vec3::new(5.0, 4.0, 4.0)),
        LayerMask::DEFAULT,
    );
    let mut controller = controller_in(world, Vec3::ZERO, 100);
    run(&mut controller, &FrameInput::axes(0.0, 1.0), 0.0, 100);

    assert!(approx_eq(controller.position().z, 2.5, 1e-3));
}

// ============================================================================
// Jumping
// ============================================================================

#[test]
fn test_jump_arc_lands_without_damage() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    controller.step(&FrameInput::default(), 0.0, DT);

    let jump = FrameInput {
        jump_pressed: true,
        jump_held: true,
        ..FrameInput::default()
    };
    let outcome = controller.step(&jump, 0.0, DT);
    assert!(outcome.events.contains(&ControllerEvent::Jumped { velocity: 7.0 }));
    assert_eq!(controller.state().vertical_velocity, 7.0);
    assert!(!controller.state().is_grounded);

    let hold = FrameInput {
        jump_held: true,
        ..FrameInput::default()
    };
    let mut apex: f32 = 0.0;
    let mut events = Vec::new();
    for _ in 0..200 {
        let outcome = controller.step(&hold, 0.0, DT);
        apex = apex.max(outcome.position.y);
        events.extend(outcome.events);
    }

    // v^2 / 2g with g = 9.81
    assert!(approx_eq(apex, 2.5, 0.2), "apex {apex}");
    assert!(controller.state().is_grounded);
    let landed = landings(&events);
    assert_eq!(landed.len(), 1);
    assert_eq!(landed[0].1, 0);
    assert_eq!(controller.health().current_health(), 100);
}

#[test]
fn test_released_jump_is_lower() {
    let apex_with = |held: bool| {
        let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
        controller.step(&FrameInput::default(), 0.0, DT);
        controller.step(
            &FrameInput {
                jump_pressed: true,
                jump_held: true,
                ..FrameInput::default()
            },
            0.0,
            DT,
        );
        let input = FrameInput {
            jump_held: held,
            ..FrameInput::default()
        };
        let mut apex: f32 = 0.0;
        for _ in 0..100 {
            apex = apex.max(controller.step(&input, 0.0, DT).position.y);
        }
        apex
    };
    assert!(apex_with(false) < apex_with(true) - 0.5);
}

#[test]
fn test_no_jump_while_airborne() {
    let mut controller = controller_in(flat_world(), Vec3::new(0.0, 5.0, 0.0), 100);
    let jump = FrameInput {
        jump_pressed: true,
        jump_held: true,
        ..FrameInput::default()
    };
    let events = run(&mut controller, &jump, 0.0, 5);
    assert!(!events
        .iter()
        .any(|event| matches!(event, ControllerEvent::Jumped { .. })));
    assert!(controller.state().vertical_velocity < 0.0);
}

// ============================================================================
// Falling
// ============================================================================

#[test]
fn test_ledge_drop_deals_fall_damage_once() {
    let mut controller = controller_in(ledge_world(), Vec3::new(0.0, 6.0, 0.0), 100);
    controller.step(&FrameInput::default(), 0.0, DT);
    assert!(controller.state().is_grounded);

    // Walk off the +Z edge, then stop
    let mut events = run(&mut controller, &FrameInput::axes(0.0, 1.0), 0.0, 40);
    events.extend(run(&mut controller, &FrameInput::default(), 0.0, 150));

    assert!(events
        .iter()
        .any(|event| matches!(event, ControllerEvent::LeftGround { .. })));

    let damaging: Vec<_> = landings(&events)
        .into_iter()
        .filter(|(_, damage)| *damage > 0)
        .collect();
    assert_eq!(damaging.len(), 1, "events: {events:?}");
    let (fall_distance, damage) = damaging[0];
    assert!(approx_eq(fall_distance, 6.0, 0.15), "fell {fall_distance}");
    assert_eq!(damage, 21);
    assert_eq!(controller.health().current_health(), 79);

    // Standing still on the floor does not hurt again
    run(&mut controller, &FrameInput::default(), 0.0, 100);
    assert_eq!(controller.health().current_health(), 79);
    assert!(controller.state().is_grounded);
    assert!(!controller.state().is_falling);
}

#[test]
fn test_falling_flags() {
    let mut controller = controller_in(flat_world(), Vec3::new(0.0, 8.0, 0.0), 100);
    let outcome = controller.step(&FrameInput::default(), 0.0, DT);
    assert!(!outcome.animation.is_grounded);
    assert!(outcome.animation.is_falling);
    assert!(controller.state().vertical_velocity < 0.0);
}

#[test]
fn test_lethal_fall_latches_death() {
    let mut controller = controller_in(flat_world(), Vec3::new(0.0, 20.0, 0.0), 40);

    let events = run(&mut controller, &FrameInput::default(), 0.0, 200);
    let deaths = events
        .iter()
        .filter(|event| matches!(event, ControllerEvent::Died))
        .count();
    assert_eq!(deaths, 1);
    assert!(controller.is_dead());
    assert_eq!(controller.health().current_health(), 0);

    let landed = landings(&events);
    assert_eq!(landed.len(), 1);
    assert_eq!(landed[0].1, 50);

    // Frozen: no movement, no jump, no crouch, idle animation
    let resting = controller.position();
    let busy = FrameInput {
        jump_pressed: true,
        jump_held: true,
        crouch_pressed: true,
        ..FrameInput::axes(1.0, 1.0)
    };
    for _ in 0..20 {
        let outcome = controller.step(&busy, 0.0, DT);
        assert_eq!(outcome.displacement, Vec3::ZERO);
        assert!(outcome.events.is_empty());
        assert!(!outcome.animation.is_running);
        assert!(!outcome.animation.jump_triggered);
    }
    assert_eq!(controller.position(), resting);
    assert!(!controller.state().is_crouching);
}

// ============================================================================
// Crouching
// ============================================================================

#[test]
fn test_crouch_fits_under_overhang() {
    let mut world = flat_world();
    world.add(
        Aabb::new(Vec3::new(-5.0, 1.5, 3.0), Vec3::new(5.0, 3.0, 5.0)),
        LayerMask::DEFAULT,
    );

    let mut standing = controller_in(world.clone(), Vec3::ZERO, 100);
    run(&mut standing, &FrameInput::axes(0.0, 1.0), 0.0, 100);
    assert!(approx_eq(standing.position().z, 2.5, 1e-3));

    let mut crouched = controller_in(world, Vec3::ZERO, 100);
    let crouch = FrameInput {
        crouch_pressed: true,
        ..FrameInput::default()
    };
    let outcome = crouched.step(&crouch, 0.0, DT);
    assert!(outcome
        .events
        .contains(&ControllerEvent::CrouchChanged { crouching: true }));
    assert!(outcome.animation.is_crouching);

    run(&mut crouched, &FrameInput::axes(0.0, 1.0), 0.0, 200);
    assert!(crouched.position().z > 5.5);
}

#[test]
fn test_stand_up_under_overhang_stays_on_floor() {
    let mut world = flat_world();
    world.add(
        Aabb::new(Vec3::new(-5.0, 1.5, -5.0), Vec3::new(5.0, 3.0, 5.0)),
        LayerMask::DEFAULT,
    );
    let mut controller = controller_in(world, Vec3::ZERO, 100);
    let press = FrameInput {
        crouch_pressed: true,
        ..FrameInput::default()
    };

    controller.step(&press, 0.0, DT);
    run(&mut controller, &FrameInput::default(), 0.0, 10);
    assert!(controller.state().is_crouching);

    let outcome = controller.step(&press, 0.0, DT);
    assert!(outcome
        .events
        .contains(&ControllerEvent::CrouchChanged { crouching: false }));

    let events = run(&mut controller, &FrameInput::default(), 0.0, 20);
    assert!(!events
        .iter()
        .any(|event| matches!(event, ControllerEvent::LeftGround { .. })));
    assert!(approx_eq(controller.position().y, 0.0, 1e-3));
    assert!(controller.state().is_grounded);

    // Walks out from under it
    run(&mut controller, &FrameInput::axes(0.0, 1.0), 0.0, 100);
    assert!(controller.position().z > 5.5);
    assert!(approx_eq(controller.position().y, 0.0, 1e-3));
}

#[test]
fn test_crouch_key_tapped_between_ticks() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    let mut input = InputState::new();
    let crouch_changes = |events: &[ControllerEvent]| {
        events
            .iter()
            .filter(|event| matches!(event, ControllerEvent::CrouchChanged { .. }))
            .count()
    };

    input.handle_key(KeyCode::C, true);
    let outcome = controller.step(&input.frame(), 0.0, DT);
    assert_eq!(crouch_changes(&outcome.events), 1);

    // Holding the key does not toggle again
    for _ in 0..10 {
        let outcome = controller.step(&input.frame(), 0.0, DT);
        assert_eq!(crouch_changes(&outcome.events), 0);
    }
    assert!(controller.state().is_crouching);

    // Released and pressed again before the next tick
    input.handle_key(KeyCode::C, false);
    input.handle_key(KeyCode::C, true);
    let outcome = controller.step(&input.frame(), 0.0, DT);
    assert!(outcome
        .events
        .contains(&ControllerEvent::CrouchChanged { crouching: false }));
    assert!(!controller.state().is_crouching);
}

#[test]
fn test_crouch_halves_speed() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    controller.step(
        &FrameInput {
            crouch_pressed: true,
            ..FrameInput::default()
        },
        0.0,
        DT,
    );
    controller.step(&FrameInput::default(), 0.0, DT);

    let outcome = controller.step(&FrameInput::axes(0.0, 1.0), 0.0, 0.1);
    assert!(approx_eq(outcome.displacement.z, 0.3, 1e-3));
}

// ============================================================================
// Robustness
// ============================================================================

#[test]
fn test_zero_and_huge_dt() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    controller.step(&FrameInput::default(), 0.0, DT);

    let outcome = controller.step(&FrameInput::axes(1.0, 1.0), 30.0, 0.0);
    assert_eq!(outcome.displacement, Vec3::ZERO);

    // Clamped to max_dt = 0.1
    let outcome = controller.step(&FrameInput::axes(0.0, 1.0), 0.0, 5.0);
    assert!(outcome.displacement.length() < 6.0 * 0.1 + 0.25);
    assert!(controller.state().is_finite());
}

#[test]
fn test_garbage_input_keeps_state_finite() {
    let mut controller = controller_in(flat_world(), Vec3::ZERO, 100);
    let garbage = FrameInput::axes(f32::NAN, f32::NEG_INFINITY);
    for heading in [f32::NAN, f32::INFINITY, 45.0, f32::NEG_INFINITY] {
        controller.step(&garbage, heading, f32::NAN);
        controller.step(&garbage, heading, DT);
    }
    assert!(controller.state().is_finite());
    assert!(!controller.is_dead());
}
