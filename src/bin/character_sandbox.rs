//! Character Sandbox - Headless Scripted Session
//!
//! Run with: `cargo run --bin character_sandbox [config.json]`
//!
//! Builds a small static level (a floor and a 6 m tower), spawns the
//! character on the tower and plays a fixed input script through the same
//! path a game would use: keys into `InputState`, one frame per tick into the
//! camera rig and the controller. Every controller event is logged.
//!
//! Script:
//! - Walk along the tower top and turn with the mouse
//! - Jump
//! - Walk off the edge (fall damage)
//! - Crouch, sneak, stand up
//! - Switch to the third-person camera and walk
//! - Second character: lethal drop from 30 m
//!
//! Set `RUST_LOG=character_rig=debug` for per-event detail.

use std::error::Error;

use character_rig::physics::{KinematicMover, StaticWorld};
use character_rig::player::PlayerHealth;
use character_rig::{
    CameraRig, ControllerBuilder, ControllerEvent, InputState, KeyCode, RigConfig,
    ThirdPersonController,
};
use glam::{Vec2, Vec3};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Fixed simulation step (50 Hz)
const DT: f32 = 0.02;

/// One stretch of the input script.
struct ScriptStep {
    label: &'static str,
    /// Key names held for the whole step (pressed on its first tick)
    keys: &'static [&'static str],
    /// Mouse motion added every tick
    look: Vec2,
    ticks: u32,
}

const fn step(label: &'static str, keys: &'static [&'static str], ticks: u32) -> ScriptStep {
    ScriptStep {
        label,
        keys,
        look: Vec2::ZERO,
        ticks,
    }
}

const TOWER_SCRIPT: &[ScriptStep] = &[
    step("settle", &[], 10),
    step("walk", &["w"], 10),
    ScriptStep {
        label: "turn right",
        keys: &[],
        look: Vec2::new(1.0, 0.0),
        ticks: 10,
    },
    step("jump", &["space"], 1),
    step("hold jump", &["space"], 60),
    ScriptStep {
        label: "turn back",
        keys: &[],
        look: Vec2::new(-1.0, 0.0),
        ticks: 10,
    },
    step("walk off the edge", &["w"], 40),
    step("recover", &[], 60),
    step("crouch", &["c"], 1),
    step("sneak", &["w"], 50),
    step("stand up", &["lctrl"], 1),
    step("third-person camera", &["v"], 1),
    ScriptStep {
        label: "orbit and walk",
        keys: &["w", "d"],
        look: Vec2::new(0.5, 0.1),
        ticks: 60,
    },
];

const LETHAL_SCRIPT: &[ScriptStep] = &[step("free fall", &[], 200)];

struct Session {
    world: StaticWorld,
    input: InputState,
    camera: CameraRig,
    controller: ThirdPersonController,
    ticks: u64,
}

impl Session {
    fn new(config: &RigConfig, world: &StaticWorld, spawn: Vec3) -> Result<Self, Box<dyn Error>> {
        let mover = KinematicMover::new(world.clone(), spawn, config.crouch.standing);
        let controller = ControllerBuilder::new(config.clone())
            .ground(world.clone())
            .mover(mover)
            .health(PlayerHealth::new(config.health.max_health))
            .build()?;
        Ok(Self {
            world: world.clone(),
            input: InputState::new(),
            camera: CameraRig::new(config.camera.clone()),
            controller,
            ticks: 0,
        })
    }

    fn play(&mut self, script: &[ScriptStep]) {
        for step in script {
            tracing::info!(step = step.label, "script");
            self.input.reset();
            for name in step.keys {
                self.input.handle_key(KeyCode::from_name(name), true);
            }
            for _ in 0..step.ticks {
                self.input.add_look_delta(step.look.x, step.look.y);
                self.tick();
            }
        }
    }

    fn tick(&mut self) {
        let frame = self.input.frame();
        let heading = self
            .camera
            .update(&frame, self.controller.position(), DT);
        let outcome = self.controller.step(&frame, heading, DT);
        self.ticks += 1;

        for event in &outcome.events {
            match event {
                ControllerEvent::Landed {
                    fall_distance,
                    damage,
                } if *damage > 0 => tracing::info!(
                    tick = self.ticks,
                    fall_distance,
                    damage,
                    health = self.controller.health().current_health(),
                    "hard landing"
                ),
                ControllerEvent::LeftGround { height } => {
                    let surface = self
                        .world
                        .surface_below(outcome.position, self.controller.config().ground.mask);
                    tracing::info!(tick = self.ticks, height, surface = ?surface, "left ground");
                }
                ControllerEvent::Died => {
                    tracing::info!(tick = self.ticks, position = ?outcome.position, "died")
                }
                other => tracing::debug!(tick = self.ticks, event = ?other, "event"),
            }
        }
    }

    fn report(&self, name: &str) {
        let state = self.controller.state();
        tracing::info!(
            session = name,
            ticks = self.ticks,
            position = ?state.position,
            facing = state.facing_angle,
            camera = ?self.camera.mode(),
            health = self.controller.health().current_health(),
            dead = state.is_dead,
            "session finished"
        );
    }
}

fn build_world() -> StaticWorld {
    let mut world = StaticWorld::new();
    world
        .add_platform((-40.0, -40.0), (40.0, 40.0), 0.0, 1.0)
        .add_platform((-2.0, -2.0), (2.0, 2.0), 6.0, 6.0);
    world
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("character_rig=info".parse()?)
                .add_directive("character_sandbox=info".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading config");
            RigConfig::load(&path)?
        }
        None => RigConfig::default(),
    };

    let world = build_world();

    let mut tower = Session::new(&config, &world, Vec3::new(0.0, 6.0, -1.5))?;
    tower.play(TOWER_SCRIPT);
    tower.report("tower");

    let mut lethal = Session::new(&config, &world, Vec3::new(20.0, 30.0, 20.0))?;
    lethal.play(LETHAL_SCRIPT);
    lethal.report("lethal drop");

    Ok(())
}
