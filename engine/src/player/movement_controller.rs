//! Third-Person Movement Controller
//!
//! Drives one character per tick: ground probe, landing and fall damage,
//! jump, crouch, vertical integration, camera-relative movement and animation
//! parameters. Movement direction is relative to the camera heading.
//!
//! # Tick order
//!
//! 1. Death gate (nothing moves once health hits zero)
//! 2. Input sanitising (NaN axes, NaN heading, bad `dt`)
//! 3. Ground probe and landing evaluation
//! 4. Jump, then crouch toggle
//! 5. Vertical integration (skipped on the jump tick)
//! 6. Turn smoothing and displacement, resolved by the mover
//! 7. Animation parameters
//!
//! # Usage
//!
//! ```rust,ignore
//! use character_rig::config::RigConfig;
//! use character_rig::physics::{KinematicMover, StaticWorld};
//! use character_rig::player::{ControllerBuilder, PlayerHealth};
//!
//! let config = RigConfig::default();
//! let mover = KinematicMover::new(world.clone(), spawn, config.crouch.standing);
//! let mut controller = ControllerBuilder::new(config)
//!     .ground(world)
//!     .mover(mover)
//!     .health(PlayerHealth::new(100))
//!     .build()?;
//!
//! // Each frame:
//! let outcome = controller.step(&frame, camera.heading(), delta_time);
//! ```

use glam::{Vec2, Vec3};

use crate::config::RigConfig;
use crate::error::RigError;
use crate::input::FrameInput;
use crate::physics::mover::CharacterMover;

use super::animation::{AnimationFlags, AnimationSink, NullAnimator};
use super::crouch::CrouchToggle;
use super::fall_damage::FallDamageEvaluator;
use super::gravity::{GravityIntegrator, GroundTransition};
use super::ground::{GroundSensor, NoGround};
use super::health::{HealthSink, HealthStatus};
use super::state::CharacterState;
use super::turn::smooth_damp_angle;

/// Something worth telling the host about, produced by one `step()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    /// Touched down after being airborne
    Landed { fall_distance: f32, damage: u32 },
    /// Walked off an edge at this height
    LeftGround { height: f32 },
    /// Jump started with this upward velocity
    Jumped { velocity: f32 },
    CrouchChanged { crouching: bool },
    /// Health reached zero. Emitted once; the controller is frozen afterwards.
    Died,
}

/// Result of one `step()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Displacement requested from the mover this tick
    pub displacement: Vec3,
    /// Position reported by the mover after resolving the move
    pub position: Vec3,
    pub events: Vec<ControllerEvent>,
    /// Animation parameters pushed to the sink this tick
    pub animation: AnimationFlags,
}

/// Collects collaborators and validates config before building a controller.
///
/// A mover and a health sink are required. Without a ground sensor the
/// character never touches ground; without an animator, parameters are
/// only reported in [`StepOutcome::animation`].
pub struct ControllerBuilder {
    config: RigConfig,
    ground: Option<Box<dyn GroundSensor>>,
    mover: Option<Box<dyn CharacterMover>>,
    health: Option<Box<dyn HealthSink>>,
    animator: Option<Box<dyn AnimationSink>>,
}

impl ControllerBuilder {
    pub fn new(config: RigConfig) -> Self {
        Self {
            config,
            ground: None,
            mover: None,
            health: None,
            animator: None,
        }
    }

    pub fn ground(mut self, ground: impl GroundSensor + 'static) -> Self {
        self.ground = Some(Box::new(ground));
        self
    }

    pub fn mover(mut self, mover: impl CharacterMover + 'static) -> Self {
        self.mover = Some(Box::new(mover));
        self
    }

    pub fn health(mut self, health: impl HealthSink + 'static) -> Self {
        self.health = Some(Box::new(health));
        self
    }

    pub fn animator(mut self, animator: impl AnimationSink + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    pub fn build(self) -> Result<ThirdPersonController, RigError> {
        self.config.validate()?;
        let mut mover = self.mover.ok_or(RigError::MissingCollaborator("mover"))?;
        let health = self.health.ok_or(RigError::MissingCollaborator("health"))?;
        let ground = self.ground.unwrap_or_else(|| {
            tracing::warn!("no ground sensor attached; character will never be grounded");
            Box::new(NoGround)
        });
        let animator = self.animator.unwrap_or_else(|| Box::new(NullAnimator));

        let crouch = CrouchToggle::new(self.config.crouch.clone());
        mover.set_collider(crouch.collider());

        let mut state = CharacterState::new(mover.position());
        state.is_dead = health.is_dead();
        // Spawned on a floor: no landing on the first tick
        state.is_grounded = ground.probe(
            state.position + self.config.ground.check_offset,
            self.config.ground.distance,
            self.config.ground.mask,
        );

        Ok(ThirdPersonController {
            gravity: GravityIntegrator::new(self.config.gravity.clone()),
            fall_damage: FallDamageEvaluator::new(self.config.fall_damage.clone()),
            crouch,
            config: self.config,
            state,
            ground,
            mover,
            health,
            animator,
        })
    }
}

/// Camera-relative character controller.
pub struct ThirdPersonController {
    config: RigConfig,
    state: CharacterState,
    gravity: GravityIntegrator,
    fall_damage: FallDamageEvaluator,
    crouch: CrouchToggle,
    ground: Box<dyn GroundSensor>,
    mover: Box<dyn CharacterMover>,
    health: Box<dyn HealthSink>,
    animator: Box<dyn AnimationSink>,
}

impl ThirdPersonController {
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn health(&self) -> &dyn HealthSink {
        self.health.as_ref()
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Speed for the current stance in m/s.
    pub fn current_speed(&self) -> f32 {
        self.config.movement.speed * self.crouch.speed_multiplier()
    }

    /// Advance the character by one tick.
    ///
    /// `camera_heading` is the camera yaw in degrees (0 = +Z, 90 = +X).
    /// Never panics; bad input is sanitised and logged.
    pub fn step(&mut self, input: &FrameInput, camera_heading: f32, dt: f32) -> StepOutcome {
        let mut events = Vec::new();

        if self.check_death(&mut events) {
            return self.frozen_outcome(events);
        }

        let dt = self.sanitize_dt(dt);
        let heading = self.sanitize_heading(camera_heading);
        let axes = Vec2::new(sanitize_axis(input.horizontal), sanitize_axis(input.vertical));

        // Ground
        let probe_center = self.state.position + self.config.ground.check_offset;
        let probe_hit =
            self.ground
                .probe(probe_center, self.config.ground.distance, self.config.ground.mask);
        match self.gravity.update_grounding(&mut self.state, probe_hit) {
            GroundTransition::Landed => {
                self.land(&mut events);
                if self.state.is_dead {
                    return self.frozen_outcome(events);
                }
            }
            GroundTransition::LeftGround => {
                tracing::debug!(height = self.state.position.y, "left ground");
                events.push(ControllerEvent::LeftGround {
                    height: self.state.position.y,
                });
            }
            GroundTransition::None => {}
        }

        // Jump
        let jumped = input.jump_pressed
            && self
                .gravity
                .try_jump(&mut self.state, self.config.movement.jump_force);
        if jumped {
            tracing::debug!(velocity = self.state.vertical_velocity, "jump");
            events.push(ControllerEvent::Jumped {
                velocity: self.state.vertical_velocity,
            });
        }

        // Crouch
        if let Some(preset) = self.crouch.update(input.crouch_pressed) {
            self.mover.set_collider(preset);
            self.state.is_crouching = self.crouch.is_crouching();
            events.push(ControllerEvent::CrouchChanged {
                crouching: self.state.is_crouching,
            });
        }

        // Vertical velocity is exactly the jump force on the jump tick
        if !jumped {
            self.gravity.integrate(&mut self.state, input.jump_held, dt);
        }

        // Horizontal
        let is_moving = axes.length() >= self.config.movement.input_deadzone;
        let mut displacement = Vec3::ZERO;
        if is_moving {
            let direction = axes.normalize_or_zero();
            let target = direction.x.atan2(direction.y).to_degrees() + heading;
            self.state.facing_angle = smooth_damp_angle(
                self.state.facing_angle,
                target,
                &mut self.state.turn_velocity,
                self.config.movement.turn_smooth_time,
                dt,
            );
            displacement += self.state.forward() * self.current_speed() * dt;
        }
        displacement.y += self.state.vertical_velocity * dt;

        self.state.position = self.mover.move_by(displacement);
        self.gravity.track_apex(&mut self.state);

        let animation = AnimationFlags {
            is_running: is_moving,
            is_crouching: self.state.is_crouching,
            is_grounded: self.state.is_grounded,
            is_falling: self.state.is_falling,
            jump_triggered: jumped,
        };
        animation.apply_to(self.animator.as_mut());

        StepOutcome {
            displacement,
            position: self.state.position,
            events,
            animation,
        }
    }

    /// Latch the dead state. Returns true if the controller is frozen.
    fn check_death(&mut self, events: &mut Vec<ControllerEvent>) -> bool {
        if self.state.is_dead {
            return true;
        }
        if self.health.is_dead() {
            self.die(events);
            return true;
        }
        false
    }

    fn die(&mut self, events: &mut Vec<ControllerEvent>) {
        self.state.is_dead = true;
        self.state.vertical_velocity = 0.0;
        self.state.is_falling = false;
        tracing::info!(position = ?self.state.position, "character died");
        events.push(ControllerEvent::Died);
    }

    fn land(&mut self, events: &mut Vec<ControllerEvent>) {
        let landing = self
            .fall_damage
            .evaluate(self.state.fall_start_height, self.state.position.y);
        tracing::debug!(
            fall_distance = landing.fall_distance,
            damage = landing.damage,
            "landed"
        );
        events.push(ControllerEvent::Landed {
            fall_distance: landing.fall_distance,
            damage: landing.damage,
        });

        if landing.damage > 0 {
            tracing::info!(
                fall_distance = landing.fall_distance,
                damage = landing.damage,
                "fall damage"
            );
            match self.health.take_damage(landing.damage) {
                HealthStatus::Died | HealthStatus::AlreadyDead => self.die(events),
                HealthStatus::Alive(_) => {}
            }
        }
        self.state.fall_start_height = self.state.position.y;
    }

    fn frozen_outcome(&mut self, events: Vec<ControllerEvent>) -> StepOutcome {
        let animation = AnimationFlags::idle();
        animation.apply_to(self.animator.as_mut());
        StepOutcome {
            displacement: Vec3::ZERO,
            position: self.state.position,
            events,
            animation,
        }
    }

    fn sanitize_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.config.movement.max_dt)
        } else {
            tracing::warn!(dt, "non-finite delta time, treating as 0");
            0.0
        }
    }

    fn sanitize_heading(&mut self, heading: f32) -> f32 {
        if heading.is_finite() {
            self.state.last_camera_heading = heading;
            heading
        } else {
            tracing::warn!(
                heading,
                fallback = self.state.last_camera_heading,
                "non-finite camera heading"
            );
            self.state.last_camera_heading
        }
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        tracing::warn!("NaN input axis, treating as 0");
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
