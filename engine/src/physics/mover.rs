//! Character mover
//!
//! The controller computes a desired displacement; a [`CharacterMover`]
//! applies it against world geometry and reports where the character ended
//! up. Collision response lives here, not in the controller.
//!
//! [`KinematicMover`] is a simple box-vs-box resolver over a [`StaticWorld`]:
//! the capsule is approximated by its bounding box and moved one axis at a
//! time (Y, then X, then Z), clamping flush against whatever it hits. Long
//! moves are split into short substeps so fast falls cannot tunnel through
//! thin floors.
//!
//! Boxes the body already overlaps before a move (standing up under a low
//! ceiling) do not push back; the character can walk out of them.

use glam::Vec3;

use super::collision::Aabb;
use super::world::StaticWorld;
use crate::config::ColliderPreset;
use crate::player::ground::LayerMask;

/// Longest distance moved in a single substep (meters).
const MAX_SUBSTEP: f32 = 0.25;

/// Upper bound on substeps per move, for absurd displacements.
const MAX_SUBSTEPS: u32 = 256;

/// Default capsule radius in meters.
pub const DEFAULT_RADIUS: f32 = 0.5;

pub trait CharacterMover {
    /// Move by `displacement`, resolving collisions. Returns the new position.
    fn move_by(&mut self, displacement: Vec3) -> Vec3;

    /// Current position (the character's feet).
    fn position(&self) -> Vec3;

    /// Resize the collision capsule (crouch / stand).
    fn set_collider(&mut self, preset: ColliderPreset);
}

/// Axis-by-axis box resolver against a [`StaticWorld`].
#[derive(Debug, Clone)]
pub struct KinematicMover {
    world: StaticWorld,
    position: Vec3,
    radius: f32,
    collider: ColliderPreset,
    solid_mask: LayerMask,
}

impl KinematicMover {
    /// Mover at `position` with the given capsule, colliding with every layer.
    pub fn new(world: StaticWorld, position: Vec3, collider: ColliderPreset) -> Self {
        Self {
            world,
            position,
            radius: DEFAULT_RADIUS,
            collider,
            solid_mask: LayerMask::ALL,
        }
    }

    /// Only collide with layers in `mask`.
    pub fn with_solid_mask(mut self, mask: LayerMask) -> Self {
        self.solid_mask = mask;
        self
    }

    pub fn collider(&self) -> ColliderPreset {
        self.collider
    }

    /// Bounding box of the capsule when the feet are at `position`.
    pub fn body_at(&self, position: Vec3) -> Aabb {
        let center = position + self.collider.center;
        Aabb::from_center(
            center,
            Vec3::new(self.radius, self.collider.height * 0.5, self.radius),
        )
    }

    fn move_axis(&mut self, axis: usize, amount: f32) {
        if amount == 0.0 {
            return;
        }
        let start = self.body_at(self.position);
        let mut target = self.position;
        target[axis] += amount;

        let mut body = self.body_at(target);
        for collider in self.world.colliders_in(self.solid_mask) {
            if !body.overlaps(&collider.bounds) || start.overlaps(&collider.bounds) {
                continue;
            }
            // Push back flush against the face we ran into
            if amount > 0.0 {
                target[axis] -= body.max[axis] - collider.bounds.min[axis];
            } else {
                target[axis] += collider.bounds.max[axis] - body.min[axis];
            }
            body = self.body_at(target);
        }
        self.position = target;
    }
}

impl CharacterMover for KinematicMover {
    fn move_by(&mut self, displacement: Vec3) -> Vec3 {
        if !displacement.is_finite() {
            tracing::warn!(?displacement, "ignoring non-finite displacement");
            return self.position;
        }

        let length = displacement.length();
        let steps = ((length / MAX_SUBSTEP).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let step = displacement / steps as f32;

        for _ in 0..steps {
            self.move_axis(1, step.y);
            self.move_axis(0, step.x);
            self.move_axis(2, step.z);
        }
        self.position
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_collider(&mut self, preset: ColliderPreset) {
        self.collider = preset;
    }
}
