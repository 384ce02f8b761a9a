//! Static collision world.
//!
//! A flat list of layered boxes: floors, ledges, walls. It answers the ground
//! probe and gives the kinematic mover something to collide against. The
//! collider list is reference counted so the sensor and the mover can share
//! one world cheaply.

use std::rc::Rc;

use glam::Vec3;

use super::collision::{Aabb, ray_aabb_intersect};
use crate::player::ground::{GroundSensor, LayerMask};

/// One static box on a collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub bounds: Aabb,
    pub layer: LayerMask,
}

#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    colliders: Rc<Vec<Collider>>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider. Clones of this world taken earlier keep the old list.
    pub fn add(&mut self, bounds: Aabb, layer: LayerMask) -> &mut Self {
        Rc::make_mut(&mut self.colliders).push(Collider { bounds, layer });
        self
    }

    /// Add a walkable slab whose top surface sits at `top_y`.
    pub fn add_platform(&mut self, min_xz: (f32, f32), max_xz: (f32, f32), top_y: f32, thickness: f32) -> &mut Self {
        let bounds = Aabb::new(
            Vec3::new(min_xz.0, top_y - thickness.abs(), min_xz.1),
            Vec3::new(max_xz.0, top_y, max_xz.1),
        );
        self.add(bounds, LayerMask::GROUND)
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Colliders on any of the layers in `mask`.
    pub fn colliders_in(&self, mask: LayerMask) -> impl Iterator<Item = &Collider> {
        self.colliders
            .iter()
            .filter(move |collider| collider.layer.intersects(mask))
    }

    /// Height of the first surface straight below `point`, if any.
    pub fn surface_below(&self, point: Vec3, mask: LayerMask) -> Option<f32> {
        self.colliders_in(mask)
            .filter_map(|collider| {
                ray_aabb_intersect(point, -Vec3::Y, collider.bounds.min, collider.bounds.max)
            })
            .min_by(|a, b| a.total_cmp(b))
            .map(|distance| point.y - distance)
    }
}

impl GroundSensor for StaticWorld {
    fn probe(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.colliders_in(mask)
            .any(|collider| collider.bounds.intersects_sphere(center, radius))
    }
}
