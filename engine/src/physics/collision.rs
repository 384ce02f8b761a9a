//! Collision primitives
//!
//! Axis-aligned boxes and the handful of queries the character rig needs:
//! box/box overlap for the mover, sphere/box overlap for the ground probe and
//! a ray/box slab test for height queries.
//!
//! # Example
//!
//! ```ignore
//! use character_rig::physics::collision::{Aabb, ray_aabb_intersect};
//! use glam::Vec3;
//!
//! let floor = Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0));
//! assert!(floor.intersects_sphere(Vec3::new(0.0, 0.3, 0.0), 0.4));
//!
//! let t = ray_aabb_intersect(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y, floor.min, floor.max);
//! assert_eq!(t, Some(5.0));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tolerance for touching-but-not-penetrating contacts.
pub const CONTACT_EPSILON: f32 = 1e-4;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box from two corners (any order).
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered at `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether the two boxes penetrate by more than [`CONTACT_EPSILON`].
    ///
    /// Boxes that merely touch (a character standing on a floor) do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x - CONTACT_EPSILON
            && self.max.x > other.min.x + CONTACT_EPSILON
            && self.min.y < other.max.y - CONTACT_EPSILON
            && self.max.y > other.min.y + CONTACT_EPSILON
            && self.min.z < other.max.z - CONTACT_EPSILON
            && self.max.z > other.min.z + CONTACT_EPSILON
    }

    /// Point in the box closest to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Sphere/box overlap (touching counts).
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = self.closest_point(center);
        closest.distance_squared(center) <= radius * radius
    }
}

/// Ray/box intersection using the slab method.
///
/// Returns the distance along `ray_dir` (which must be normalized) to the
/// nearest intersection at or in front of the origin. A ray starting inside
/// the box reports the exit distance.
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero components become huge so the slab for that axis never clips
    let inv = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * if d.is_sign_negative() { -1.0 } else { 1.0 }
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}
