//! Ground probing.
//!
//! The controller asks a [`GroundSensor`] once per tick whether a small sphere
//! at the character's feet overlaps walkable geometry. The query is pure; the
//! sensor owns whatever collision data it answers from.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bit set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const DEFAULT: LayerMask = LayerMask(1 << 0);
    pub const GROUND: LayerMask = LayerMask(1 << 3);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing a single layer index (0..32).
    pub fn layer(index: u8) -> Self {
        LayerMask(1u32.checked_shl(index as u32).unwrap_or(0))
    }

    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn union(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::DEFAULT
    }
}

/// Answers "do the feet touch walkable ground this frame?".
pub trait GroundSensor {
    /// Whether a sphere of `radius` at `center` overlaps any collider on `mask`.
    fn probe(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;
}

/// Sensor for a rig with no collision world attached. Never grounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGround;

impl GroundSensor for NoGround {
    fn probe(&self, _center: Vec3, _radius: f32, _mask: LayerMask) -> bool {
        false
    }
}

impl<F> GroundSensor for F
where
    F: Fn(Vec3, f32, LayerMask) -> bool,
{
    fn probe(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self(center, radius, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_mask_intersects() {
        let walkable = LayerMask::GROUND.union(LayerMask::DEFAULT);
        assert!(walkable.intersects(LayerMask::GROUND));
        assert!(!LayerMask::GROUND.intersects(LayerMask::DEFAULT));
        assert!(!LayerMask::NONE.intersects(LayerMask::ALL));
    }

    #[test]
    fn test_layer_index() {
        assert_eq!(LayerMask::layer(3), LayerMask::GROUND);
        assert_eq!(LayerMask::layer(40), LayerMask::NONE);
    }

    #[test]
    fn test_no_ground_is_never_grounded() {
        assert!(!NoGround.probe(Vec3::ZERO, 10.0, LayerMask::ALL));
    }

    #[test]
    fn test_closure_sensor() {
        let floor = |center: Vec3, radius: f32, _mask: LayerMask| center.y - radius <= 0.0;
        assert!(floor.probe(Vec3::new(0.0, 0.3, 0.0), 0.4, LayerMask::GROUND));
        assert!(!floor.probe(Vec3::new(0.0, 0.5, 0.0), 0.4, LayerMask::GROUND));
    }
}
