//! Critically damped smoothing.
//!
//! A spring-damper approximation that eases a value toward a target without
//! overshooting it. The angle variant takes the shortest path around the
//! circle, so turning from 170° to -170° rotates 20°, not 340°.
//!
//! All functions are safe for `dt == 0`: they return the current value and
//! leave the velocity untouched.

use glam::Vec3;

/// Smallest smoothing time accepted; prevents division by zero.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest difference `target - current` in degrees, in `(-180, 180]`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Ease `current` toward `target`.
///
/// `velocity` carries the smoother's state between calls and must be kept by
/// the caller. Returns the new value.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 || !dt.is_finite() {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Clamp to the target if this step would pass it
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Ease an angle in degrees toward `target` along the shortest arc.
///
/// The result is wrapped into `[0, 360)`.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let unwrapped_target = current + delta_angle(current, target);
    wrap_degrees(smooth_damp(current, unwrapped_target, velocity, smooth_time, dt))
}

/// Per-component [`smooth_damp`] for vectors.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    Vec3::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, dt),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, dt),
        smooth_damp(current.z, target.z, &mut velocity.z, smooth_time, dt),
    )
}
