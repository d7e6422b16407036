use std::f64::consts::{PI, TAU};

/// Angle in `[0, 2π)`.
///
/// Floor-based, so negative inputs wrap the same way as positive ones.
/// Round-off can land exactly on `2π` for tiny negative inputs; that value is
/// folded back to 0.
#[inline]
pub fn mod2pi(theta: f64) -> f64 {
    let r = theta - TAU * (theta / TAU).floor();
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Angle in `[-π, π)`.
#[inline]
pub fn wrap_pi(theta: f64) -> f64 {
    mod2pi(theta + PI) - PI
}
