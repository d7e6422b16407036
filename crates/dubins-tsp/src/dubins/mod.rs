//! Dubins distance oracle: shortest forward-only paths with bounded curvature.
//!
//! Purpose
//! - Turn an ordered pair of poses plus a minimum turning radius into the
//!   length of the shortest path made of radius-`r` arcs and straight lines.
//! - The result is directional: `cost(a, b, r)` and `cost(b, a, r)` differ in
//!   general because the two headings play different roles.
//!
//! Method
//! - Work in the frame where the start sits at the origin, the goal lies on
//!   the +x axis, and lengths are divided by `r` (the classic Shkel/Lumelsky
//!   normalization).
//! - Evaluate the six canonical words LSL, RSR, LSR, RSL, RLR, LRL, drop the
//!   infeasible ones, and keep the shortest with plain `<`. Ties go to the
//!   earlier word in that fixed order.
//! - Identical poses short-circuit to a zero-length path; every other pair has
//!   strictly positive length.
//!
//! Preconditions (caller's): `radius > 0`, finite poses. The oracle itself has
//! no failure mode.
//!
//! Code cross-refs: `pose::Configuration`, `metric::DubinsMetric`.

mod path;
mod words;

pub use path::DubinsPath;
pub use words::{PathWord, SegmentKind};

use crate::pose::Configuration;
use words::Frame;

/// Round-off allowance when deciding whether a word exists.
pub(crate) const FEAS_EPS: f64 = 1e-10;

/// Shortest path over all feasible words.
pub fn shortest_path(from: &Configuration, to: &Configuration, radius: f64) -> DubinsPath {
    if from.same_pose(to) {
        return DubinsPath::stationary(*from, radius);
    }
    let frame = Frame::new(from, to, radius);
    // LSL always exists, so it seeds the scan.
    let mut best_word = PathWord::Lsl;
    let mut best = frame.lsl();
    let mut best_len = best.iter().sum::<f64>();
    for word in PathWord::ALL.into_iter().skip(1) {
        if let Some(params) = frame.solve(word) {
            let len: f64 = params.iter().sum();
            if len < best_len {
                best_word = word;
                best = params;
                best_len = len;
            }
        }
    }
    DubinsPath::new(*from, best_word, best, radius)
}

/// Length of the shortest path from `from` to `to`.
#[inline]
pub fn cost(from: &Configuration, to: &Configuration, radius: f64) -> f64 {
    shortest_path(from, to, radius).length()
}

/// Length of one specific word, or `None` if the word cannot connect the poses.
pub fn word_length(
    from: &Configuration,
    to: &Configuration,
    radius: f64,
    word: PathWord,
) -> Option<f64> {
    if from.same_pose(to) {
        return Some(0.0);
    }
    Frame::new(from, to, radius)
        .solve(word)
        .map(|p| p.iter().sum::<f64>() * radius)
}

#[cfg(test)]
mod tests;
