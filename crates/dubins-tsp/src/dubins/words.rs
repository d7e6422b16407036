//! The six canonical words in the normalized frame.
//!
//! Each solver returns the three segment parameters `[t, p, q]`: arc angles
//! in radians for curved segments, straight length over `r` for `S`. All are
//! non-negative. Multiplying their sum by `r` gives the world length.

use std::f64::consts::TAU;
use std::fmt;

use super::FEAS_EPS;
use crate::pose::{mod2pi, Configuration};

/// Segment type inside a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Left,
    Straight,
    Right,
}

/// One of the six Dubins words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathWord {
    Lsl,
    Rsr,
    Lsr,
    Rsl,
    Rlr,
    Lrl,
}

impl PathWord {
    /// Fixed evaluation order; also the tie-break order.
    pub const ALL: [PathWord; 6] = [
        PathWord::Lsl,
        PathWord::Rsr,
        PathWord::Lsr,
        PathWord::Rsl,
        PathWord::Rlr,
        PathWord::Lrl,
    ];

    pub fn segments(self) -> [SegmentKind; 3] {
        use SegmentKind::{Left as L, Right as R, Straight as S};
        match self {
            PathWord::Lsl => [L, S, L],
            PathWord::Rsr => [R, S, R],
            PathWord::Lsr => [L, S, R],
            PathWord::Rsl => [R, S, L],
            PathWord::Rlr => [R, L, R],
            PathWord::Lrl => [L, R, L],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathWord::Lsl => "LSL",
            PathWord::Rsr => "RSR",
            PathWord::Lsr => "LSR",
            PathWord::Rsl => "RSL",
            PathWord::Rlr => "RLR",
            PathWord::Lrl => "LRL",
        }
    }

    /// Curve-straight-curve (as opposed to three arcs).
    pub fn is_csc(self) -> bool {
        self.segments()[1] == SegmentKind::Straight
    }
}

impl fmt::Display for PathWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative round-off allowed below the chord length.
const CHORD_SLACK: f64 = 1e-9;

/// Quantities shared by all six solvers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    alpha: f64,
    beta: f64,
    d: f64,
    sa: f64,
    sb: f64,
    ca: f64,
    cb: f64,
    c_ab: f64,
    d_sq: f64,
}

impl Frame {
    pub(crate) fn new(from: &Configuration, to: &Configuration, radius: f64) -> Self {
        let delta = to.position - from.position;
        // hypot keeps tiny offsets nonzero and huge ones finite.
        let d = delta.x.hypot(delta.y) / radius;
        // Coincident positions: the baseline direction is arbitrary, use +x.
        let theta = if d > 0.0 {
            mod2pi(delta.y.atan2(delta.x))
        } else {
            0.0
        };
        let alpha = mod2pi(from.heading - theta);
        let beta = mod2pi(to.heading - theta);
        Self {
            alpha,
            beta,
            d,
            sa: alpha.sin(),
            sb: beta.sin(),
            ca: alpha.cos(),
            cb: beta.cos(),
            c_ab: (alpha - beta).cos(),
            d_sq: d * d,
        }
    }

    pub(crate) fn solve(&self, word: PathWord) -> Option<[f64; 3]> {
        match word {
            PathWord::Lsl => Some(self.lsl()),
            PathWord::Rsr => Some(self.rsr()),
            PathWord::Lsr => self.lsr().filter(|p| self.admissible(p)),
            PathWord::Rsl => self.rsl().filter(|p| self.admissible(p)),
            PathWord::Rlr => self.rlr().filter(|p| self.admissible(p)),
            PathWord::Lrl => self.lrl().filter(|p| self.admissible(p)),
        }
    }

    // No path between distinct poses is empty or shorter than the chord.
    // Results below either bound come from cancellation in the closed forms.
    fn admissible(&self, params: &[f64; 3]) -> bool {
        let len: f64 = params.iter().sum();
        len > 0.0 && len >= self.d * (1.0 - CHORD_SLACK)
    }

    // Same-side CSC words always exist: the squared straight length is a sum
    // of squares, so it is computed as one.
    pub(crate) fn lsl(&self) -> [f64; 3] {
        let x = self.d + self.sa - self.sb;
        let y = self.cb - self.ca;
        let tmp = y.atan2(x);
        [mod2pi(tmp - self.alpha), x.hypot(y), mod2pi(self.beta - tmp)]
    }

    fn rsr(&self) -> [f64; 3] {
        let x = self.d - self.sa + self.sb;
        let y = self.ca - self.cb;
        let tmp = y.atan2(x);
        [mod2pi(self.alpha - tmp), x.hypot(y), mod2pi(tmp - self.beta)]
    }

    fn lsr(&self) -> Option<[f64; 3]> {
        let p_sq =
            -2.0 + self.d_sq + 2.0 * self.c_ab + 2.0 * self.d * (self.sa + self.sb);
        let p = clamped_sqrt(p_sq)?;
        let tmp = (-self.ca - self.cb).atan2(self.d + self.sa + self.sb) - (-2.0f64).atan2(p);
        Some([mod2pi(tmp - self.alpha), p, mod2pi(tmp - self.beta)])
    }

    fn rsl(&self) -> Option<[f64; 3]> {
        let p_sq =
            -2.0 + self.d_sq + 2.0 * self.c_ab - 2.0 * self.d * (self.sa + self.sb);
        let p = clamped_sqrt(p_sq)?;
        let tmp = (self.ca + self.cb).atan2(self.d - self.sa - self.sb) - 2.0f64.atan2(p);
        Some([mod2pi(self.alpha - tmp), p, mod2pi(self.beta - tmp)])
    }

    fn rlr(&self) -> Option<[f64; 3]> {
        let c = (6.0 - self.d_sq + 2.0 * self.c_ab + 2.0 * self.d * (self.sa - self.sb)) / 8.0;
        let c = clamped_cos(c)?;
        let phi = (self.ca - self.cb).atan2(self.d - self.sa + self.sb);
        let p = TAU - c.acos();
        let t = mod2pi(self.alpha - phi + mod2pi(p / 2.0));
        let q = mod2pi(self.alpha - self.beta - t + p);
        Some([t, p, q])
    }

    fn lrl(&self) -> Option<[f64; 3]> {
        let c = (6.0 - self.d_sq + 2.0 * self.c_ab + 2.0 * self.d * (self.sb - self.sa)) / 8.0;
        let c = clamped_cos(c)?;
        let phi = (self.ca - self.cb).atan2(self.d + self.sa - self.sb);
        let p = TAU - c.acos();
        let t = mod2pi(-self.alpha - phi + p / 2.0);
        let q = mod2pi(self.beta - self.alpha - t + p);
        Some([t, p, q])
    }
}

#[inline]
fn clamped_sqrt(v: f64) -> Option<f64> {
    // NaN from overflowing terms must not pass as a tangent.
    if !(v >= -FEAS_EPS) {
        None
    } else {
        Some(v.max(0.0).sqrt())
    }
}

#[inline]
fn clamped_cos(c: f64) -> Option<f64> {
    if !(c.abs() <= 1.0 + FEAS_EPS) {
        None
    } else {
        Some(c.clamp(-1.0, 1.0))
    }
}
