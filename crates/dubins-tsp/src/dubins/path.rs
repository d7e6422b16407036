//! A concrete Dubins path: start pose, word, segment parameters, radius.

use nalgebra::Vector2;

use super::words::{PathWord, SegmentKind};
use crate::pose::{mod2pi, Configuration};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DubinsPath {
    start: Configuration,
    word: PathWord,
    /// Normalized parameters (angles in radians, straight length over radius).
    params: [f64; 3],
    radius: f64,
}

impl DubinsPath {
    pub(crate) fn new(start: Configuration, word: PathWord, params: [f64; 3], radius: f64) -> Self {
        Self {
            start,
            word,
            params,
            radius,
        }
    }

    /// Zero-length path between identical poses. Reported as `LSL` with three
    /// empty segments.
    pub(crate) fn stationary(start: Configuration, radius: f64) -> Self {
        Self::new(start, PathWord::Lsl, [0.0; 3], radius)
    }

    #[inline]
    pub fn word(&self) -> PathWord {
        self.word
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn start(&self) -> Configuration {
        self.start
    }

    /// Segment lengths in world units.
    pub fn segments(&self) -> [f64; 3] {
        self.params.map(|p| p * self.radius)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.params[0] + self.params[1] + self.params[2]) * self.radius
    }

    /// Pose after travelling arc length `s` along the path (clamped to
    /// `[0, length]`).
    pub fn sample(&self, s: f64) -> Configuration {
        let mut t = (s / self.radius).clamp(0.0, self.params.iter().sum::<f64>());
        let kinds = self.word.segments();
        let mut q = (Vector2::zeros(), self.start.heading);
        for (k, (&kind, &param)) in kinds.iter().zip(self.params.iter()).enumerate() {
            let step = if k == 2 { t } else { t.min(param) };
            q = advance(q, kind, step);
            t -= step;
            if t <= 0.0 {
                break;
            }
        }
        let (p, heading) = q;
        Configuration {
            position: self.start.position + p * self.radius,
            heading: mod2pi(heading),
        }
    }

    /// Pose at the end of the path; equals the target up to round-off.
    pub fn endpoint(&self) -> Configuration {
        self.sample(self.length())
    }
}

/// Move along one segment in the unit-radius frame.
fn advance(q: (Vector2<f64>, f64), kind: SegmentKind, t: f64) -> (Vector2<f64>, f64) {
    let (p, h) = q;
    match kind {
        SegmentKind::Left => (
            p + Vector2::new((h + t).sin() - h.sin(), h.cos() - (h + t).cos()),
            h + t,
        ),
        SegmentKind::Right => (
            p + Vector2::new(h.sin() - (h - t).sin(), (h - t).cos() - h.cos()),
            h - t,
        ),
        SegmentKind::Straight => (p + Vector2::new(h.cos(), h.sin()) * t, h),
    }
}
