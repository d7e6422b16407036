//! The `Configuration` value type.

use nalgebra::Vector2;

use super::util::mod2pi;
use crate::error::{Error, Result};

/// Oriented pose: planar position plus heading (radians, CCW from +x).
///
/// Constructors normalize the heading to `[0, 2π)`. Values are never mutated
/// in place by the tour constructor; the current pose is always a copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    pub position: Vector2<f64>,
    pub heading: f64,
}

impl Configuration {
    #[inline]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
            heading: mod2pi(heading),
        }
    }

    #[inline]
    pub fn from_position(position: Vector2<f64>, heading: f64) -> Self {
        Self {
            position,
            heading: mod2pi(heading),
        }
    }

    /// `(0, 0)` facing +x.
    #[inline]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite() && self.heading.is_finite()
    }

    /// `InvalidInput` unless all three components are finite.
    pub fn validate(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::invalid_input(format!(
                "non-finite configuration ({}, {}, {})",
                self.position.x, self.position.y, self.heading
            )))
        }
    }

    /// Exact equality of positions and of normalized headings.
    #[inline]
    pub fn same_pose(&self, other: &Configuration) -> bool {
        self.position == other.position && mod2pi(self.heading) == mod2pi(other.heading)
    }

    /// Euclidean distance between the two positions (headings ignored).
    #[inline]
    pub fn distance(&self, other: &Configuration) -> f64 {
        let delta = other.position - self.position;
        delta.x.hypot(delta.y)
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.heading.cos(), self.heading.sin())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::origin()
    }
}
