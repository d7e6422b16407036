//! Cost models consumed by the tour constructor.
//!
//! `DubinsMetric` is the curvature-constrained oracle and the default.
//! `EuclideanMetric` ignores headings and measures straight-line distance;
//! it is the heading-blind baseline.

use std::fmt;
use std::str::FromStr;

use crate::dubins;
use crate::error::{Error, Result};
use crate::pose::Configuration;

/// Directed travel cost between two poses.
pub trait CostModel {
    fn cost(&self, from: &Configuration, to: &Configuration) -> f64;
    fn name(&self) -> &'static str;
}

impl<M: CostModel + ?Sized> CostModel for &M {
    fn cost(&self, from: &Configuration, to: &Configuration) -> f64 {
        (**self).cost(from, to)
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<M: CostModel + ?Sized> CostModel for Box<M> {
    fn cost(&self, from: &Configuration, to: &Configuration) -> f64 {
        (**self).cost(from, to)
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Dubins path length with a fixed minimum turning radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DubinsMetric {
    radius: f64,
}

impl DubinsMetric {
    /// `InvalidInput` unless `radius` is finite and strictly positive.
    pub fn new(radius: f64) -> Result<Self> {
        if radius.is_finite() && radius > 0.0 {
            Ok(Self { radius })
        } else {
            Err(Error::invalid_input(format!(
                "turning radius must be finite and > 0, got {radius}"
            )))
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl CostModel for DubinsMetric {
    #[inline]
    fn cost(&self, from: &Configuration, to: &Configuration) -> f64 {
        dubins::cost(from, to, self.radius)
    }
    fn name(&self) -> &'static str {
        "dubins"
    }
}

/// Straight-line distance between positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EuclideanMetric;

impl CostModel for EuclideanMetric {
    #[inline]
    fn cost(&self, from: &Configuration, to: &Configuration) -> f64 {
        from.distance(to)
    }
    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Named selection of a cost model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetricKind {
    #[default]
    Dubins,
    Euclidean,
}

impl MetricKind {
    /// Instantiate the model; the radius only matters for `Dubins`.
    pub fn build(self, radius: f64) -> Result<Box<dyn CostModel>> {
        Ok(match self {
            MetricKind::Dubins => Box::new(DubinsMetric::new(radius)?),
            MetricKind::Euclidean => Box::new(EuclideanMetric),
        })
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetricKind::Dubins => "dubins",
            MetricKind::Euclidean => "euclidean",
        })
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dubins" => Ok(MetricKind::Dubins),
            "euclidean" | "euclid" => Ok(MetricKind::Euclidean),
            other => Err(Error::invalid_input(format!("unknown metric '{other}'"))),
        }
    }
}
