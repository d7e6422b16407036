//! Sites, tours, and run configuration.

use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::metric::{CostModel, MetricKind};
use crate::pose::Configuration;

/// Anything with a stable identifier and a pose can be toured.
pub trait Site {
    type Id: Clone + Eq + Hash + fmt::Debug;
    fn id(&self) -> Self::Id;
    fn configuration(&self) -> Configuration;
}

/// Plain site record as produced by loaders and the random sampler.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<I> {
    pub id: I,
    pub configuration: Configuration,
}

impl<I> Node<I> {
    pub fn new(id: I, configuration: Configuration) -> Self {
        Self { id, configuration }
    }
}

impl<I: Clone + Eq + Hash + fmt::Debug> Site for Node<I> {
    type Id = I;
    #[inline]
    fn id(&self) -> I {
        self.id.clone()
    }
    #[inline]
    fn configuration(&self) -> Configuration {
        self.configuration
    }
}

/// Visiting order plus costs.
///
/// `legs[k]` is the cost of reaching `stops[k]`; the final entry of `legs` is
/// the closing leg back to the end pose. `total_cost` is the running sum of
/// `legs` in order.
#[derive(Debug)]
pub struct Tour<'a, N> {
    pub stops: Vec<&'a N>,
    pub legs: Vec<f64>,
    pub total_cost: f64,
}

impl<'a, N: Site> Tour<'a, N> {
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn ids(&self) -> Vec<N::Id> {
        self.stops.iter().map(|n| n.id()).collect()
    }

    /// Cost of the leg from the last stop back to the end pose.
    pub fn closing_cost(&self) -> f64 {
        self.legs.last().copied().unwrap_or(0.0)
    }

    /// `"a -> b -> c"`.
    pub fn render(&self) -> String
    where
        N::Id: fmt::Display,
    {
        self.stops
            .iter()
            .map(|n| n.id().to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Parameters of one tour run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourCfg {
    /// Minimum turning radius (Dubins only).
    pub radius: f64,
    pub start: Configuration,
    pub end: Configuration,
    pub metric: MetricKind,
}

impl Default for TourCfg {
    fn default() -> Self {
        // Depart from and return to the origin facing +x.
        Self {
            radius: 1.0,
            start: Configuration::origin(),
            end: Configuration::origin(),
            metric: MetricKind::Dubins,
        }
    }
}

impl TourCfg {
    pub fn cost_model(&self) -> Result<Box<dyn CostModel>> {
        self.metric.build(self.radius)
    }
}
