//! Nearest-neighbor constructor.
//!
//! Loop: scan every remaining site from the current pose, commit the cheapest,
//! drop it from the candidate set, continue from its pose. When the set is
//! empty, add the leg back to the end pose. O(n²) cost evaluations.
//!
//! Tie-break: the scan runs in ascending input order and only a strictly
//! smaller cost replaces the incumbent, so the lowest input index wins among
//! equal costs.

use std::collections::HashSet;

use tracing::Level;

use super::candidates::CandidateSet;
use super::log::TourLog;
use super::types::{Site, Tour};
use crate::error::{Error, Result};
use crate::metric::{CostModel, DubinsMetric};
use crate::pose::Configuration;

/// Greedy tour builder over a cost model.
pub struct NearestNeighbor<'l, M> {
    metric: M,
    log: Option<&'l dyn TourLog>,
}

impl<'l, M: CostModel> NearestNeighbor<'l, M> {
    pub fn new(metric: M) -> Self {
        Self { metric, log: None }
    }

    pub fn with_log(mut self, log: &'l dyn TourLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Build a tour through all `nodes`, departing `start` and closing at `end`.
    ///
    /// Errors: `InvalidInput` for an empty slice, non-finite poses, or
    /// duplicate ids. Nothing is logged or returned on failure beyond the error.
    pub fn build<'a, N: Site>(
        &self,
        nodes: &'a [N],
        start: &Configuration,
        end: &Configuration,
    ) -> Result<Tour<'a, N>> {
        validate(nodes, start, end)?;
        let mut candidates = CandidateSet::new(nodes.len())?;
        self.emit(Level::INFO, || {
            format!(
                "nearest neighbor over {} nodes ({} metric)",
                nodes.len(),
                self.metric.name()
            )
        });

        let mut current = *start;
        let mut total_cost = 0.0;
        let mut stops = Vec::with_capacity(nodes.len());
        let mut legs = Vec::with_capacity(nodes.len() + 1);

        while !candidates.is_empty() {
            let mut best: Option<(usize, f64)> = None;
            for i in candidates.remaining() {
                let c = self.metric.cost(&current, &nodes[i].configuration());
                if best.map_or(true, |(_, b)| c < b) {
                    best = Some((i, c));
                }
            }
            let Some((next, step)) = best else {
                break;
            };
            candidates.remove(next)?;
            let node = &nodes[next];
            stops.push(node);
            legs.push(step);
            total_cost += step;
            current = node.configuration();
            self.emit(Level::DEBUG, || {
                format!(
                    "step {}: {:?} cost {step} (total {total_cost})",
                    stops.len(),
                    node.id()
                )
            });
        }

        let closing = self.metric.cost(&current, end);
        legs.push(closing);
        total_cost += closing;
        self.emit(Level::INFO, || {
            format!("closed tour: return leg {closing}, total cost {total_cost}")
        });

        Ok(Tour {
            stops,
            legs,
            total_cost,
        })
    }

    fn emit(&self, level: Level, message: impl FnOnce() -> String) {
        if let Some(log) = self.log {
            log.log(level, &message());
        }
    }
}

/// Nearest-neighbor tour under the Dubins oracle with turning radius `radius`.
pub fn build_tour<'a, N: Site>(
    nodes: &'a [N],
    start: &Configuration,
    end: &Configuration,
    radius: f64,
) -> Result<Tour<'a, N>> {
    NearestNeighbor::new(DubinsMetric::new(radius)?).build(nodes, start, end)
}

fn validate<N: Site>(nodes: &[N], start: &Configuration, end: &Configuration) -> Result<()> {
    if nodes.is_empty() {
        return Err(Error::invalid_input("empty node set"));
    }
    start.validate()?;
    end.validate()?;
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        let id = node.id();
        if !node.configuration().is_finite() {
            return Err(Error::invalid_input(format!(
                "node {id:?} has a non-finite configuration"
            )));
        }
        if !seen.insert(id.clone()) {
            return Err(Error::invalid_input(format!("duplicate node id {id:?}")));
        }
    }
    Ok(())
}
