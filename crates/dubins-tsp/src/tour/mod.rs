//! Greedy tour construction over oriented sites (nearest-neighbor ATSP).
//!
//! Purpose
//! - Visit every site exactly once, starting from a fixed pose and returning
//!   to a fixed pose, always moving to the cheapest unvisited site next.
//! - Costs come from a `CostModel`, so the same loop runs with the Dubins
//!   oracle or with straight-line distances.
//!
//! Structure
//! - `types`: the `Site` capability, `Node`, `Tour`, `TourCfg`.
//! - `candidates`: the shrinking set of unvisited sites.
//! - `nearest`: the constructor loop.
//! - `log`: optional logging capability handed to the constructor.
//!
//! The heuristic is greedy and not optimal; there is no improvement phase.

mod candidates;
mod log;
mod nearest;
mod types;

pub use candidates::CandidateSet;
pub use log::{TourLog, TracingLog};
pub use nearest::{build_tour, NearestNeighbor};
pub use types::{Node, Site, Tour, TourCfg};
