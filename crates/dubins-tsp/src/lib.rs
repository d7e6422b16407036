//! Core algorithms: Dubins distances and greedy tours over oriented poses.
//!
//! Layout
//! - `pose`: oriented 2D configurations, angle helpers, random instances.
//! - `dubins`: shortest curvature-constrained paths (six canonical words).
//! - `metric`: cost models consumed by the tour constructor.
//! - `tour`: candidate set and the nearest-neighbor ATSP heuristic.
//!
//! API Policy
//! - Callers outside this workspace should go through `api` or `prelude`.
//!   Module paths may move between versions.

pub mod api;
pub mod dubins;
pub mod error;
pub mod metric;
pub mod pose;
pub mod tour;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dubins::{cost, shortest_path, DubinsPath, PathWord};
    pub use crate::error::{Error, Result};
    pub use crate::metric::{CostModel, DubinsMetric, EuclideanMetric, MetricKind};
    pub use crate::pose::rand::{draw_sites, ReplayToken, SiteCfg};
    pub use crate::pose::Configuration;
    pub use crate::tour::{
        build_tour, CandidateSet, NearestNeighbor, Node, Site, Tour, TourCfg, TourLog, TracingLog,
    };
    pub use nalgebra::Vector2 as Vec2;
}
