//! Curated API surface for the CLI and experiments.
//!
//! Prefer these re-exports over deep module paths; they are kept stable
//! across internal reorganizations.

// Poses
pub use crate::pose::rand::{draw_sites, ReplayToken, SiteCfg};
pub use crate::pose::{mod2pi, wrap_pi, Configuration};
// Distance oracle
pub use crate::dubins::{cost as dubins_cost, shortest_path, word_length, DubinsPath, PathWord};
// Cost models
pub use crate::metric::{CostModel, DubinsMetric, EuclideanMetric, MetricKind};
// Tour construction
pub use crate::tour::{
    build_tour, CandidateSet, NearestNeighbor, Node, Site, Tour, TourCfg, TourLog, TracingLog,
};
// Errors
pub use crate::error::{Error, Result};
