//! Oriented 2D poses ("configurations") and angle helpers.
//!
//! Purpose
//! - One small `Copy` value type, `Configuration`, that every distance query
//!   and every tour step passes around.
//! - Headings are radians, stored normalized to `[0, 2π)` by the constructors.
//!
//! Code cross-refs: `dubins::shortest_path`, `metric::CostModel`, `tour::Site`.

pub mod rand;
mod types;
mod util;

pub use types::Configuration;
pub use util::{mod2pi, wrap_pi};

#[cfg(test)]
mod tests;
