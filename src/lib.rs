//! # jdepgraph
//!
//! Turn `jdeps` reports into a normalized dependency graph.
//!
//! Three report dialects are understood:
//!
//! - **package**: the default `jdeps` output, one block per source package
//!   with indented `-> destination` lines
//! - **class**: `jdeps -verbose:class`, one `Source -> Destination` per line
//! - **jar**: `jdeps -summary`, one `a.jar -> b.jar` per line
//!
//! All of them reduce to a [`DependencyGraph`] mapping each source to its set
//! of destinations, which can be written as an edge list or JSON, or loaded
//! into a property-graph store through the [`loader`] module.

pub mod core;
pub mod error;
pub mod formatters;
pub mod loader;
pub mod logging;
pub mod parsers;

pub use crate::core::{extract_graph, DependencyExtractor, DependencyGraph, Dialect};
pub use crate::error::{JdepsError, Result};
pub use crate::formatters::OutputFormat;
