//! The export boundary: durable representations of a finished tree.
//!
//! The core hands over a finalized [`FaultTree`](crate::graph::FaultTree)
//! and retains no further reference; everything about file formats and
//! layout lives on this side of the boundary.
pub mod dot;
pub mod json;

use crate::error::GeneratorError;
use crate::graph::FaultTree;
use std::path::PathBuf;

pub use dot::DotExporter;
pub use json::JsonExporter;

/// Writes one finished, finalized tree somewhere durable.
pub trait Exporter {
    /// Returns the path of the written artifact.
    fn export(&self, tree: &FaultTree) -> Result<PathBuf, GeneratorError>;
}
