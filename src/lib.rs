//! Synthesizes random fault-tree graphs for use as a labeled dataset.
//!
//! A fault tree is a rooted tree whose root is a top event, whose
//! internal nodes are AND/OR gates aggregating causes, and whose leaves
//! are basic events carrying a failure probability. The generator builds
//! trees by bounded recursive descent with depth-biased node typing,
//! finalizes per-tree metadata and degree features, and hands each
//! finished tree to an export boundary (node-link JSON, optional
//! Graphviz DOT).
//!
//! ```no_run
//! use fault_tree_gen::{FaultTreeGenerator, GeneratorConfig, RunCounters};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), fault_tree_gen::GeneratorError> {
//! let mut generator = FaultTreeGenerator::new(
//!     GeneratorConfig::default(),
//!     RunCounters::default(),
//!     StdRng::seed_from_u64(42),
//! )?;
//! let tree = generator.generate()?;
//! assert!(tree.node_count() >= 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod graph;
pub mod run_config;

// Re-export key types for convenient access
pub use error::GeneratorError;
pub use export::{DotExporter, Exporter, JsonExporter};
pub use generator::{FaultTreeGenerator, GeneratorConfig};
pub use graph::{FaultTree, GateType, NodeAttributes, NodeId, NodeType, TreeMetadata};
pub use run_config::{RunConfigFile, RunCounters};
