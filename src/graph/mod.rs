//! Defines the core data structures of a generated fault tree.
pub mod fault_tree;
pub mod metadata;
pub mod node;

// Re-export key types for convenient access
pub use fault_tree::{FaultTree, GateTally, NodeTally};
pub use metadata::TreeMetadata;
pub use node::{GateType, NodeAttributes, NodeId, NodeType, PROBABILITY_NOT_APPLICABLE};
