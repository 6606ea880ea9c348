//! Defines node identity and the per-node attribute set of a fault tree.

use serde::{Serialize, Serializer};
use std::fmt;

/// Sentinel probability for nodes that are not basic events.
///
/// Kept numeric (rather than an `Option`) so exported records match the
/// dataset encoding consumed downstream; the `NodeType`/`GateType` enums
/// carry the leaf/gate invariant instead.
pub const PROBABILITY_NOT_APPLICABLE: f64 = -1.0;

/// A unique, stable identifier for a node.
///
/// Identifiers are allocated from a run-wide counter, so they are unique
/// across every graph generated in the same run, strictly increasing in
/// creation order, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The structural role of a node in the fault tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// The root: the overall failure being analyzed. Exactly one per tree.
    Top,
    /// An internal gate aggregating child causes.
    Intermediate,
    /// A basic event with an intrinsic failure probability.
    Leaf,
}

impl NodeType {
    /// Numeric dataset encoding: 0 = top, 1 = intermediate, 2 = leaf.
    pub fn code(self) -> u8 {
        match self {
            NodeType::Top => 0,
            NodeType::Intermediate => 1,
            NodeType::Leaf => 2,
        }
    }
}

impl Serialize for NodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// The logic with which a gate combines its children.
///
/// `None` is the leaf bucket: a basic event has no gate, and the
/// invariant `gate_type == None` iff `node_type == Leaf` holds for every
/// node the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateType {
    None,
    And,
    Or,
}

impl GateType {
    /// Numeric dataset encoding: 0 = none, 1 = and, 2 = or.
    pub fn code(self) -> u8 {
        match self {
            GateType::None => 0,
            GateType::And => 1,
            GateType::Or => 2,
        }
    }
}

impl Serialize for GateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// The attribute record attached to every node.
///
/// `in_degree`/`out_degree` are derived features: they stay `None` during
/// construction and are filled by the node-features pass once the tree is
/// complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeAttributes {
    pub node_type: NodeType,
    pub gate_type: GateType,
    pub node_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_degree: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_degree: Option<u32>,
}

impl NodeAttributes {
    pub fn new(node_type: NodeType, gate_type: GateType, node_probability: f64) -> Self {
        Self {
            node_type,
            gate_type,
            node_probability,
            in_degree: None,
            out_degree: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.node_type == NodeType::Leaf
    }
}
