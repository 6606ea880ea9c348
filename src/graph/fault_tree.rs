//! The in-progress fault-tree graph: nodes, child→parent edges, and the
//! finalization passes (type/gate tallies, degree features).

use super::metadata::TreeMetadata;
use super::node::{GateType, NodeAttributes, NodeId, NodeType};
use crate::error::GeneratorError;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Per-type node counts from one tally pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeTally {
    pub top: u64,
    pub intermediate: u64,
    pub leaf: u64,
}

/// Per-type gate counts from one tally pass.
///
/// The `none` bucket counts leaves (which carry no gate) and must equal
/// `NodeTally::leaf` for any well-formed tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateTally {
    pub none: u64,
    pub and: u64,
    pub or: u64,
}

/// One generated fault tree.
///
/// Edges are directed child → parent: they point from a cause toward the
/// effect it feeds. Nodes and edges are only ever added, never removed,
/// and both iterate in creation order.
#[derive(Debug, Clone, Default)]
pub struct FaultTree {
    graph: DiGraph<NodeAttributes, ()>,
    /// Run-wide id per node, parallel to petgraph's node indices.
    ids: Vec<NodeId>,
    index_of: HashMap<NodeId, NodeIndex>,
    metadata: Option<TreeMetadata>,
}

impl FaultTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node under a pre-allocated run-wide id.
    pub fn add_node(&mut self, id: NodeId, attrs: NodeAttributes) {
        let index = self.graph.add_node(attrs);
        self.ids.push(id);
        self.index_of.insert(id, index);
    }

    /// Adds a directed edge from a child node to its parent.
    pub fn add_edge(&mut self, child: NodeId, parent: NodeId) -> Result<(), GeneratorError> {
        let child_index = self.index(child)?;
        let parent_index = self.index(parent)?;
        self.graph.add_edge(child_index, parent_index, ());
        Ok(())
    }

    fn index(&self, id: NodeId) -> Result<NodeIndex, GeneratorError> {
        self.index_of
            .get(&id)
            .copied()
            .ok_or(GeneratorError::UnknownNode(id))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes with their attributes, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeAttributes)> + '_ {
        self.graph
            .node_indices()
            .map(|index| (self.ids[index.index()], &self.graph[index]))
    }

    /// `(child, parent)` pairs, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (self.id_at(edge.source()), self.id_at(edge.target())))
    }

    pub fn attributes(&self, id: NodeId) -> Option<&NodeAttributes> {
        self.index_of.get(&id).map(|&index| &self.graph[index])
    }

    pub fn metadata(&self) -> Option<&TreeMetadata> {
        self.metadata.as_ref()
    }

    pub fn attach_metadata(&mut self, metadata: TreeMetadata) {
        self.metadata = Some(metadata);
    }

    /// Tallies nodes by type and gates by kind in a single scan.
    pub fn tally(&self) -> (NodeTally, GateTally) {
        let mut nodes = NodeTally::default();
        let mut gates = GateTally::default();
        for attrs in self.graph.node_weights() {
            match attrs.node_type {
                NodeType::Top => nodes.top += 1,
                NodeType::Intermediate => nodes.intermediate += 1,
                NodeType::Leaf => nodes.leaf += 1,
            }
            match attrs.gate_type {
                GateType::None => gates.none += 1,
                GateType::And => gates.and += 1,
                GateType::Or => gates.or += 1,
            }
        }
        (nodes, gates)
    }

    /// Fills `in_degree`/`out_degree` for every node from the edge set.
    ///
    /// Runs independently of the metadata tally and is idempotent: the
    /// degrees are a pure function of the (immutable-after-build) edges.
    pub fn compute_node_features(&mut self) {
        for index in self.graph.node_indices() {
            let in_degree = self
                .graph
                .edges_directed(index, Direction::Incoming)
                .count() as u32;
            let out_degree = self
                .graph
                .edges_directed(index, Direction::Outgoing)
                .count() as u32;
            let attrs = &mut self.graph[index];
            attrs.in_degree = Some(in_degree);
            attrs.out_degree = Some(out_degree);
        }
    }

    /// Run-wide id of the node at a petgraph index.
    pub fn id_at(&self, index: NodeIndex) -> NodeId {
        self.ids[index.index()]
    }

    /// The underlying petgraph storage, for layout rendering.
    pub fn petgraph(&self) -> &DiGraph<NodeAttributes, ()> {
        &self.graph
    }
}
