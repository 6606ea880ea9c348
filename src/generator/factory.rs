//! Node creation: run-wide id allocation plus attribute assignment.

use super::sampler::LeafProbabilitySampler;
use crate::graph::{
    FaultTree, GateType, NodeAttributes, NodeId, NodeType, PROBABILITY_NOT_APPLICABLE,
};
use rand::Rng;

/// Allocates node identifiers from the run-wide counter and registers
/// each node with its attributes in the graph store.
///
/// The counter is seeded from the persisted run counters at the start of
/// a run, so identifiers never collide across graphs or across runs.
#[derive(Debug)]
pub struct NodeFactory {
    counter: u64,
    sampler: LeafProbabilitySampler,
}

impl NodeFactory {
    pub fn new(counter: u64, sampler: LeafProbabilitySampler) -> Self {
        Self { counter, sampler }
    }

    /// Creates a node and returns its id.
    ///
    /// An unset gate becomes `GateType::None` for leaves and a uniformly
    /// random `And`/`Or` for everything else. Leaves always get a freshly
    /// sampled probability; non-leaves carry the sentinel.
    pub fn create_node<R: Rng>(
        &mut self,
        tree: &mut FaultTree,
        rng: &mut R,
        node_type: NodeType,
        gate_type: Option<GateType>,
    ) -> NodeId {
        let gate_type = gate_type.unwrap_or_else(|| match node_type {
            NodeType::Leaf => GateType::None,
            _ => {
                if rng.random::<bool>() {
                    GateType::And
                } else {
                    GateType::Or
                }
            }
        });
        let probability = match node_type {
            NodeType::Leaf => self.sampler.sample(rng),
            _ => PROBABILITY_NOT_APPLICABLE,
        };

        let id = NodeId(self.counter + 1);
        self.counter += 1;
        tree.add_node(id, NodeAttributes::new(node_type, gate_type, probability));
        id
    }

    /// Current value of the run-wide node counter.
    pub fn counter(&self) -> u64 {
        self.counter
    }
}
