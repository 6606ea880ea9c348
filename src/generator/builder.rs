//! The recursive tree construction algorithm.

use super::factory::NodeFactory;
use super::GeneratorConfig;
use crate::error::GeneratorError;
use crate::graph::{FaultTree, NodeId, NodeType};
use rand::Rng;

/// Grows a subtree under a parent gate by recursive descent.
///
/// Per call: stop at the depth cap, draw a fan-out from
/// `[min_children, max_num_children]`, then decide each child's type
/// independently. The chance of spawning another gate decays linearly
/// from 1.0 at the root to 0 at the cap, so trees get leaf-heavy as they
/// deepen instead of always filling to maximal depth.
pub(crate) struct TreeBuilder<'a, R: Rng> {
    pub config: &'a GeneratorConfig,
    pub factory: &'a mut NodeFactory,
    pub rng: &'a mut R,
}

impl<R: Rng> TreeBuilder<'_, R> {
    /// Creates the children of `parent` (itself at `current_depth`) and
    /// recurses into the intermediate ones.
    ///
    /// Children are created depth-first in draw order, which fixes the
    /// identifier assignment order observable in the dataset.
    pub fn build_subtree(
        &mut self,
        tree: &mut FaultTree,
        parent: NodeId,
        current_depth: u32,
    ) -> Result<(), GeneratorError> {
        if current_depth >= self.config.max_depth {
            return Ok(());
        }

        let num_children = self
            .rng
            .random_range(self.config.min_children..=self.config.max_num_children);

        for _ in 0..num_children {
            // The decay formula is evaluated at the parent's depth, and the
            // last generation before the cap is forced to leaves. At
            // max_depth = 1 both rules coincide: every root child is a leaf.
            let is_intermediate = if current_depth == self.config.max_depth - 1 {
                false
            } else {
                let threshold = 1.0 - current_depth as f64 / self.config.max_depth as f64;
                self.rng.random::<f64>() < threshold
            };

            let node_type = if is_intermediate {
                NodeType::Intermediate
            } else {
                NodeType::Leaf
            };
            let child = self.factory.create_node(tree, self.rng, node_type, None);
            tree.add_edge(child, parent)?;

            if is_intermediate {
                self.build_subtree(tree, child, current_depth + 1)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sampler::LeafProbabilitySampler;
    use crate::graph::{GateType, NodeAttributes};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;
    use std::collections::HashMap;

    fn build(config: &GeneratorConfig, seed: u64) -> FaultTree {
        let mut tree = FaultTree::new();
        let mut factory = NodeFactory::new(0, LeafProbabilitySampler::default());
        let mut rng = StdRng::seed_from_u64(seed);
        let top = factory.create_node(&mut tree, &mut rng, NodeType::Top, None);
        TreeBuilder {
            config,
            factory: &mut factory,
            rng: &mut rng,
        }
        .build_subtree(&mut tree, top, 0)
        .unwrap();
        tree
    }

    /// Depth of every node, walking child→parent edges up from the root.
    fn depths(tree: &FaultTree) -> HashMap<NodeId, u32> {
        let parent_of: HashMap<NodeId, NodeId> = tree.edges().collect();
        tree.nodes()
            .map(|(id, _)| {
                let mut depth = 0;
                let mut cursor = id;
                while let Some(&parent) = parent_of.get(&cursor) {
                    cursor = parent;
                    depth += 1;
                }
                (id, depth)
            })
            .collect()
    }

    fn config(max_num_children: u32, min_children: u32, max_depth: u32) -> GeneratorConfig {
        GeneratorConfig {
            max_num_children,
            min_children,
            max_depth,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn zero_max_depth_yields_only_the_top_event() {
        let tree = build(&config(3, 2, 0), 11);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn depth_one_forces_exactly_leaf_children() {
        // {max=2, min=2, max_depth=1}: always 1 top + 2 leaves, 2 edges.
        for seed in 0..20 {
            let tree = build(&config(2, 2, 1), seed);
            assert_eq!(tree.node_count(), 3);
            assert_eq!(tree.edge_count(), 2);
            let leaves = tree
                .nodes()
                .filter(|(_, a)| a.node_type == NodeType::Leaf)
                .count();
            assert_eq!(leaves, 2);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn depth_never_exceeds_the_cap(#[case] max_depth: u32) {
        for seed in 0..10 {
            let tree = build(&config(3, 2, max_depth), seed);
            let deepest = depths(&tree).into_values().max().unwrap();
            assert!(deepest <= max_depth, "depth {deepest} > cap {max_depth}");
        }
    }

    #[test]
    fn fixed_fanout_gives_every_gate_exactly_k_children() {
        let k = 3;
        let tree = build(&config(k, k, 3), 9);
        let mut children: HashMap<NodeId, u32> = HashMap::new();
        for (_, parent) in tree.edges() {
            *children.entry(parent).or_insert(0) += 1;
        }
        for (id, attrs) in tree.nodes() {
            if attrs.node_type != NodeType::Leaf {
                assert_eq!(children.get(&id), Some(&k), "gate {id}");
            }
        }
    }

    #[test]
    fn identifier_assignment_is_gapless_from_the_counter() {
        let tree = build(&config(3, 2, 4), 2);
        let ids: Vec<u64> = tree.nodes().map(|(id, _)| id.0).collect();
        let expected: Vec<u64> = (1..=tree.node_count() as u64).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn every_non_root_node_has_exactly_one_parent() {
        let tree = build(&config(3, 2, 4), 17);
        let parent_of: HashMap<NodeId, NodeId> = tree.edges().collect();
        // A HashMap would hide duplicate children; the edge count proves
        // there were none.
        assert_eq!(parent_of.len(), tree.edge_count());
        assert_eq!(tree.edge_count(), tree.node_count() - 1);
        let root = tree.nodes().next().unwrap().0;
        for (id, _) in tree.nodes() {
            assert_eq!(parent_of.contains_key(&id), id != root);
        }
    }

    #[test]
    fn leaf_and_gate_invariants_hold_everywhere() {
        let tree = build(&config(3, 2, 4), 23);
        let well_formed = |attrs: &NodeAttributes| {
            if attrs.node_type == NodeType::Leaf {
                attrs.gate_type == GateType::None
                    && attrs.node_probability > 0.0
                    && attrs.node_probability < 1.0
            } else {
                attrs.gate_type != GateType::None && attrs.node_probability == -1.0
            }
        };
        assert!(tree.nodes().all(|(_, attrs)| well_formed(attrs)));
    }
}
