//! The generation core: configuration, node factory, tree builder, and
//! the per-graph finalization pass.
pub mod builder;
pub mod factory;
pub mod sampler;

use crate::error::GeneratorError;
use crate::graph::{FaultTree, NodeType, TreeMetadata};
use crate::run_config::RunCounters;
use builder::TreeBuilder;
use factory::NodeFactory;
use rand::Rng;
use sampler::LeafProbabilitySampler;
use tracing::debug;

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Upper bound of the per-gate fan-out range (inclusive).
    pub max_num_children: u32,
    /// Lower bound of the per-gate fan-out range (inclusive, >= 1).
    pub min_children: u32,
    /// Maximum tree depth; the root sits at depth 0.
    pub max_depth: u32,
    /// Number of trees to generate in this run.
    pub num_graphs: u32,
    /// Bias strength of the leaf-probability sampler.
    pub probability_exponent: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_num_children: 3,
            min_children: 2,
            max_depth: 4,
            num_graphs: 1,
            probability_exponent: LeafProbabilitySampler::DEFAULT_EXPONENT,
        }
    }
}

impl GeneratorConfig {
    /// Rejects invalid parameter combinations before any node exists.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.min_children < 1 {
            return Err(GeneratorError::MinChildrenTooSmall(self.min_children));
        }
        if self.min_children > self.max_num_children {
            return Err(GeneratorError::ChildRangeInverted {
                min: self.min_children,
                max: self.max_num_children,
            });
        }
        if self.num_graphs < 1 {
            return Err(GeneratorError::NoGraphsRequested);
        }
        // Exponent 0 would make every leaf probability u^0 = 1.0 and a
        // negative one pushes them past 1, breaking the (0,1) invariant.
        if self.probability_exponent < 1 {
            return Err(GeneratorError::ExponentTooSmall(self.probability_exponent));
        }
        Ok(())
    }
}

/// Generates fault trees one at a time, threading the run-wide counters
/// through explicitly so a caller can persist them after every graph.
pub struct FaultTreeGenerator<R: Rng> {
    config: GeneratorConfig,
    factory: NodeFactory,
    model_counter: u64,
    rng: R,
}

impl<R: Rng> FaultTreeGenerator<R> {
    /// Validates the configuration and seeds the id/model counters from
    /// the persisted run state.
    pub fn new(
        config: GeneratorConfig,
        counters: RunCounters,
        rng: R,
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        let sampler = LeafProbabilitySampler::new(config.probability_exponent);
        Ok(Self {
            factory: NodeFactory::new(counters.num_nodes, sampler),
            model_counter: counters.num_models,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Counter state to persist; advances with every generated graph.
    pub fn counters(&self) -> RunCounters {
        RunCounters {
            num_models: self.model_counter,
            num_nodes: self.factory.counter(),
        }
    }

    /// Builds one finished tree: top event, recursive descent, metadata,
    /// node features. Ownership of the tree passes to the caller.
    pub fn generate(&mut self) -> Result<FaultTree, GeneratorError> {
        let mut tree = FaultTree::new();
        let top = self
            .factory
            .create_node(&mut tree, &mut self.rng, NodeType::Top, None);
        TreeBuilder {
            config: &self.config,
            factory: &mut self.factory,
            rng: &mut self.rng,
        }
        .build_subtree(&mut tree, top, 0)?;

        self.model_counter += 1;
        finalize(&mut tree, self.model_counter);
        debug!(
            model_id = self.model_counter,
            nodes = tree.node_count(),
            edges = tree.edge_count(),
            "built fault tree"
        );
        Ok(tree)
    }
}

/// Attaches graph-level metadata and fills per-node degree features.
///
/// Idempotent: re-running on an unmodified tree writes identical values.
pub fn finalize(tree: &mut FaultTree, model_id: u64) {
    let (nodes, gates) = tree.tally();
    tree.attach_metadata(TreeMetadata {
        model_id,
        creation_date: chrono::Local::now().date_naive().to_string(),
        num_nodes: tree.node_count() as u64,
        num_top_nodes: nodes.top,
        num_intermediate_nodes: nodes.intermediate,
        num_leaf_nodes: nodes.leaf,
        num_and_gates: gates.and,
        num_or_gates: gates.or,
    });
    tree.compute_node_features();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn generator(config: GeneratorConfig, counters: RunCounters) -> FaultTreeGenerator<StdRng> {
        FaultTreeGenerator::new(config, counters, StdRng::seed_from_u64(99)).unwrap()
    }

    #[rstest]
    #[case(GeneratorConfig { min_children: 0, ..GeneratorConfig::default() })]
    #[case(GeneratorConfig { min_children: 4, max_num_children: 3, ..GeneratorConfig::default() })]
    #[case(GeneratorConfig { num_graphs: 0, ..GeneratorConfig::default() })]
    #[case(GeneratorConfig { probability_exponent: 0, ..GeneratorConfig::default() })]
    #[case(GeneratorConfig { probability_exponent: -3, ..GeneratorConfig::default() })]
    fn invalid_configurations_are_rejected_up_front(#[case] config: GeneratorConfig) {
        let err = FaultTreeGenerator::new(
            config,
            RunCounters::default(),
            StdRng::seed_from_u64(0),
        );
        assert!(err.is_err());
    }

    #[test]
    fn degenerate_fanout_range_is_a_config_error() {
        let config = GeneratorConfig {
            max_num_children: 0,
            min_children: 1,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::ChildRangeInverted { min: 1, max: 0 })
        ));
    }

    #[test]
    fn nonpositive_exponent_never_reaches_generation() {
        // u^0 = 1.0 for every draw, so an accepted exponent of 0 would
        // hand every leaf a probability outside (0,1); the constructor
        // must refuse it before any node exists.
        let config = GeneratorConfig {
            probability_exponent: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::ExponentTooSmall(0))
        ));
        assert!(FaultTreeGenerator::new(
            config,
            RunCounters::default(),
            StdRng::seed_from_u64(0)
        )
        .is_err());
    }

    #[test]
    fn metadata_counts_are_consistent() {
        let mut generator = generator(GeneratorConfig::default(), RunCounters::default());
        for _ in 0..5 {
            let tree = generator.generate().unwrap();
            let meta = tree.metadata().unwrap().clone();
            assert_eq!(meta.num_top_nodes, 1);
            assert_eq!(meta.num_nodes, tree.node_count() as u64);
            assert_eq!(
                meta.num_intermediate_nodes + meta.num_leaf_nodes + 1,
                meta.num_nodes
            );
            // Every gate node (top included) carries an And or an Or.
            assert_eq!(
                meta.num_and_gates + meta.num_or_gates,
                meta.num_intermediate_nodes + 1
            );
        }
    }

    #[test]
    fn counters_advance_per_graph_and_ids_are_gapless() {
        let start = RunCounters {
            num_models: 3,
            num_nodes: 120,
        };
        let mut generator = generator(GeneratorConfig::default(), start);

        let first = generator.generate().unwrap();
        let after_first = generator.counters();
        assert_eq!(after_first.num_models, 4);
        assert_eq!(first.metadata().unwrap().model_id, 4);
        assert_eq!(
            after_first.num_nodes,
            120 + first.node_count() as u64
        );
        let ids: Vec<u64> = first.nodes().map(|(id, _)| id.0).collect();
        let expected: Vec<u64> = (121..=after_first.num_nodes).collect();
        assert_eq!(ids, expected);

        // The next graph picks up exactly where the first stopped.
        let second = generator.generate().unwrap();
        assert_eq!(second.metadata().unwrap().model_id, 5);
        let first_id = second.nodes().next().unwrap().0;
        assert_eq!(first_id.0, after_first.num_nodes + 1);
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut generator = generator(GeneratorConfig::default(), RunCounters::default());
        let mut tree = generator.generate().unwrap();
        let metadata = tree.metadata().unwrap().clone();
        let features: Vec<_> = tree.nodes().map(|(_, a)| a.clone()).collect();

        finalize(&mut tree, metadata.model_id);
        assert_eq!(tree.metadata().unwrap(), &metadata);
        let again: Vec<_> = tree.nodes().map(|(_, a)| a.clone()).collect();
        assert_eq!(features, again);
    }

    #[test]
    fn single_node_tree_when_depth_is_zero() {
        let config = GeneratorConfig {
            max_depth: 0,
            ..GeneratorConfig::default()
        };
        let tree = generator(config, RunCounters::default()).generate().unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.edge_count(), 0);
        let meta = tree.metadata().unwrap();
        assert_eq!(meta.num_nodes, 1);
        assert_eq!(meta.num_leaf_nodes, 0);
        // The lone top event still carries a gate.
        assert_eq!(meta.num_and_gates + meta.num_or_gates, 1);
    }
}
