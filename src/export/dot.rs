//! Graphviz DOT rendering of a finished tree.
//!
//! Emits the layout source the `dot` engine consumes instead of a
//! rasterized image. Node fill colors follow the dataset convention:
//! top event red, gates orange, basic events green.

use super::Exporter;
use crate::error::GeneratorError;
use crate::graph::{FaultTree, NodeType};
use petgraph::dot::{Config, Dot};
use std::fs;
use std::path::{Path, PathBuf};

fn node_color(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Top => "red",
        NodeType::Intermediate => "orange",
        NodeType::Leaf => "green",
    }
}

/// Writes `visualizations/model_<id>.dot` under the dataset directory.
#[derive(Debug, Clone)]
pub struct DotExporter {
    dir: PathBuf,
}

impl DotExporter {
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dataset_dir.into().join("visualizations"),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn dot_source(tree: &FaultTree) -> String {
        // Labels show the run-wide node id, not petgraph's local index.
        format!(
            "{:?}",
            Dot::with_attr_getters(
                tree.petgraph(),
                &[Config::EdgeNoLabel, Config::NodeNoLabel],
                &|_, _| String::new(),
                &|_, (index, attrs)| {
                    format!(
                        "label = \"{}\" style = \"filled\" fillcolor = \"{}\"",
                        tree.id_at(index),
                        node_color(attrs.node_type)
                    )
                },
            )
        )
    }
}

impl Exporter for DotExporter {
    fn export(&self, tree: &FaultTree) -> Result<PathBuf, GeneratorError> {
        let metadata = tree.metadata().ok_or(GeneratorError::Unfinalized)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("model_{}.dot", metadata.model_id));
        fs::write(&path, Self::dot_source(tree))?;
        Ok(path)
    }
}
