//! Node-link JSON serialization of a finished tree.
//!
//! The document shape follows the networkx `node_link_data` convention
//! so existing dataset loaders keep working: top-level `directed` /
//! `multigraph` flags, the metadata map under `graph`, node attribute
//! records (creation order, numeric type encodings, trailing `id`), and
//! `links` as `{source, target}` = (child, parent) pairs.

use super::Exporter;
use crate::error::GeneratorError;
use crate::graph::{FaultTree, NodeAttributes};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct NodeRecord<'a> {
    #[serde(flatten)]
    attrs: &'a NodeAttributes,
    id: u64,
}

#[derive(Serialize)]
struct LinkRecord {
    source: u64,
    target: u64,
}

#[derive(Serialize)]
struct NodeLinkDocument<'a> {
    directed: bool,
    multigraph: bool,
    graph: &'a crate::graph::TreeMetadata,
    nodes: Vec<NodeRecord<'a>>,
    links: Vec<LinkRecord>,
}

/// Writes `model_<id>.json` into the dataset directory.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    dir: PathBuf,
}

impl JsonExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Exporter for JsonExporter {
    fn export(&self, tree: &FaultTree) -> Result<PathBuf, GeneratorError> {
        let metadata = tree.metadata().ok_or(GeneratorError::Unfinalized)?;

        let document = NodeLinkDocument {
            directed: true,
            multigraph: false,
            graph: metadata,
            nodes: tree
                .nodes()
                .map(|(id, attrs)| NodeRecord { attrs, id: id.0 })
                .collect(),
            links: tree
                .edges()
                .map(|(child, parent)| LinkRecord {
                    source: child.0,
                    target: parent.0,
                })
                .collect(),
        };

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("model_{}.json", metadata.model_id));
        let json = serde_json::to_string_pretty(&document).map_err(|source| {
            GeneratorError::Serialize {
                model_id: metadata.model_id,
                source,
            }
        })?;
        fs::write(&path, json)?;
        Ok(path)
    }
}
