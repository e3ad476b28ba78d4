//! Immutable generator configuration and its two sources: positional
//! command-line arguments and a JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use blockgraph_core::GraphGeneratorBuilder;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{Span, field, instrument};

use super::commands::{CliError, GenerateArgs};

/// Canonical spellings of the document keys.
const FIELD_NAMES: [&str; 8] = [
    "NodeNumber",
    "ProbOfClass0",
    "ProbOfInterClassConnection",
    "ProbOfIntraClassConnection",
    "OutputNodesFile",
    "OutputEdgesFile",
    "OutputFormat",
    "Seed",
];

/// Everything needed for one generation run.
///
/// The JSON field names match the configuration documents accepted by
/// earlier releases of the generator. Keys match case-insensitively and
/// unrecognised keys are ignored:
///
/// ```json
/// {
///   "NodeNumber": 100,
///   "ProbOfClass0": 0.5,
///   "ProbOfInterClassConnection": 0.05,
///   "ProbOfIntraClassConnection": 0.4,
///   "OutputNodesFile": "nodes.csv",
///   "OutputEdgesFile": "edges.csv",
///   "OutputFormat": "CSV",
///   "Seed": 7
/// }
/// ```
///
/// `Seed` is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    /// Number of nodes to generate.
    #[serde(rename = "NodeNumber")]
    pub node_count: usize,
    /// Probability that a node is assigned class `0`.
    #[serde(rename = "ProbOfClass0")]
    pub class_zero_probability: f64,
    /// Edge probability between nodes of different classes.
    #[serde(rename = "ProbOfInterClassConnection")]
    pub inter_class_probability: f64,
    /// Edge probability between nodes of the same class.
    #[serde(rename = "ProbOfIntraClassConnection")]
    pub intra_class_probability: f64,
    /// Destination of the node list.
    #[serde(rename = "OutputNodesFile")]
    pub nodes_path: PathBuf,
    /// Destination of the edge list.
    #[serde(rename = "OutputEdgesFile")]
    pub edges_path: PathBuf,
    /// Output format name, `JSON` or `CSV`.
    #[serde(rename = "OutputFormat")]
    pub format: String,
    /// Optional seed for reproducible output.
    #[serde(rename = "Seed", default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Parses a configuration document.
    ///
    /// `origin` only labels the error.
    ///
    /// # Errors
    /// Returns [`CliError::MalformedConfig`] when `raw` is not a valid
    /// configuration document.
    pub fn from_json(raw: &str, origin: &Path) -> Result<Self, CliError> {
        let malformed = |source: serde_json::Error| CliError::MalformedConfig {
            path: origin.to_path_buf(),
            source,
        };
        let mut document: Value = serde_json::from_str(raw).map_err(malformed)?;
        if let Value::Object(fields) = &mut document {
            canonicalise_keys(fields);
        }
        serde_json::from_value(document).map_err(malformed)
    }

    /// Replaces the seed when `seed` is set.
    #[must_use]
    pub fn with_seed_override(self, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self {
                seed: Some(seed),
                ..self
            },
            None => self,
        }
    }

    /// Returns a generator builder populated from this configuration.
    #[must_use]
    pub fn generator_builder(&self) -> GraphGeneratorBuilder {
        let builder = GraphGeneratorBuilder::new()
            .with_node_count(self.node_count)
            .with_class_zero_probability(self.class_zero_probability)
            .with_inter_class_probability(self.inter_class_probability)
            .with_intra_class_probability(self.intra_class_probability);
        match self.seed {
            Some(seed) => builder.with_seed(seed),
            None => builder,
        }
    }
}

impl From<GenerateArgs> for GeneratorConfig {
    fn from(args: GenerateArgs) -> Self {
        let GenerateArgs {
            node_count,
            class_zero_probability,
            inter_class_probability,
            intra_class_probability,
            nodes_path,
            edges_path,
            format,
            seed,
        } = args;
        Self {
            node_count,
            class_zero_probability,
            inter_class_probability,
            intra_class_probability,
            nodes_path,
            edges_path,
            format,
            seed,
        }
    }
}

/// Rewrites keys that match a known field ignoring ASCII case to the
/// canonical spelling.
fn canonicalise_keys(fields: &mut Map<String, Value>) {
    let renamed = std::mem::take(fields)
        .into_iter()
        .map(|(key, value)| {
            let canonical = FIELD_NAMES
                .iter()
                .find(|name| name.eq_ignore_ascii_case(&key))
                .map_or(key, |name| (*name).to_owned());
            (canonical, value)
        })
        .collect();
    *fields = renamed;
}

/// Reads and parses the configuration document at `path`.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::MalformedConfig`] when its contents do not parse.
#[instrument(name = "cli.load_config", err, skip(path), fields(path = field::Empty))]
pub fn load_config(path: &Path) -> Result<GeneratorConfig, CliError> {
    Span::current().record("path", field::display(path.display()));
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    GeneratorConfig::from_json(&raw, path)
}
