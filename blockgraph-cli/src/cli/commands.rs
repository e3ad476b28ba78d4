//! Command implementations and argument parsing for the blockgraph CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use blockgraph_core::GraphError;
use blockgraph_output::{OutputError, OutputFormat, serialize_edges, serialize_nodes};
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand, error::ErrorKind};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::config::{GeneratorConfig, load_config};

/// Top-level CLI options parsed by [`clap`].
///
/// Besides the named subcommands the binary accepts the bare invocations of
/// earlier releases: a single configuration path, or the seven `generate`
/// parameters with no command word. [`Cli::into_command`] resolves either
/// shape into a [`Command`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "blockgraph",
    about = "Generate a random two-class graph and write its node and edge lists.",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Inputs given without a command word.
    #[command(flatten)]
    pub bare: BareArgs,
}

/// Inputs accepted when no subcommand is named.
#[derive(Debug, Args, Clone, Default)]
pub struct BareArgs {
    /// A JSON configuration path, or NODE_COUNT CLASS_ZERO_PROBABILITY
    /// INTER_CLASS_PROBABILITY INTRA_CLASS_PROBABILITY NODES_PATH EDGES_PATH
    /// FORMAT.
    #[arg(
        value_name = "INPUT",
        num_args = 1..=7,
        required = true,
        allow_negative_numbers = true
    )]
    pub inputs: Vec<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Resolves the parsed arguments into the [`Command`] to run.
    ///
    /// Without a subcommand, one input names a configuration document and
    /// seven inputs are parsed as [`GenerateArgs`].
    ///
    /// # Errors
    /// Returns a [`clap::Error`] when the bare inputs match neither shape or a
    /// positional parameter does not parse.
    pub fn into_command(self) -> Result<Command, clap::Error> {
        if let Some(command) = self.command {
            return Ok(command);
        }
        let BareArgs { inputs, seed } = self.bare;
        match inputs.as_slice() {
            [path] => Ok(Command::Config(ConfigArgs {
                path: PathBuf::from(path),
                seed,
            })),
            [_, _, _, _, _, _, _] => {
                let parser = GenerateArgs::augment_args(
                    clap::Command::new("blockgraph").no_binary_name(true),
                );
                let matches = parser.try_get_matches_from(&inputs)?;
                let args = GenerateArgs::from_arg_matches(&matches)?;
                Ok(Command::Generate(GenerateArgs { seed, ..args }))
            }
            _ => Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "expected a configuration path or seven generation parameters, got {} values",
                    inputs.len()
                ),
            )),
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph from positional parameters.
    Generate(GenerateArgs),
    /// Generate a graph described by a JSON configuration file.
    Config(ConfigArgs),
}

/// Positional parameters accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of nodes to generate.
    pub node_count: usize,

    /// Probability that a node is assigned class 0.
    #[arg(allow_negative_numbers = true)]
    pub class_zero_probability: f64,

    /// Edge probability between nodes of different classes.
    #[arg(allow_negative_numbers = true)]
    pub inter_class_probability: f64,

    /// Edge probability between nodes of the same class.
    #[arg(allow_negative_numbers = true)]
    pub intra_class_probability: f64,

    /// Destination of the node list (overwritten).
    pub nodes_path: PathBuf,

    /// Destination of the edge list (overwritten).
    pub edges_path: PathBuf,

    /// Output format: `JSON` or `CSV`.
    pub format: String,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `config` command.
#[derive(Debug, Args, Clone)]
pub struct ConfigArgs {
    /// Path to the JSON configuration document.
    pub path: PathBuf,

    /// Seed for reproducible output; overrides `Seed` in the document.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading a configuration file or writing an output file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The configuration document could not be parsed.
    #[error("malformed configuration `{path}`: {source}")]
    MalformedConfig {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Graph generation rejected its parameters.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// Serialization failed or the format was unknown.
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl CliError {
    /// Return the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::MalformedConfig { .. } => "CLI_MALFORMED_CONFIG",
            Self::Core(err) => err.code().as_str(),
            Self::Output(err) => err.code(),
        }
    }
}

/// Summarises the outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of nodes written.
    pub nodes: usize,
    /// Number of edges written.
    pub edges: usize,
    /// Format of both files.
    pub format: OutputFormat,
    /// Where the node list was written.
    pub nodes_path: PathBuf,
    /// Where the edge list was written.
    pub edges_path: PathBuf,
    /// Seed used, when one was configured.
    pub seed: Option<u64>,
}

/// Executes `command`.
///
/// # Errors
/// Returns [`CliError`] when loading the configuration, generating, or
/// writing fails. Nothing is written unless generation and serialization
/// both succeed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use blockgraph_cli::cli::{Command, GenerateArgs, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let command = Command::Generate(GenerateArgs {
///     node_count: 4,
///     class_zero_probability: 0.5,
///     inter_class_probability: 1.0,
///     intra_class_probability: 1.0,
///     nodes_path: dir.path().join("nodes.csv"),
///     edges_path: dir.path().join("edges.csv"),
///     format: "CSV".into(),
///     seed: Some(1),
/// });
/// let summary = run_cli(command)?;
/// assert_eq!(summary.edges, 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(command),
    fields(command = field::Empty),
)]
pub fn run_cli(command: Command) -> Result<GenerationSummary, CliError> {
    let span = Span::current();
    let config = match command {
        Command::Generate(args) => {
            span.record("command", field::display("generate"));
            GeneratorConfig::from(args)
        }
        Command::Config(args) => {
            span.record("command", field::display("config"));
            load_config(&args.path)?.with_seed_override(args.seed)
        }
    };
    run_config(&config)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(config),
    fields(
        node_count = config.node_count,
        format = config.format.as_str(),
        seed = field::Empty,
    ),
)]
pub(super) fn run_config(config: &GeneratorConfig) -> Result<GenerationSummary, CliError> {
    let format: OutputFormat = config.format.parse()?;
    let generator = config.generator_builder().build()?;
    if let Some(seed) = generator.seed() {
        Span::current().record("seed", seed);
    }

    let graph = generator.generate()?;
    let nodes_text = serialize_nodes(graph.nodes(), format)?;
    let edges_text = serialize_edges(graph.edges(), format)?;

    write_output(&config.edges_path, &edges_text)?;
    write_output(&config.nodes_path, &nodes_text)?;

    let summary = GenerationSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        format,
        nodes_path: config.nodes_path.clone(),
        edges_path: config.edges_path.clone(),
        seed: generator.seed(),
    };
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        format = %summary.format,
        "output files written"
    );
    Ok(summary)
}

#[instrument(name = "cli.write_output", err, skip(contents), fields(bytes = contents.len()))]
pub(super) fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use blockgraph_cli::cli::{GenerationSummary, render_summary};
/// # use blockgraph_output::OutputFormat;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = GenerationSummary {
///     nodes: 3,
///     edges: 2,
///     format: OutputFormat::Csv,
///     nodes_path: PathBuf::from("nodes.csv"),
///     edges_path: PathBuf::from("edges.csv"),
///     seed: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("nodes: 3 -> nodes.csv\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "nodes: {} -> {}",
        summary.nodes,
        summary.nodes_path.display()
    )?;
    writeln!(
        writer,
        "edges: {} -> {}",
        summary.edges,
        summary.edges_path.display()
    )?;
    writeln!(writer, "format: {}", summary.format)?;
    if let Some(seed) = summary.seed {
        writeln!(writer, "seed: {seed}")?;
    }
    Ok(())
}
