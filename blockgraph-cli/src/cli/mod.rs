//! Command-line interface orchestration for the blockgraph generator.
//!
//! Two commands share one pipeline: `generate` takes every parameter
//! positionally, `config` reads them from a JSON document. The command word
//! may be omitted. Both validate, generate, serialize in memory, and only
//! then write the node and edge files.

mod commands;
mod config;

pub use commands::{
    BareArgs, Cli, CliError, Command, ConfigArgs, GenerateArgs, GenerationSummary, render_summary,
    run_cli,
};
pub use config::{GeneratorConfig, load_config};

#[cfg(test)]
mod test_helpers;
