//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary configuration files and assert on the
//! files the pipeline writes. These helpers keep the cases concise.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::commands::GenerateArgs;
use super::{CliError, Command, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn read_file(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => panic!("failed to read `{}`: {err}", path.display()),
    }
}

/// Positional arguments writing `nodes.<ext>` and `edges.<ext>` into `dir`.
pub(super) fn generate_args(dir: &TempDir, format: &str) -> GenerateArgs {
    let extension = format.to_ascii_lowercase();
    GenerateArgs {
        node_count: 6,
        class_zero_probability: 0.5,
        inter_class_probability: 1.0,
        intra_class_probability: 1.0,
        nodes_path: dir.path().join(format!("nodes.{extension}")),
        edges_path: dir.path().join(format!("edges.{extension}")),
        format: format.to_owned(),
        seed: Some(42),
    }
}

pub(super) fn run_cli_expecting_error(command: Command, panic_msg: &str) -> CliError {
    match run_cli(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
