//! Node and edge list writers.

use std::io::{self, Write};

use blockgraph_core::{Edge, Node};
use tracing::{debug, instrument};

use crate::{errors::OutputError, format::OutputFormat};

/// Writes `nodes` to `writer` in `format`.
///
/// CSV records have the shape `Id,"Name",Class`; quotes inside a name are
/// doubled.
///
/// # Errors
/// Returns [`OutputError::Json`] or [`OutputError::Io`] when encoding or
/// writing fails.
///
/// # Examples
/// ```
/// use blockgraph_core::{Node, NodeClass};
/// use blockgraph_output::{OutputFormat, write_nodes};
///
/// let nodes = vec![Node { id: 2, class: NodeClass::Zero, name: "Ann Lee".into() }];
/// let mut buffer = Vec::new();
/// write_nodes(&nodes, OutputFormat::Csv, &mut buffer).expect("writing to a Vec succeeds");
/// assert_eq!(buffer, b"2,\"Ann Lee\",0\n");
/// ```
#[instrument(
    name = "output.write_nodes",
    level = "debug",
    err,
    skip(nodes, writer),
    fields(nodes = nodes.len()),
)]
pub fn write_nodes<W: Write>(
    nodes: &[Node],
    format: OutputFormat,
    mut writer: W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Json => serde_json::to_writer(&mut writer, nodes)?,
        OutputFormat::Csv => {
            for node in nodes {
                write_node_record(&mut writer, node)?;
            }
        }
    }
    writer.flush()?;
    debug!("node list written");
    Ok(())
}

/// Writes `edges` to `writer` in `format`.
///
/// CSV records are `X,Y` endpoint ids with no space after the comma.
///
/// # Errors
/// Returns [`OutputError::Json`] or [`OutputError::Io`] when encoding or
/// writing fails.
#[instrument(
    name = "output.write_edges",
    level = "debug",
    err,
    skip(edges, writer),
    fields(edges = edges.len()),
)]
pub fn write_edges<W: Write>(
    edges: &[Edge],
    format: OutputFormat,
    mut writer: W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Json => serde_json::to_writer(&mut writer, edges)?,
        OutputFormat::Csv => {
            for edge in edges {
                writeln!(writer, "{},{}", edge.x.id, edge.y.id)?;
            }
        }
    }
    writer.flush()?;
    debug!("edge list written");
    Ok(())
}

/// Serializes `nodes` into a `String`.
///
/// # Errors
/// See [`write_nodes`].
pub fn serialize_nodes(nodes: &[Node], format: OutputFormat) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_nodes(nodes, format, &mut buffer)?;
    into_string(buffer)
}

/// Serializes `edges` into a `String`.
///
/// # Errors
/// See [`write_edges`].
pub fn serialize_edges(edges: &[Edge], format: OutputFormat) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_edges(edges, format, &mut buffer)?;
    into_string(buffer)
}

fn write_node_record<W: Write>(writer: &mut W, node: &Node) -> io::Result<()> {
    let name = node.name.replace('"', "\"\"");
    writeln!(writer, "{},\"{name}\",{}", node.id, node.class)
}

fn into_string(buffer: Vec<u8>) -> Result<String, OutputError> {
    String::from_utf8(buffer)
        .map_err(|err| OutputError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
