//! Serialization of generated node and edge lists.
//!
//! Two formats are supported. `JSON` writes a compact array of objects with
//! the fields `Id`, `Class`, `Name` for nodes and `X`, `Y` (embedded node
//! objects) for edges. `CSV` writes one `Id,"Name",Class` line per node and
//! one `X,Y` line per edge.

mod errors;
mod format;
mod writer;

pub use errors::OutputError;
pub use format::OutputFormat;
pub use writer::{serialize_edges, serialize_nodes, write_edges, write_nodes};
