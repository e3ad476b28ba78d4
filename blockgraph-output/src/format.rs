//! Output format selection.

use std::{fmt, str::FromStr};

use crate::errors::OutputError;

/// Text formats supported for node and edge lists.
///
/// # Examples
/// ```
/// use blockgraph_output::OutputFormat;
///
/// let format: OutputFormat = "CSV".parse().expect("CSV is supported");
/// assert_eq!(format, OutputFormat::Csv);
/// assert!("XML".parse::<OutputFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// A JSON array of node or edge objects.
    Json,
    /// One comma-separated record per line.
    Csv,
}

impl OutputFormat {
    /// Returns the canonical name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "JSON" => Ok(Self::Json),
            "CSV" => Ok(Self::Csv),
            other => Err(OutputError::UnknownFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
