//! Error types for the blockgraph core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running graph generation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A probability parameter was NaN or outside `[0, 1]`.
    #[error("probability `{parameter}` must lie within [0, 1] (got {value})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The number of node pairs for `node_count` does not fit in `usize`.
    #[error("node count {node_count} yields more node pairs than can be enumerated")]
    NodeCountOverflow {
        /// The node count supplied by the caller.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A probability parameter was NaN or outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// The number of node pairs overflowed `usize`.
        NodeCountOverflow => NodeCountOverflow { .. } => "GRAPH_NODE_COUNT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::probability(
        GraphError::InvalidProbability { parameter: "intra_class_probability", value: 1.5 },
        "GRAPH_INVALID_PROBABILITY",
    )]
    #[case::overflow(
        GraphError::NodeCountOverflow { node_count: usize::MAX },
        "GRAPH_NODE_COUNT_OVERFLOW",
    )]
    fn error_codes_are_stable(#[case] error: GraphError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn invalid_probability_names_parameter() {
        let error = GraphError::InvalidProbability {
            parameter: "class_zero_probability",
            value: -0.1,
        };
        assert_eq!(
            error.to_string(),
            "probability `class_zero_probability` must lie within [0, 1] (got -0.1)"
        );
    }
}
