//! Error type for NML construction and writing.

use thiserror::Error;

/// Error type for NML block population, document assembly, and file output.
#[derive(Debug, Error)]
pub enum NmlError {
    /// I/O error while writing a `.nml` file or reading config input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON config input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter value does not match the parameter's declared type.
    #[error(
        "invalid type for parameter '{param}' in block '&{block}': \
         expected {expected}, got {found}"
    )]
    InvalidParameterType {
        /// Block the parameter belongs to, without the `&` prefix.
        block: &'static str,
        /// Parameter name as given in the input mapping.
        param: String,
        /// Expected semantic type, e.g. `"string"` or `"list of number"`.
        expected: &'static str,
        /// JSON type actually found.
        found: &'static str,
    },

    /// A key in the input mapping matches no recognized parameter.
    #[error("unknown parameter '{param}' in block '&{block}'")]
    UnknownParameter {
        /// Block the key was supplied for, without the `&` prefix.
        block: &'static str,
        /// The unrecognized key.
        param: String,
    },

    /// A required block was not supplied at document construction.
    #[error("missing required block '&{block}'")]
    MissingRequiredBlock {
        /// Name of the missing slot, without the `&` prefix.
        block: &'static str,
    },

    /// A top-level config key names no known NML block.
    #[error("unknown NML block '{0}'")]
    UnknownBlock(String),

    /// Top-level JSON config input is not an object of blocks.
    #[error("expected a JSON object of NML blocks, got {0}")]
    NotAnObject(&'static str),
}
