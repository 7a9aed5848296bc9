use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LexError>;

/// Errors surfaced by the lexical graph, its codecs and similarity metrics.
///
/// Structural anomalies in the data (dangling or duplicate relations,
/// hypernym cycles) are not errors: they are reported as findings by the
/// [`crate::admin`] passes.
#[derive(Debug, Error)]
pub enum LexError {
    /// A mutating operation referenced a synset that is not in the store.
    #[error("{0} not found")]
    NotFound(String),
    /// The information-content table has no entry for the synset id.
    #[error("missing information content for synset {0}")]
    MissingInformationContent(String),
    /// The two synsets share no ancestor in the hypernym hierarchy.
    #[error("synsets {first} and {second} have no common subsumer")]
    NoCommonSubsumer {
        /// Id of the first synset.
        first: String,
        /// Id of the second synset.
        second: String,
    },
    /// A similarity formula is mathematically undefined for the inputs.
    #[error("similarity undefined: {0}")]
    Undefined(&'static str),
    /// Caller supplied an argument the operation cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// I/O error while reading or writing a resource.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Malformed or unwritable JSON resource.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Malformed CSV/TSV resource.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl LexError {
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        LexError::NotFound(what.into())
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        LexError::InvalidArgument(msg.into())
    }
}

impl From<serde_json::Error> for LexError {
    fn from(err: serde_json::Error) -> Self {
        LexError::Serialization(err.to_string())
    }
}
