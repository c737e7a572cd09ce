//! Error types for sleuth.

use crate::EntityKind;
use thiserror::Error;

/// Result type for sleuth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sleuth operations.
///
/// Grammar compilation is the only failure mode: it happens once, at
/// scanner construction. Scans themselves never fail; a grammar that
/// matches nothing yields an empty result, not an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A grammar in the catalog failed to compile.
    #[error("grammar for `{kind}` failed to compile: {source}")]
    Grammar {
        /// The kind whose pattern was rejected.
        kind: EntityKind,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a grammar compilation error.
    pub fn grammar(kind: EntityKind, source: regex::Error) -> Self {
        Error::Grammar { kind, source }
    }
}
