//! Errors surfaced by table-pattern normalization and qualification

use thiserror::Error;

/// Errors produced while normalizing or qualifying table patterns.
///
/// These surface verbatim to the caller: the normalization pass stops at
/// the first failure and does not roll back entries it already rewrote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A pattern contains an empty name part, or no parts at all
    #[error("empty table name")]
    EmptyTableName,

    /// A raw name has a shape that cannot become a table pattern
    #[error("invalid table pattern: {0}")]
    InvalidTablePattern(String),

    /// Qualification was requested on a value that already carries a
    /// database qualifier
    #[error("{0} is already database-qualified")]
    AlreadyQualified(String),

    /// Qualification was requested with an empty database name
    #[error("empty database name")]
    EmptyDatabaseName,
}
