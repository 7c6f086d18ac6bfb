//! Table patterns: concrete table names, wildcards, and raw unresolved names

use serde::{Deserialize, Serialize};

use crate::error::AstError;
use crate::format::{FmtFlags, FormatNode};
use crate::name::{format_identifier, Name};

/// A concrete table reference, optionally qualified by database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableName {
    pub database: Option<Name>,
    pub table: Name,
}

impl TableName {
    /// Unqualified table reference
    pub fn new(table: impl Into<Name>) -> Self {
        Self {
            database: None,
            table: table.into(),
        }
    }

    /// Database-qualified table reference
    pub fn qualified(database: impl Into<Name>, table: impl Into<Name>) -> Self {
        Self {
            database: Some(database.into()),
            table: table.into(),
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.database.is_some()
    }
}

impl FormatNode for TableName {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        if let Some(database) = &self.database {
            database.format(buf, flags);
            buf.push('.');
        }
        self.table.format(buf, flags);
    }
}

/// Wildcard selecting every table, optionally within one database (`db.*`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllTablesSelector {
    pub database: Option<Name>,
}

impl FormatNode for AllTablesSelector {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        if let Some(database) = &self.database {
            database.format(buf, flags);
            buf.push('.');
        }
        buf.push('*');
    }
}

/// A dotted name as delivered by the parser, shape not yet determined.
/// The last part may be `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedName(pub Vec<String>);

impl FormatNode for UnresolvedName {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                buf.push('.');
            }
            if part == "*" {
                buf.push('*');
            } else {
                format_identifier(buf, flags, part);
            }
        }
    }
}

/// Capability to accept a database qualifier. Implemented by the concrete
/// pattern shapes; reached through [`TablePattern::as_qualifiable`].
pub trait DatabaseQualifiable {
    /// Attach `database` as the qualifier, mutating the value in place.
    /// Fails if a qualifier is already present or `database` is empty.
    fn qualify_with_database(&mut self, database: &str) -> Result<(), AstError>;
}

impl DatabaseQualifiable for TableName {
    fn qualify_with_database(&mut self, database: &str) -> Result<(), AstError> {
        if database.is_empty() {
            return Err(AstError::EmptyDatabaseName);
        }
        if self.database.is_some() {
            return Err(AstError::AlreadyQualified(self.table.as_str().to_string()));
        }
        self.database = Some(Name::from(database));
        Ok(())
    }
}

impl DatabaseQualifiable for AllTablesSelector {
    fn qualify_with_database(&mut self, database: &str) -> Result<(), AstError> {
        if database.is_empty() {
            return Err(AstError::EmptyDatabaseName);
        }
        if self.database.is_some() {
            return Err(AstError::AlreadyQualified("*".to_string()));
        }
        self.database = Some(Name::from(database));
        Ok(())
    }
}

/// One entry in the table-target clause of GRANT/REVOKE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TablePattern {
    /// Raw dotted name, not yet classified
    Unresolved(UnresolvedName),
    /// A single, possibly qualified table
    Table(TableName),
    /// Every table, optionally within one database
    Wildcard(AllTablesSelector),
}

impl TablePattern {
    /// Rewrite this pattern into canonical form. Raw names are classified
    /// into a concrete table or wildcard shape; concrete shapes are
    /// validated for well-formedness and left as they are.
    pub fn normalize(&mut self) -> Result<(), AstError> {
        match self {
            TablePattern::Unresolved(raw) => {
                let normalized = classify(raw)?;
                *self = normalized;
                Ok(())
            }
            TablePattern::Table(name) => {
                if name.table.is_empty() || name.database.as_ref().is_some_and(Name::is_empty) {
                    return Err(AstError::EmptyTableName);
                }
                Ok(())
            }
            TablePattern::Wildcard(selector) => {
                if selector.database.as_ref().is_some_and(Name::is_empty) {
                    return Err(AstError::EmptyTableName);
                }
                Ok(())
            }
        }
    }

    /// Capability query: `Some` exactly when this pattern can still take a
    /// database qualifier. Already-qualified patterns and raw unresolved
    /// names answer `None`, and callers skip them silently.
    pub fn as_qualifiable(&mut self) -> Option<&mut dyn DatabaseQualifiable> {
        match self {
            TablePattern::Table(name) if !name.is_qualified() => Some(name),
            TablePattern::Wildcard(selector) if selector.database.is_none() => Some(selector),
            _ => None,
        }
    }
}

impl FormatNode for TablePattern {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        match self {
            TablePattern::Unresolved(raw) => raw.format(buf, flags),
            TablePattern::Table(name) => name.format(buf, flags),
            TablePattern::Wildcard(selector) => selector.format(buf, flags),
        }
    }
}

/// Classify a raw dotted name into its concrete pattern shape
fn classify(raw: &UnresolvedName) -> Result<TablePattern, AstError> {
    if raw.0.iter().any(|part| part.is_empty()) {
        return Err(AstError::EmptyTableName);
    }
    match raw.0.as_slice() {
        [] => Err(AstError::EmptyTableName),
        [star] if star == "*" => Ok(TablePattern::Wildcard(AllTablesSelector { database: None })),
        [table] => Ok(TablePattern::Table(TableName::new(table.as_str()))),
        // `*` is only valid in table position
        [database, _] if database == "*" => Err(AstError::InvalidTablePattern(
            raw.to_sql(FmtFlags::default()),
        )),
        [database, star] if star == "*" => Ok(TablePattern::Wildcard(AllTablesSelector {
            database: Some(Name::from(database.as_str())),
        })),
        [database, table] => Ok(TablePattern::Table(TableName::qualified(
            database.as_str(),
            table.as_str(),
        ))),
        _ => Err(AstError::InvalidTablePattern(
            raw.to_sql(FmtFlags::default()),
        )),
    }
}
