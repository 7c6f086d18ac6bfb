//! GRANT/REVOKE statement nodes and their target clause

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::AstError;
use crate::format::{FmtFlags, FormatNode};
use crate::name::NameList;
use crate::pattern::TablePattern;
use crate::privilege::PrivilegeList;

/// The object-reference clause of GRANT/REVOKE: either whole databases or
/// a list of table patterns, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetList {
    /// Whole databases (`ON DATABASE a, b`)
    Databases(NameList),
    /// Table patterns (`ON sales.orders, archive.*`)
    Tables(Vec<TablePattern>),
}

impl TargetList {
    /// Normalize every table pattern in place and qualify the ones still
    /// lacking a database with `database`, when it is non-empty.
    ///
    /// Fail-fast: the first error aborts the pass and entries already
    /// rewritten keep their rewritten form. A database-target list has no
    /// patterns to touch and returns `Ok(())`.
    pub fn normalize_tables_with_database(&mut self, database: &str) -> Result<(), AstError> {
        let TargetList::Tables(patterns) = self else {
            return Ok(());
        };
        for pattern in patterns.iter_mut() {
            pattern.normalize()?;
            if !database.is_empty() {
                if let Some(qualifiable) = pattern.as_qualifiable() {
                    qualifiable.qualify_with_database(database)?;
                    trace!(
                        database,
                        pattern = %pattern.to_sql(FmtFlags::default()),
                        "qualified table pattern"
                    );
                }
            }
        }
        Ok(())
    }
}

impl FormatNode for TargetList {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        match self {
            TargetList::Databases(names) => {
                buf.push_str("DATABASE ");
                names.format(buf, flags);
            }
            TargetList::Tables(patterns) => patterns.format(buf, flags),
        }
    }
}

/// GRANT statement: assigns privileges on the targets to the grantees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub privileges: PrivilegeList,
    pub targets: TargetList,
    pub grantees: NameList,
}

impl Grant {
    /// Normalize the target clause against a default database; see
    /// [`TargetList::normalize_tables_with_database`]
    pub fn normalize_targets_with_database(&mut self, database: &str) -> Result<(), AstError> {
        self.targets.normalize_tables_with_database(database)
    }
}

impl FormatNode for Grant {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        buf.push_str("GRANT ");
        self.privileges.format(buf, flags);
        buf.push_str(" ON ");
        self.targets.format(buf, flags);
        buf.push_str(" TO ");
        self.grantees.format(buf, flags);
    }
}

/// REVOKE statement: removes privileges on the targets from the grantees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revoke {
    pub privileges: PrivilegeList,
    pub targets: TargetList,
    pub grantees: NameList,
}

impl Revoke {
    /// Normalize the target clause against a default database; see
    /// [`TargetList::normalize_tables_with_database`]
    pub fn normalize_targets_with_database(&mut self, database: &str) -> Result<(), AstError> {
        self.targets.normalize_tables_with_database(database)
    }
}

impl FormatNode for Revoke {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        buf.push_str("REVOKE ");
        self.privileges.format(buf, flags);
        buf.push_str(" ON ");
        self.targets.format(buf, flags);
        buf.push_str(" FROM ");
        self.grantees.format(buf, flags);
    }
}
