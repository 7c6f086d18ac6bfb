//! Privilege keyword vocabulary for GRANT/REVOKE

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{FmtFlags, FormatNode};

/// Privileges that can appear in a GRANT or REVOKE statement. Validation
/// against object kinds happens in a later phase, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Privilege {
    All,
    Create,
    Drop,
    Grant,
    Select,
    Insert,
    Delete,
    Update,
}

impl Privilege {
    /// Uppercase SQL keyword for this privilege
    pub fn keyword(&self) -> &'static str {
        match self {
            Privilege::All => "ALL",
            Privilege::Create => "CREATE",
            Privilege::Drop => "DROP",
            Privilege::Grant => "GRANT",
            Privilege::Select => "SELECT",
            Privilege::Insert => "INSERT",
            Privilege::Delete => "DELETE",
            Privilege::Update => "UPDATE",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FormatNode for Privilege {
    // Privileges are keywords, never quoted identifiers; flags do not apply.
    fn format(&self, buf: &mut String, _flags: FmtFlags) {
        buf.push_str(self.keyword());
    }
}

/// Ordered privilege list, rendered comma-joined exactly as written:
/// no reordering, no deduplication
pub type PrivilegeList = Vec<Privilege>;
