//! SQL identifiers and identifier lists

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{FmtFlags, FormatNode};

/// Keywords that force quoting even when lexically plain. Sorted for
/// binary search.
const RESERVED_KEYWORDS: &[&str] = &[
    "all", "database", "delete", "drop", "from", "grant", "insert", "on", "revoke", "select",
    "table", "to", "update",
];

/// A single SQL identifier (database, table, or role name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FormatNode for Name {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        format_identifier(buf, flags, &self.0);
    }
}

/// Ordered list of identifiers; duplicates and order preserved as written
pub type NameList = Vec<Name>;

/// Append `ident` to `buf`, quoted when the flags or the canonical quoting
/// rules require it.
pub(crate) fn format_identifier(buf: &mut String, flags: FmtFlags, ident: &str) {
    if flags.always_quote || requires_quoting(ident) {
        push_quoted(buf, ident);
    } else {
        buf.push_str(ident);
    }
}

/// An identifier must be quoted when it is empty, does not start with a
/// lowercase letter or underscore, contains a character outside
/// `[a-z0-9_$]`, or collides with a reserved keyword.
fn requires_quoting(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !(first.is_ascii_lowercase() || first == '_') {
        return true;
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$') {
        return true;
    }
    RESERVED_KEYWORDS.binary_search(&ident).is_ok()
}

/// Double-quoted form with embedded quotes doubled
fn push_quoted(buf: &mut String, ident: &str) {
    buf.push('"');
    for c in ident.chars() {
        if c == '"' {
            buf.push('"');
        }
        buf.push(c);
    }
    buf.push('"');
}
