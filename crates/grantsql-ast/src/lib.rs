//! # GrantSQL AST
//!
//! Statement-tree nodes for SQL GRANT/REVOKE statements: the data model,
//! canonical-text rendering, and normalization of table-pattern targets
//! against a default database.

pub mod error;
pub mod format;
pub mod grant;
pub mod name;
pub mod pattern;
pub mod privilege;

pub use error::*;
pub use format::*;
pub use grant::*;
pub use name::*;
pub use pattern::*;
pub use privilege::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_grant() {
        let stmt = Grant {
            privileges: vec![Privilege::Select],
            targets: TargetList::Tables(vec![TablePattern::Table(TableName::qualified(
                "sales", "orders",
            ))]),
            grantees: vec![Name::from("analyst")],
        };

        assert_eq!(
            stmt.to_sql(FmtFlags::default()),
            "GRANT SELECT ON sales.orders TO analyst"
        );
    }
}
