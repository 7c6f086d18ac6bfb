//! End-to-end coverage for GRANT/REVOKE rendering and target normalization

use grantsql_ast::{
    AllTablesSelector, AstError, FmtFlags, FormatNode, Grant, Name, Privilege, Revoke, TableName,
    TablePattern, TargetList, UnresolvedName,
};
use proptest::prelude::*;

fn unresolved(parts: &[&str]) -> TablePattern {
    TablePattern::Unresolved(UnresolvedName(
        parts.iter().map(|p| p.to_string()).collect(),
    ))
}

#[test]
fn grant_renders_quoted_identifiers() {
    let stmt = Grant {
        privileges: vec![Privilege::Select, Privilege::Update],
        targets: TargetList::Tables(vec![
            TablePattern::Table(TableName::qualified("Sales", "order-items")),
            TablePattern::Table(TableName::new("customers")),
        ]),
        grantees: vec![Name::from("analyst"), Name::from("read only")],
    };
    assert_eq!(
        stmt.to_sql(FmtFlags::simple()),
        "GRANT SELECT, UPDATE ON \"Sales\".\"order-items\", customers TO analyst, \"read only\""
    );
}

#[test]
fn always_quote_flag_reaches_every_identifier() {
    let stmt = Grant {
        privileges: vec![Privilege::Select],
        targets: TargetList::Databases(vec![Name::from("sales")]),
        grantees: vec![Name::from("analyst")],
    };
    assert_eq!(
        stmt.to_sql(FmtFlags::quoted()),
        "GRANT SELECT ON DATABASE \"sales\" TO \"analyst\""
    );
}

#[test]
fn parse_shape_normalize_then_render() {
    // A parser hands over raw dotted names; semantic analysis normalizes
    // them against the session database before the statement is rendered.
    let mut stmt = Grant {
        privileges: vec![Privilege::All],
        targets: TargetList::Tables(vec![
            unresolved(&["orders"]),
            unresolved(&["archive", "*"]),
        ]),
        grantees: vec![Name::from("etl")],
    };
    stmt.normalize_targets_with_database("sales").unwrap();
    assert_eq!(
        stmt.to_sql(FmtFlags::default()),
        "GRANT ALL ON sales.orders, archive.* TO etl"
    );
}

#[test]
fn revoke_shares_the_target_clause() {
    let mut stmt = Revoke {
        privileges: vec![Privilege::Insert],
        targets: TargetList::Tables(vec![unresolved(&["staging"])]),
        grantees: vec![Name::from("loader")],
    };
    stmt.normalize_targets_with_database("etl").unwrap();
    assert_eq!(
        stmt.to_sql(FmtFlags::default()),
        "REVOKE INSERT ON etl.staging FROM loader"
    );
}

#[test]
fn normalize_error_reports_the_failing_pattern() {
    let mut stmt = Grant {
        privileges: vec![Privilege::Select],
        targets: TargetList::Tables(vec![unresolved(&["a", "b", "c"])]),
        grantees: vec![Name::from("analyst")],
    };
    let err = stmt.normalize_targets_with_database("sales").unwrap_err();
    assert_eq!(err, AstError::InvalidTablePattern("a.b.c".to_string()));
    assert_eq!(err.to_string(), "invalid table pattern: a.b.c");
}

#[test]
fn formatting_leaves_the_node_unchanged() {
    let stmt = Grant {
        privileges: vec![Privilege::Drop, Privilege::Create],
        targets: TargetList::Tables(vec![TablePattern::Wildcard(AllTablesSelector {
            database: Some(Name::from("sales")),
        })]),
        grantees: vec![Name::from("admin")],
    };
    let before = stmt.clone();
    let first = stmt.to_sql(FmtFlags::default());
    let second = stmt.to_sql(FmtFlags::default());
    assert_eq!(first, second);
    assert_eq!(stmt, before);
}

#[test]
fn serde_round_trip_preserves_the_tree() {
    let stmt = Grant {
        privileges: vec![Privilege::Select],
        targets: TargetList::Tables(vec![
            TablePattern::Table(TableName::qualified("sales", "orders")),
            unresolved(&["archive", "*"]),
        ]),
        grantees: vec![Name::from("analyst")],
    };
    let json = serde_json::to_string(&stmt).unwrap();
    let decoded: Grant = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, stmt);
    assert_eq!(
        decoded.to_sql(FmtFlags::default()),
        stmt.to_sql(FmtFlags::default())
    );
}

proptest! {
    #[test]
    fn database_grant_is_deterministic_and_order_preserving(
        databases in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..6),
        grantees in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..4),
    ) {
        let stmt = Grant {
            privileges: vec![Privilege::Select],
            targets: TargetList::Databases(
                databases.iter().map(|d| Name::from(d.as_str())).collect(),
            ),
            grantees: grantees.iter().map(|g| Name::from(g.as_str())).collect(),
        };

        let first = stmt.to_sql(FmtFlags::default());
        let second = stmt.to_sql(FmtFlags::default());
        prop_assert_eq!(&first, &second);

        let rendered_databases = databases
            .iter()
            .map(|d| Name::from(d.as_str()).to_sql(FmtFlags::default()))
            .collect::<Vec<_>>()
            .join(", ");
        let rendered_grantees = grantees
            .iter()
            .map(|g| Name::from(g.as_str()).to_sql(FmtFlags::default()))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(
            first,
            format!("GRANT SELECT ON DATABASE {rendered_databases} TO {rendered_grantees}")
        );
    }

    #[test]
    fn normalization_preserves_length_and_qualifies_everything(
        tables in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..6),
    ) {
        let mut targets = TargetList::Tables(
            tables
                .iter()
                .map(|t| unresolved(&[t.as_str()]))
                .collect(),
        );
        targets.normalize_tables_with_database("defaultdb").unwrap();

        let TargetList::Tables(patterns) = targets else {
            panic!("variant changed during normalization");
        };
        prop_assert_eq!(patterns.len(), tables.len());
        for (pattern, table) in patterns.iter().zip(&tables) {
            prop_assert_eq!(
                pattern,
                &TablePattern::Table(TableName::qualified("defaultdb", table.as_str()))
            );
        }
    }
}
