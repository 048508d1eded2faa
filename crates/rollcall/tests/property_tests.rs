//! Property-based tests for normalization and reconciliation.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p rollcall --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p rollcall --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use rollcall::{DataTable, Roster, SchemaDetector, normalize, reconcile};

// =============================================================================
// Test Strategies
// =============================================================================

/// Names drawn from a small pool with case, spacing and punctuation noise,
/// so duplicates and near-duplicates are common.
fn noisy_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["ann lee", "bo", "cy young", "di", "ed o", "fay"]),
        any::<bool>(),
        "[ \\t]{0,2}",
        prop::sample::select(vec!["", ".", ","]),
    )
        .prop_map(|(base, upper, pad, punct)| {
            let base = if upper { base.to_uppercase() } else { base.to_string() };
            format!("{pad}{base}{punct}{pad}")
        })
}

/// An answer cell: blank about a third of the time.
fn answer() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        2 => "[a-z]{1,6}",
    ]
}

/// A survey table with a "Name" column and 1-4 answer columns.
fn survey_table() -> impl Strategy<Value = DataTable> {
    (1usize..=4).prop_flat_map(|answers| {
        let row = (noisy_name(), prop::collection::vec(answer(), answers));
        prop::collection::vec(row, 1..30).prop_map(move |rows| {
            let mut headers = vec!["Name".to_string()];
            headers.extend((1..=answers).map(|i| format!("Q{i}")));

            let rows: Vec<Vec<String>> = rows
                .into_iter()
                .map(|(name, cells)| std::iter::once(name).chain(cells).collect())
                .collect();
            DataTable::from_strings(headers, rows)
        })
    })
}

fn roster() -> impl Strategy<Value = Roster> {
    prop::collection::vec(noisy_name(), 0..8).prop_map(Roster::new)
}

// =============================================================================
// Normalizer Properties
// =============================================================================

proptest! {
    /// Normalizing twice changes nothing.
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,60}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    /// Normalized keys have no outer or repeated whitespace, no periods or commas,
    /// and no uppercase ASCII.
    #[test]
    fn normalize_output_is_canonical(raw in "[a-zA-Z .,\\t\\n]{0,40}") {
        let key = normalize(&raw);
        let text = key.as_str();
        prop_assert_eq!(text.trim(), text);
        prop_assert!(!text.contains("  "));
        prop_assert!(!text.contains('.') && !text.contains(','));
        prop_assert!(!text.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Case and surrounding whitespace never affect the key.
    #[test]
    fn normalize_ignores_case_and_padding(raw in "[a-zA-Z ]{0,30}", pad in "[ \\t]{0,3}") {
        let padded = format!("{pad}{}{pad}", raw.to_uppercase());
        prop_assert_eq!(normalize(&padded), normalize(&raw));
    }
}

// =============================================================================
// Reconciliation Properties
// =============================================================================

proptest! {
    /// Identical input gives byte-identical output.
    #[test]
    fn reconcile_is_deterministic(table in survey_table(), roster in roster()) {
        let roles = SchemaDetector::new().detect(&table).unwrap();
        let first = serde_json::to_string(&reconcile(&table, &roles, Some(&roster))).unwrap();
        let second = serde_json::to_string(&reconcile(&table, &roles, Some(&roster))).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Without a roster, every distinct name lands in exactly one list.
    #[test]
    fn partition_without_roster(table in survey_table()) {
        let roles = SchemaDetector::new().detect(&table).unwrap();
        let result = reconcile(&table, &roles, None);

        let distinct: HashSet<_> = (0..table.row_count())
            .map(|row| normalize(&table.cell(row, 0).as_text()))
            .filter(|key| !key.is_empty())
            .collect();

        prop_assert_eq!(result.total_students, distinct.len());
        prop_assert_eq!(result.responded_count + result.not_responded_count, result.total_students);
        prop_assert!(result.missing_from_master.is_empty());

        let mut listed: Vec<_> = result.responded_list.iter().map(|n| normalize(n)).collect();
        listed.extend(result.not_responded_list.iter().map(|n| normalize(&n.name)));
        let listed_set: HashSet<_> = listed.iter().cloned().collect();
        prop_assert_eq!(listed.len(), listed_set.len());
        prop_assert_eq!(listed_set, distinct);
    }

    /// With a roster, every distinct roster person lands in exactly one list,
    /// and nobody off the roster appears.
    #[test]
    fn partition_with_roster(table in survey_table(), roster in roster()) {
        prop_assume!(!roster.is_empty());
        let roles = SchemaDetector::new().detect(&table).unwrap();
        let result = reconcile(&table, &roles, Some(&roster));

        let expected: HashSet<_> = roster.entries().iter().map(|n| normalize(n)).collect();

        let mut listed: Vec<_> = result.responded_list.iter().map(|n| normalize(n)).collect();
        listed.extend(result.not_responded_list.iter().map(|n| normalize(&n.name)));
        listed.extend(result.missing_from_master.iter().map(|n| normalize(n)));
        let listed_set: HashSet<_> = listed.iter().cloned().collect();

        prop_assert_eq!(listed.len(), listed_set.len());
        prop_assert_eq!(&listed_set, &expected);
        prop_assert_eq!(result.total_students, expected.len());
        prop_assert_eq!(
            result.responded_count + result.not_responded_count + result.missing_from_master.len(),
            result.total_students
        );
    }

    /// Missing columns are exactly the blank required cells of the person's
    /// last row, in column order.
    #[test]
    fn missing_columns_match_last_row(table in survey_table()) {
        let roles = SchemaDetector::new().detect(&table).unwrap();
        let result = reconcile(&table, &roles, None);

        for entry in &result.not_responded_list {
            let key = normalize(&entry.name);
            let last = (0..table.row_count())
                .rev()
                .find(|&row| normalize(&table.cell(row, 0).as_text()) == key)
                .unwrap();
            let expected: Vec<String> = roles
                .required
                .iter()
                .filter(|col| table.cell(last, col.index).is_blank())
                .map(|col| col.name.clone())
                .collect();
            prop_assert!(!expected.is_empty());
            prop_assert_eq!(&entry.missing, &expected);
        }
    }
}
