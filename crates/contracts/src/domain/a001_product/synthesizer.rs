//! Combination synthesizer
//!
//! Derives the per-combination variation table from the current groups.
//! Values the user already typed into the previous table are carried over
//! by row key, so a row survives edits to unrelated sibling options and only
//! disappears when one of its own options is removed.

use super::variation::{VariationGroup, VariationRow, VariationTable, MAX_VARIATION_GROUPS};
use std::collections::HashMap;

/// Separator used to pair the options of two groups into one row key
pub const ROW_KEY_SEPARATOR: &str = "-";

/// Deterministic row key for a combination of option labels
pub fn row_key(labels: &[&str]) -> String {
    labels.join(ROW_KEY_SEPARATOR)
}

/// Build the variation table for `groups`, reusing values from `previous`.
///
/// - disabled or no groups: empty table
/// - one group: one row per option, key = option
/// - two groups: outer loop over group 1, inner loop over group 2,
///   key = `o1-o2`; empty when either group has no options yet
/// - more groups: unreachable through the editor, empty table
pub fn synthesize(
    enabled: bool,
    groups: &[VariationGroup],
    previous: &VariationTable,
) -> VariationTable {
    if !enabled || groups.is_empty() || groups.len() > MAX_VARIATION_GROUPS {
        return VariationTable::default();
    }

    // Later rows overwrite earlier ones, so a duplicated key resolves to the last row
    let lookup: HashMap<&str, &VariationRow> = previous
        .iter()
        .map(|row| (row.row_key.as_str(), row))
        .collect();

    let combinations: Vec<Vec<&str>> = match groups {
        [single] => single.options.iter().map(|o| vec![o.as_str()]).collect(),
        [first, second] => {
            if first.options.is_empty() || second.options.is_empty() {
                return VariationTable::default();
            }
            first
                .options
                .iter()
                .flat_map(|o1| {
                    second
                        .options
                        .iter()
                        .map(move |o2| vec![o1.as_str(), o2.as_str()])
                })
                .collect()
        }
        _ => return VariationTable::default(),
    };

    let rows = combinations
        .into_iter()
        .map(|labels| {
            let key = row_key(&labels);
            let mut row = VariationRow::new(
                key,
                labels.into_iter().map(str::to_string).collect(),
            );
            if let Some(existing) = lookup.get(row.row_key.as_str()) {
                row.price = existing.price.clone();
                row.stock = existing.stock.clone();
                row.sku = existing.sku.clone();
                row.image = existing.image.clone();
            }
            row
        })
        .collect();

    VariationTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::variation::VariationGroupId;

    fn group(id: u32, name: &str, options: &[&str]) -> VariationGroup {
        let mut g = VariationGroup::empty(VariationGroupId(id));
        g.name = name.to_string();
        g.options = options.iter().map(|o| o.to_string()).collect();
        g
    }

    fn priced(table: &VariationTable, key: &str, price: &str) -> VariationTable {
        let rows = table
            .iter()
            .cloned()
            .map(|mut r| {
                if r.row_key == key {
                    r.price = price.to_string();
                }
                r
            })
            .collect();
        VariationTable::new(rows)
    }

    #[test]
    fn test_disabled_or_empty_yields_empty_table() {
        let groups = vec![group(1, "Color", &["Red"])];
        assert!(synthesize(false, &groups, &VariationTable::default()).is_empty());
        assert!(synthesize(true, &[], &VariationTable::default()).is_empty());
    }

    #[test]
    fn test_single_group_rows_follow_option_order() {
        let groups = vec![group(1, "Color", &["a", "b", "c"])];
        let table = synthesize(true, &groups, &VariationTable::default());

        assert_eq!(table.keys(), vec!["a", "b", "c"]);
        assert_eq!(table.get(1).unwrap().option_labels, vec!["b".to_string()]);
        assert!(table.iter().all(|r| r.price.is_empty() && r.image.is_none()));
    }

    #[test]
    fn test_two_groups_produce_cartesian_product() {
        let groups = vec![group(1, "Color", &["a", "b"]), group(2, "Size", &["x", "y"])];
        let table = synthesize(true, &groups, &VariationTable::default());

        assert_eq!(table.keys(), vec!["a-x", "a-y", "b-x", "b-y"]);
        assert_eq!(
            table.get(2).unwrap().option_labels,
            vec!["b".to_string(), "x".to_string()]
        );
    }

    #[test]
    fn test_two_groups_wait_until_both_have_options() {
        let groups = vec![group(1, "Color", &["a", "b"]), group(2, "Size", &[])];
        assert!(synthesize(true, &groups, &VariationTable::default()).is_empty());
    }

    #[test]
    fn test_more_than_two_groups_is_empty() {
        let groups = vec![
            group(1, "Color", &["a"]),
            group(2, "Size", &["x"]),
            group(3, "Material", &["m"]),
        ];
        assert!(synthesize(true, &groups, &VariationTable::default()).is_empty());
    }

    #[test]
    fn test_values_survive_sibling_changes() {
        let before = vec![group(1, "Color", &["Red", "Blue", "Green"])];
        let table = synthesize(true, &before, &VariationTable::default());
        let table = priced(&table, "Blue", "19.90");

        // drop a sibling, add another, reorder
        let after = vec![group(1, "Color", &["Black", "Blue", "Red"])];
        let next = synthesize(true, &after, &table);

        assert_eq!(next.keys(), vec!["Black", "Blue", "Red"]);
        assert_eq!(next.get(1).unwrap().price, "19.90");
        assert_eq!(next.get(0).unwrap().price, "");
    }

    #[test]
    fn test_removed_option_drops_its_rows() {
        let before = vec![group(1, "Color", &["a", "b"]), group(2, "Size", &["x", "y"])];
        let table = synthesize(true, &before, &VariationTable::default());

        let after = vec![group(1, "Color", &["a", "b"]), group(2, "Size", &["y"])];
        let next = synthesize(true, &after, &table);

        assert_eq!(next.keys(), vec!["a-y", "b-y"]);
        assert!(next.iter().all(|r| !r.row_key.ends_with("-x")));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let groups = vec![group(1, "Color", &["a", "b"]), group(2, "Size", &["x"])];
        let table = synthesize(true, &groups, &VariationTable::default());
        let mut table = priced(&table, "b-x", "5");
        table.0[0].sku = "SKU-A-X".into();
        table.0[0].image = Some("img://a-x".into());

        let again = synthesize(true, &groups, &table);
        assert_eq!(again, table);
    }

    #[test]
    fn test_duplicate_options_collide_on_one_key() {
        let groups = vec![group(1, "Color", &["Red", "Red"])];
        let table = synthesize(true, &groups, &VariationTable::default());
        assert_eq!(table.keys(), vec!["Red", "Red"]);

        let mut edited = table.clone();
        edited.0[1].price = "7".into();
        let next = synthesize(true, &groups, &edited);
        assert_eq!(next.get(0).unwrap().price, "7");
        assert_eq!(next.get(1).unwrap().price, "7");
    }
}
