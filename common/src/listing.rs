use chrono::NaiveDate;
use serde::Serialize;

use crate::expiry::{self, Severity, StatusCategory};
use crate::product::{Product, ProductKind};

/// Listing sort selector. Unrecognized keys fall back to storage order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Unsorted,
    TimeLeft,
    ItemType,
}

impl SortOrder {
    /// Map a view-supplied key ("timeLeft", "itemType") onto a sort order.
    pub fn from_key(key: &str) -> SortOrder {
        match key {
            "timeLeft" => SortOrder::TimeLeft,
            "itemType" => SortOrder::ItemType,
            _ => SortOrder::Unsorted,
        }
    }
}

/// One display-ready listing row. Built fresh on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub kind: ProductKind,
    pub name: String,
    pub quantity: u32,
    pub expiry: NaiveDate,
    pub days_label: String,
    pub message: &'static str,
    pub severity: Severity,
    pub action_needed: bool,
    /// Position of the record in storage order, independent of sort and filter.
    pub source_index: usize,
}

/// Assemble display rows from the stored collection.
///
/// A query takes over the pipeline: it matches on name (case-insensitive) or
/// on the raw `YYYY-MM-DD` expiry string, and ignores both the sort order and
/// the critical-only flag. Without a query the records are sorted, then cut
/// down to the "Expiring Soon" tier when `critical_only` is set.
pub fn build_listing(
    products: &[Product],
    sort: SortOrder,
    query: Option<&str>,
    critical_only: bool,
    today: NaiveDate,
) -> Vec<ListingRow> {
    let mut entries: Vec<(usize, &Product)> = products.iter().enumerate().collect();

    if let Some(query) = query {
        let needle = query.to_lowercase();
        entries.retain(|(_, p)| {
            p.name.to_lowercase().contains(&needle) || p.expiry.to_string().contains(&needle)
        });
    } else {
        match sort {
            SortOrder::Unsorted => {}
            SortOrder::TimeLeft => {
                entries.sort_by_key(|(_, p)| expiry::days_until(p.expiry, today));
            }
            SortOrder::ItemType => {
                entries.sort_by(|(_, a), (_, b)| a.kind.as_str().cmp(b.kind.as_str()));
            }
        }
        if critical_only {
            entries.retain(|(_, p)| {
                expiry::classify(expiry::days_until(p.expiry, today))
                    == StatusCategory::ExpiringSoon
            });
        }
    }

    entries
        .into_iter()
        .map(|(source_index, product)| row_for(product, source_index, today))
        .collect()
}

fn row_for(product: &Product, source_index: usize, today: NaiveDate) -> ListingRow {
    let days = expiry::days_until(product.expiry, today);
    let category = expiry::classify(days);
    ListingRow {
        kind: product.kind.clone(),
        name: product.name.clone(),
        quantity: product.quantity,
        expiry: product.expiry,
        days_label: expiry::format_days_label(days),
        message: category.message(),
        severity: category.severity(),
        action_needed: expiry::needs_immediate_action(days),
        source_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::date_after_days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn sample(kind: &str, name: &str, offset_days: i64) -> Product {
        Product {
            kind: ProductKind::from(kind),
            name: name.into(),
            quantity: 1,
            expiry: date_after_days(today(), offset_days),
            details: String::new(),
            status: None,
        }
    }

    /// Storage order is deliberately not expiry order.
    fn dummy_collection() -> Vec<Product> {
        vec![
            sample("Grocery Item", "Honey", 200),
            sample("Food Item", "Milk", 5),
            sample("Food Item", "Yogurt", -10),
            sample("Food Item", "Cheddar", 40),
        ]
    }

    fn names(rows: &[ListingRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn unsorted_keeps_storage_order() {
        let rows = build_listing(&dummy_collection(), SortOrder::Unsorted, None, false, today());
        assert_eq!(names(&rows), vec!["Honey", "Milk", "Yogurt", "Cheddar"]);
        assert_eq!(
            rows.iter().map(|r| r.source_index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn time_left_sort_orders_by_days_remaining() {
        let rows = build_listing(&dummy_collection(), SortOrder::TimeLeft, None, false, today());
        assert_eq!(names(&rows), vec!["Yogurt", "Milk", "Cheddar", "Honey"]);

        let severities: Vec<&str> = rows.iter().map(|r| r.severity.as_str()).collect();
        assert_eq!(severities, vec!["expired", "critical", "monitor", "good"]);

        assert_eq!(rows[0].days_label, "Expired");
        assert!(rows[0].action_needed);
        assert_eq!(rows[1].days_label, "5 days left");
        assert!(rows[1].action_needed);
        assert!(!rows[2].action_needed);
        assert_eq!(rows[3].message, "Good Standing!");
    }

    #[test]
    fn item_type_sort_is_lexicographic_by_kind() {
        let rows = build_listing(&dummy_collection(), SortOrder::ItemType, None, false, today());
        let kinds: Vec<&str> = rows.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["Food Item", "Food Item", "Food Item", "Grocery Item"]
        );
        // Stable: records of the same kind keep storage order.
        assert_eq!(names(&rows), vec!["Milk", "Yogurt", "Cheddar", "Honey"]);
    }

    #[test]
    fn critical_only_keeps_expiring_soon_tier_only() {
        let rows = build_listing(&dummy_collection(), SortOrder::Unsorted, None, true, today());
        // The expired record is excluded even though it needs action.
        assert_eq!(names(&rows), vec!["Milk"]);
        assert_eq!(rows[0].severity.as_str(), "critical");
    }

    #[test]
    fn search_ignores_sort_and_critical_flag() {
        let rows = build_listing(
            &dummy_collection(),
            SortOrder::TimeLeft,
            Some("MIL"),
            true,
            today(),
        );
        assert_eq!(names(&rows), vec!["Milk"]);
    }

    #[test]
    fn search_matches_expiry_substring() {
        // Yogurt is the only record expiring on a 5th (2025-06-05).
        let rows = build_listing(
            &dummy_collection(),
            SortOrder::Unsorted,
            Some("06-05"),
            false,
            today(),
        );
        assert_eq!(names(&rows), vec!["Yogurt"]);

        // A month fragment matches every record expiring that month.
        let rows = build_listing(
            &dummy_collection(),
            SortOrder::Unsorted,
            Some("2025-06"),
            false,
            today(),
        );
        assert_eq!(names(&rows), vec!["Milk", "Yogurt"]);
    }

    #[test]
    fn empty_query_matches_every_record_in_storage_order() {
        let rows = build_listing(&dummy_collection(), SortOrder::TimeLeft, Some(""), true, today());
        assert_eq!(names(&rows), vec!["Honey", "Milk", "Yogurt", "Cheddar"]);
    }

    #[test]
    fn source_index_still_addresses_the_stored_record_after_sort() {
        let products = dummy_collection();
        let rows = build_listing(&products, SortOrder::TimeLeft, None, false, today());
        for row in &rows {
            assert_eq!(products[row.source_index].name, row.name);
        }
    }

    #[test]
    fn rows_recompute_tier_and_ignore_persisted_status() {
        let mut stale = sample("Food Item", "Leftovers", 2);
        stale.status = Some(StatusCategory::Great);
        let rows = build_listing(&[stale], SortOrder::Unsorted, None, false, today());
        assert_eq!(rows[0].severity.as_str(), "critical");
        assert_eq!(rows[0].message, "Critical Action Required");
    }

    #[test]
    fn sort_keys_map_like_the_view_options() {
        assert_eq!(SortOrder::from_key("timeLeft"), SortOrder::TimeLeft);
        assert_eq!(SortOrder::from_key("itemType"), SortOrder::ItemType);
        assert_eq!(SortOrder::from_key("none"), SortOrder::Unsorted);
        assert_eq!(SortOrder::from_key("alphabetical"), SortOrder::Unsorted);
    }
}
