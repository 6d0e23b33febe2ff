//! Property-based tests for the query engines.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};

use super::filter::FilterEngine;
use super::sort::SortEngine;
use super::types::{RangeFilter, SortSpec};
use crate::statement::Record;

/// Strategy for one annual statement. `revenue` and `netIncome` are
/// sometimes absent; `date` is always present.
fn statement() -> impl Strategy<Value = Record> {
    (
        1990i64..2030,
        proptest::option::of(0i64..1_000),
        proptest::option::of(-100i64..100),
        0u32..4,
    )
        .prop_map(|(year, revenue, net_income, tag)| {
            let mut fields = Map::new();
            fields.insert("date".into(), json!(format!("{year}-12-31")));
            if let Some(revenue) = revenue {
                fields.insert("revenue".into(), json!(revenue));
            }
            if let Some(net_income) = net_income {
                fields.insert("netIncome".into(), json!(net_income));
            }
            fields.insert("tag".into(), json!(tag));
            Record::new(fields)
        })
}

fn dataset() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(statement(), 0..30)
}

/// Strategy for a filter on one of the generated fields, occasionally
/// missing a bound.
fn range_filter() -> impl Strategy<Value = RangeFilter> {
    let field = prop_oneof![
        Just(("revenue", 0i64, 1_000i64)),
        Just(("netIncome", -100, 100)),
        Just(("date", 1985, 2035)),
    ];

    field.prop_flat_map(|(name, lo, hi)| {
        (
            proptest::option::weighted(0.9, lo..hi),
            proptest::option::weighted(0.9, lo..hi),
        )
            .prop_map(move |(min, max)| {
                RangeFilter::new(name, min.map(Decimal::from), max.map(Decimal::from))
            })
    })
}

fn filters() -> impl Strategy<Value = Vec<RangeFilter>> {
    prop::collection::vec(range_filter(), 0..4)
}

fn is_subsequence(needle: &[Record], haystack: &[Record]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|item| rest.any(|candidate| candidate == item))
}

fn year_of(record: &Record) -> i64 {
    record
        .get("date")
        .and_then(Value::as_str)
        .and_then(|date| date[..4].parse().ok())
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Filtering twice with the same filters changes nothing.
    #[test]
    fn prop_filter_is_idempotent(records in dataset(), filters in filters()) {
        let once = FilterEngine::apply(&records, &filters).unwrap();
        let twice = FilterEngine::apply(&once, &filters).unwrap();

        prop_assert_eq!(twice, once);
    }

    /// Adding filters only ever removes records, never reorders them.
    #[test]
    fn prop_filter_is_monotonic(
        records in dataset(),
        base in filters(),
        extra in filters(),
    ) {
        let narrow_filters: Vec<RangeFilter> = base.iter().chain(extra.iter()).cloned().collect();

        let wide = FilterEngine::apply(&records, &base).unwrap();
        let narrow = FilterEngine::apply(&records, &narrow_filters).unwrap();

        prop_assert!(is_subsequence(&narrow, &wide));
        prop_assert!(is_subsequence(&wide, &records));
    }

    /// Descending output is exactly the ascending output reversed, ties included.
    #[test]
    fn prop_descending_is_reversed_ascending(
        records in dataset(),
        field in prop_oneof![Just("date"), Just("tag")],
    ) {
        let ascending = SortEngine::apply(records.clone(), &SortSpec::ascending(field)).unwrap();
        let mut descending = SortEngine::apply(records, &SortSpec::descending(field)).unwrap();
        descending.reverse();

        prop_assert_eq!(descending, ascending);
    }

    /// Sorting is stable: records already ordered by year stay put.
    #[test]
    fn prop_sorting_sorted_dataset_is_identity(mut records in dataset()) {
        records.sort_by_key(year_of);

        let unfiltered = FilterEngine::apply(&records, &[]).unwrap();
        let sorted = SortEngine::apply(unfiltered, &SortSpec::ascending("date")).unwrap();

        prop_assert_eq!(sorted, records);
    }

    /// Ascending output is non-decreasing by key.
    #[test]
    fn prop_ascending_is_ordered(records in dataset()) {
        let sorted = SortEngine::apply(records, &SortSpec::ascending("date")).unwrap();
        let years: Vec<i64> = sorted.iter().map(year_of).collect();

        prop_assert!(years.windows(2).all(|w| w[0] <= w[1]));
    }
}

mod unit_tests {
    use super::*;
    use crate::query::{Query, QueryEngine, QueryError};

    fn records(raw: Value) -> Vec<Record> {
        Record::parse_dataset(raw).unwrap()
    }

    fn two_periods() -> Vec<Record> {
        records(json!([
            {"revenue": 100, "date": "2020-01-01"},
            {"revenue": 200, "date": "2021-01-01"},
        ]))
    }

    #[test]
    fn test_revenue_range() {
        let result = QueryEngine::run_raw(&two_periods(), r#"{"fields": {"revenue": [150, 300]}}"#).unwrap();
        assert_eq!(result, records(json!([{"revenue": 200, "date": "2021-01-01"}])));
    }

    #[test]
    fn test_single_year_range() {
        let result = QueryEngine::run_raw(&two_periods(), r#"{"fields": {"date": [2020, 2020]}}"#).unwrap();
        assert_eq!(result, records(json!([{"revenue": 100, "date": "2020-01-01"}])));
    }

    #[test]
    fn test_sort_by_revenue() {
        let dataset = records(json!([
            {"revenue": 300, "date": "2019-12-31"},
            {"revenue": 100, "date": "2020-12-31"},
        ]));

        let result = QueryEngine::run_raw(&dataset, r#"{"sort_field": "revenue"}"#).unwrap();

        assert_eq!(
            result,
            records(json!([
                {"revenue": 100, "date": "2020-12-31"},
                {"revenue": 300, "date": "2019-12-31"},
            ]))
        );
    }

    #[test]
    fn test_sort_by_absent_field() {
        let err = QueryEngine::run_raw(&two_periods(), r#"{"sort_field": "operatingIncome"}"#).unwrap_err();
        assert_eq!(err, QueryError::InvalidField("operatingIncome".to_string()));
    }

    #[test]
    fn test_empty_dataset_any_query() {
        let query = Query::parse(
            r#"{"sort_field": "anything", "ascending": false, "fields": {"revenue": [0, 1]}}"#,
        )
        .unwrap();

        assert!(QueryEngine::run(&[], &query).unwrap().is_empty());
    }

    #[test]
    fn test_missing_numeric_field_excluded() {
        let dataset = records(json!([{"date": "2020-01-01"}, {"date": "2021-01-01", "grossProfit": 50}]));

        let result = QueryEngine::run_raw(&dataset, r#"{"fields": {"grossProfit": [0, 100]}}"#).unwrap();

        assert_eq!(result, records(json!([{"date": "2021-01-01", "grossProfit": 50}])));
    }
}
