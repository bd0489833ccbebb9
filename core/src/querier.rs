#![deny(missing_docs)]

//! # Querier Contract
//!
//! The custom querier interface contributes one method beyond the generated
//! CRUD defaults: `FilterWithTime`, a time-range filter over `created_time`.
//! The ORM generator expands its SQL template at query time; this module
//! holds the template text emitted into the querier source file and
//! `time_filter_where`, the executable expansion of the template's
//! conditional logic.

/// Raw SQL template lines attached to the `FilterWithTime` method.
///
/// The `{{if}}` guards are the ORM generator's own template syntax and are
/// expanded by the generated query code, not by this tool.
pub const FILTER_WITH_TIME_SQL: &[&str] = &[
    "SELECT * FROM @@table",
    "\t{{where}}",
    "\t\t{{if !begin.IsZero()}}",
    "\t\t\tcreated_time > @begin",
    "\t\t{{end}}",
    "\t\t{{if !end.IsZero()}}",
    "\t\t\tAND created_time < @end",
    "\t\t{{end}}",
    "\t{{end}}",
];

/// The method comment block as it appears in the emitted querier file,
/// indented for an interface body.
pub fn filter_with_time_doc() -> String {
    let mut lines = vec!["\t// FilterWithTime".to_string()];
    for line in FILTER_WITH_TIME_SQL {
        lines.push(format!("\t//\t{line}"));
    }
    lines.join("\n")
}

/// Expands the time-range filter for a pair of unix timestamps, where `0`
/// is the zero value.
///
/// This mirrors the conditional logic of [`FILTER_WITH_TIME_SQL`]: a zero
/// bound is omitted, both bounds are joined with `AND`, and the `WHERE`
/// keyword disappears with the last condition.
pub fn time_filter_where(begin: i64, end: i64) -> String {
    let mut conditions = Vec::new();
    if begin != 0 {
        conditions.push("created_time > @begin");
    }
    if end != 0 {
        conditions.push("created_time < @end");
    }
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_both_bounds_zero_emits_nothing() {
        assert_eq!(time_filter_where(0, 0), "");
    }

    #[test]
    fn test_zero_begin_emits_only_upper_bound() {
        assert_eq!(time_filter_where(0, 1700000000), "WHERE created_time < @end");
    }

    #[test]
    fn test_zero_end_emits_only_lower_bound() {
        assert_eq!(
            time_filter_where(1690000000, 0),
            "WHERE created_time > @begin"
        );
    }

    #[test]
    fn test_both_bounds_joined_by_and() {
        assert_eq!(
            time_filter_where(1690000000, 1700000000),
            "WHERE created_time > @begin AND created_time < @end"
        );
    }

    #[test]
    fn test_doc_block_carries_the_raw_template() {
        let doc = filter_with_time_doc();
        assert!(doc.starts_with("\t// FilterWithTime"));
        assert!(doc.contains("@@table"));
        assert!(doc.contains("created_time > @begin"));
        assert!(doc.contains("created_time < @end"));
    }
}
