//! Tests for sorting.

#[cfg(test)]
mod tests {
    use crate::record::normalize_rows;
    use crate::schema::{ColumnSpec, Schema};
    use crate::sort::{sort_records, SortDirection, SortState};
    use crate::value::{RawRecord, RawValue};

    fn schema() -> Schema {
        Schema::new(vec![
            ColumnSpec::text("Kode Saham"),
            ColumnSpec::number("v"),
        ])
    }

    fn rows(entries: &[(&str, f64)]) -> Vec<crate::record::Record> {
        let raw: Vec<RawRecord> = entries
            .iter()
            .map(|(code, v)| {
                let mut r = RawRecord::new();
                r.insert("Kode Saham".to_string(), RawValue::from(*code));
                r.insert("v".to_string(), RawValue::Number(*v));
                r
            })
            .collect();
        normalize_rows(&schema(), &raw)
    }

    #[test]
    fn test_numeric_ascending_sort() {
        let mut records = rows(&[("A", 3.0), ("B", 1.0), ("C", 2.0)]);

        sort_records(&mut records, &schema(), "v", SortDirection::Ascending);

        let values: Vec<f64> = records.iter().map(|r| r.number("v")).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_numeric_descending_sort() {
        let mut records = rows(&[("A", 3.0), ("B", 1.0), ("C", 2.0)]);

        sort_records(&mut records, &schema(), "v", SortDirection::Descending);

        let values: Vec<f64> = records.iter().map(|r| r.number("v")).collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let mut records = rows(&[("bbca", 0.0), ("AALI", 0.0), ("Bbri", 0.0)]);

        sort_records(&mut records, &schema(), "Kode Saham", SortDirection::Ascending);

        let codes: Vec<&str> = records.iter().map(|r| r.text("Kode Saham")).collect();
        assert_eq!(codes, vec!["AALI", "bbca", "Bbri"]);
    }

    #[test]
    fn test_numeric_sort_coerces_string_cells() {
        // A text-typed cell in a numeric column still sorts numerically.
        let mut records = rows(&[("A", 0.0), ("B", 0.0)]);
        records[0].set("v", crate::value::Value::Text("1,000".into()));
        records[1].set("v", crate::value::Value::Number(20.0));

        sort_records(&mut records, &schema(), "v", SortDirection::Ascending);

        assert_eq!(records[0].number("v"), 20.0);
        assert_eq!(records[1].number("v"), 1000.0);
    }

    #[test]
    fn test_click_same_column_flips_direction() {
        let mut state = SortState::default();

        assert_eq!(state.click("PER"), SortDirection::Ascending);
        assert_eq!(state.click("PER"), SortDirection::Descending);
        assert_eq!(state.click("PER"), SortDirection::Ascending);
    }

    #[test]
    fn test_click_other_column_resets_to_ascending() {
        let mut state = SortState::default();
        state.click("PER");
        state.click("PER");
        assert_eq!(state.direction(), SortDirection::Descending);

        assert_eq!(state.click("PBV"), SortDirection::Ascending);
        assert_eq!(state.column(), Some("PBV"));
    }

    #[test]
    fn test_clear_resets_state() {
        let mut state = SortState::default();
        state.click("PER");

        state.clear();

        assert_eq!(state.column(), None);
        assert_eq!(state.direction(), SortDirection::Ascending);
    }
}
