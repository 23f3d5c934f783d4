//! Tests for record normalization.

#[cfg(test)]
mod tests {
    use crate::record::{normalize, normalize_rows};
    use crate::schema::{ColumnSpec, Schema};
    use crate::value::{RawRecord, RawValue, Value};

    fn screener_like_schema() -> Schema {
        Schema::new(vec![
            ColumnSpec::text("No"),
            ColumnSpec::text("Kode Saham"),
            ColumnSpec::number("PER"),
            ColumnSpec::percent("ROE %"),
        ])
        .with_sequence_column("No")
    }

    fn raw(entries: &[(&str, RawValue)]) -> RawRecord {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_missing_columns_get_typed_defaults() {
        // Arrange
        let schema = screener_like_schema();
        let row = raw(&[("Kode Saham", RawValue::from("BBCA"))]);

        // Act
        let record = normalize(&schema, &row, 0);

        // Assert: every declared column is present with its default
        assert_eq!(record.len(), 4);
        assert_eq!(record.text("Kode Saham"), "BBCA");
        assert_eq!(record.number("PER"), 0.0);
        assert_eq!(record.number("ROE %"), 0.0);
    }

    #[test]
    fn test_formatted_numbers_are_coerced() {
        let schema = screener_like_schema();
        let row = raw(&[
            ("PER", RawValue::from("8.5")),
            ("ROE %", RawValue::from("15.2%")),
        ]);

        let record = normalize(&schema, &row, 0);

        assert_eq!(record.number("PER"), 8.5);
        assert_eq!(record.number("ROE %"), 15.2);
    }

    #[test]
    fn test_unparseable_cell_degrades_to_zero() {
        let schema = screener_like_schema();
        let row = raw(&[("PER", RawValue::from("n/a"))]);

        let record = normalize(&schema, &row, 0);

        assert_eq!(record.number("PER"), 0.0);
    }

    #[test]
    fn test_sequence_column_is_synthesized_in_order() {
        let schema = screener_like_schema();
        let rows = vec![
            raw(&[("Kode Saham", RawValue::from("AAAA"))]),
            raw(&[("Kode Saham", RawValue::from("BBBB"))]),
        ];

        let records = normalize_rows(&schema, &rows);

        assert_eq!(records[0].text("No"), "1");
        assert_eq!(records[1].text("No"), "2");
    }

    #[test]
    fn test_present_sequence_value_is_kept() {
        let schema = screener_like_schema();
        let row = raw(&[("No", RawValue::from("7"))]);

        let record = normalize(&schema, &row, 0);

        assert_eq!(record.text("No"), "7");
    }

    #[test]
    fn test_numeric_cell_in_text_column_renders_without_decimal() {
        let schema = screener_like_schema();
        let row = raw(&[("Kode Saham", RawValue::Number(123.0))]);

        let record = normalize(&schema, &row, 0);

        assert_eq!(record.text("Kode Saham"), "123");
    }

    #[test]
    fn test_undeclared_source_columns_are_dropped() {
        let schema = screener_like_schema();
        let row = raw(&[
            ("Kode Saham", RawValue::from("BBRI")),
            ("Unrelated", RawValue::from("x")),
        ]);

        let record = normalize(&schema, &row, 0);

        assert!(record.get("Unrelated").is_none());
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_record_serializes_as_map() {
        let schema = screener_like_schema();
        let row = raw(&[
            ("Kode Saham", RawValue::from("BBCA")),
            ("PER", RawValue::Number(9.0)),
        ]);
        let record = normalize(&schema, &row, 0);

        let json = serde_json::to_value(&record).expect("serialize");

        assert_eq!(json["Kode Saham"], "BBCA");
        assert_eq!(json["PER"], 9.0);
    }

    #[test]
    fn test_value_text_view_of_number() {
        let v = Value::Number(10.0);
        assert_eq!(v.as_text(), "10");
    }
}
