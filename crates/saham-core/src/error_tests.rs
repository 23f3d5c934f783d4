//! Tests for error codes and conversions.

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn test_error_codes_match_display() {
        let err = Error::Decode("bad sheet".into());
        assert_eq!(err.code(), "SAHAM-002");
        assert!(err.to_string().starts_with("[SAHAM-002]"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.code(), "SAHAM-001");
    }

    #[test]
    fn test_parse_error_converts_to_query() {
        let parse = crate::query::ParseError::syntax(0, "PER <", "expected number");
        let err: Error = parse.into();
        assert_eq!(err.code(), "SAHAM-004");
        assert!(err.to_string().contains("expected number"));
    }
}
