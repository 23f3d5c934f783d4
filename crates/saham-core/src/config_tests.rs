//! Tests for the configuration module.

#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, SahamConfig};

    // ========================================================================
    // Defaults
    // ========================================================================

    #[test]
    fn test_defaults_are_valid() {
        let config = SahamConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.display.per_page, 10);
        assert_eq!(config.display.top_flows, 20);
        assert_eq!(config.screener.max_per, 10.0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.groups.is_empty());
    }

    #[test]
    fn test_defaults_roundtrip_through_toml() {
        let config = SahamConfig::default();

        let toml = config.to_toml().expect("serialize");
        let back = SahamConfig::from_toml(&toml).expect("parse");

        assert_eq!(back.display.per_page, config.display.per_page);
        assert_eq!(back.screener.max_per, config.screener.max_per);
        assert_eq!(back.groups, config.groups);
    }

    // ========================================================================
    // Layering
    // ========================================================================

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = SahamConfig::from_toml(
            r#"
            [display]
            per_page = 25

            [screener]
            max_per = 15.0
            "#,
        )
        .expect("parse");

        assert_eq!(config.display.per_page, 25);
        assert_eq!(config.display.top_flows, 20);
        assert_eq!(config.screener.max_per, 15.0);
        assert_eq!(config.screener.min_roe, 10.0);
    }

    #[test]
    fn test_groups_override_merges_by_group_name() {
        let config = SahamConfig::from_toml(
            r#"
            [groups]
            "Inner Circle" = ["AK", "BK"]
            "Bandar Asing" = ["ZZ"]
            "#,
        )
        .expect("parse");

        // New groups extend the table; redefining a group replaces its members.
        let groups = config.groups.groups_for("AK");
        assert!(groups.contains(&"Inner Circle"));
        assert!(groups.contains(&"Smartmoney"));
        assert!(!groups.contains(&"Bandar Asing"));
        assert_eq!(config.groups.members("Bandar Asing"), &["ZZ".to_string()][..]);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            SahamConfig::load_from_path("definitely-not-here.toml").expect("defaults load");
        assert_eq!(config.display.per_page, 10);
    }

    #[test]
    fn test_file_layer_is_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saham.toml");
        std::fs::write(&path, "[display]\nper_page = 7\n").expect("write config");

        let config = SahamConfig::load_from_path(&path).expect("load");

        assert_eq!(config.display.per_page, 7);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_zero_per_page_is_rejected() {
        let mut config = SahamConfig::default();
        config.display.per_page = 0;

        let err = config.validate().expect_err("must reject");
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "display.per_page"));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut config = SahamConfig::default();
        config.logging.level = "verbose".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_threshold_is_rejected() {
        let mut config = SahamConfig::default();
        config.screener.max_pbv = f64::NAN;

        assert!(config.validate().is_err());
    }
}
