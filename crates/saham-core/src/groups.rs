//! Broker-group classification table.
//!
//! Which broker belongs to which market segment ("Bandar Asing",
//! "Smartmoney", ...) is business knowledge, not derived logic: the default
//! table mirrors the upstream classification verbatim, overlaps included,
//! and an operator can replace it wholesale through the `[groups]` section
//! of the configuration file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bucket for brokers no group claims.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Group name to member broker codes, in display order. Membership may
/// overlap: a broker can sit in several groups at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrokerGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl BrokerGroups {
    /// Creates a table from explicit entries.
    #[must_use]
    pub fn new(groups: IndexMap<String, Vec<String>>) -> Self {
        Self { groups }
    }

    /// Group names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Member codes of a group; empty for unknown groups.
    #[must_use]
    pub fn members(&self, group: &str) -> &[String] {
        match self.groups.get(group) {
            Some(members) => members.as_slice(),
            None => &[],
        }
    }

    /// Every group a broker belongs to, in table order. Codes compare
    /// case-insensitively after trimming. Brokers no group claims fall into
    /// [`UNKNOWN_GROUP`].
    #[must_use]
    pub fn groups_for(&self, code: &str) -> Vec<&str> {
        let code = code.trim().to_uppercase();
        let mut out: Vec<&str> = self
            .groups
            .iter()
            .filter(|(_, members)| members.iter().any(|m| m.trim().to_uppercase() == code))
            .map(|(name, _)| name.as_str())
            .collect();
        if out.is_empty() {
            out.push(UNKNOWN_GROUP);
        }
        out
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true when no groups are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for BrokerGroups {
    fn default() -> Self {
        let entry = |name: &str, codes: &[&str]| {
            (
                name.to_string(),
                codes.iter().map(ToString::to_string).collect::<Vec<_>>(),
            )
        };
        Self {
            groups: IndexMap::from_iter([
                entry("Bandar Asing", &["AK", "BK", "RX"]),
                entry(
                    "Foreign",
                    &[
                        "ZP", "YU", "KZ", "DR", "RB", "AG", "FS", "XA", "CS", "GW", "DP", "AI",
                        "LS", "LH", "AH", "DU", "MS", "CG", "TP", "BQ", "HD",
                    ],
                ),
                entry("Bandar Lokal", &["BB", "RF", "KI", "MG", "LG"]),
                entry("Zombie", &["SS", "PP", "IN", "PG", "FZ"]),
                entry(
                    "Smartmoney",
                    &["RF", "AK", "BK", "BB", "DX", "ZP", "HP", "KZ", "RX"],
                ),
                entry("Ritel", &["YP", "XC", "XL", "PD", "KK", "CP", "AZ"]),
                entry("BUMN", &["CC"]),
                entry("BUMD", &["SQ"]),
                entry(
                    "Lokal",
                    &[
                        "MK", "BW", "DB", "HG", "ML", "PI", "EL", "MI", "EP", "IF", "AZ", "ZR",
                        "AN", "MU", "YJ", "BJ", "BM", "TA", "LK", "BD", "KW", "PK", "FM", "KS",
                        "BR", "RG", "ES", "ID", "QA", "SF", "GA", "PS", "OK", "JB", "YB", "TS",
                        "FG", "PC", "PP", "AT", "PO", "AR", "SA", "FO", "IT", "SC", "SD", "SY",
                        "CM", "FA", "SP", "WW", "DS", "SM", "DG", "BP", "AY", "KC", "HK", "IH",
                        "PG", "GR", "PF", "DM", "DH", "SH", "AD", "BS", "RO", "AP", "II", "BZ",
                        "AF", "DD", "RS", "AO", "IU", "BF", "TX", "YO", "CD", "IP", "TF",
                    ],
                ),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_expected_groups() {
        let groups = BrokerGroups::default();
        let names: Vec<&str> = groups.names().collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Bandar Asing");
        assert_eq!(groups.members("BUMN"), &["CC".to_string()][..]);
    }

    #[test]
    fn test_overlapping_membership() {
        let groups = BrokerGroups::default();
        // AK sits in both Bandar Asing and Smartmoney.
        assert_eq!(groups.groups_for("AK"), vec!["Bandar Asing", "Smartmoney"]);
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        let groups = BrokerGroups::default();
        assert_eq!(groups.groups_for(" ak "), vec!["Bandar Asing", "Smartmoney"]);
    }

    #[test]
    fn test_unclaimed_broker_is_unknown() {
        let groups = BrokerGroups::default();
        assert_eq!(groups.groups_for("QQ"), vec![UNKNOWN_GROUP]);
    }

    #[test]
    fn test_toml_roundtrip() {
        let groups = BrokerGroups::default();
        let toml = toml::to_string(&groups).expect("serialize");
        let back: BrokerGroups = toml::from_str(&toml).expect("deserialize");
        assert_eq!(back, groups);
    }
}
