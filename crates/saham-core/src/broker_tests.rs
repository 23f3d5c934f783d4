//! Tests for the broker boards.

#[cfg(test)]
mod tests {
    use crate::broker::{
        looks_like_ticker, parse_summary, search, sell_zero_board, transaction_ranking,
        BrokerTotals,
    };

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    // ========================================================================
    // Transaction totals
    // ========================================================================

    #[test]
    fn test_transaction_ranking_skips_header_and_sorts() {
        let rows = vec![
            row(&["Kode", "Nama", "Buy", "Sell", "Value"]),
            row(&["AK", "UBS Sekuritas", "100", "200", "500"]),
            row(&["BB", "Verdhana", "300", "100", "900"]),
            row(&["CS", "Credit Suisse", "50", "20", "100"]),
        ];

        let brokers = transaction_ranking(&rows);

        let codes: Vec<&str> = brokers.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["BB", "AK", "CS"]);
    }

    #[test]
    fn test_all_zero_rows_are_dropped() {
        let rows = vec![
            row(&["Kode", "Nama", "Buy", "Sell", "Value"]),
            row(&["ZZ", "Dormant Sekuritas", "0", "0", "0"]),
        ];

        assert!(transaction_ranking(&rows).is_empty());
    }

    #[test]
    fn test_rows_without_name_are_dropped() {
        assert!(BrokerTotals::from_row(&row(&["AK", "", "1", "2", "3"])).is_none());
        assert!(BrokerTotals::from_row(&row(&["AK"])).is_none());
    }

    #[test]
    fn test_thousands_separated_values_parse() {
        let totals = BrokerTotals::from_row(&row(&["AK", "UBS", "1,234", "0", "5,678"]))
            .expect("valid row");
        assert_eq!(totals.total_buy, 1234.0);
        assert_eq!(totals.total_value, 5678.0);
    }

    #[test]
    fn test_token_search_matches_code_or_name() {
        let brokers = transaction_ranking(&[
            row(&["header", "x", "0", "0", "0"]),
            row(&["AK", "UBS Sekuritas Indonesia", "1", "1", "1"]),
            row(&["MG", "Semesta Indovest", "1", "1", "1"]),
        ]);

        assert_eq!(search(&brokers, "ak").len(), 1);
        assert_eq!(search(&brokers, "indo").len(), 2);
        // Every token must match the same broker.
        assert_eq!(search(&brokers, "ubs, indonesia").len(), 1);
        assert_eq!(search(&brokers, "ubs semesta").len(), 0);
        assert_eq!(search(&brokers, "  ").len(), 2);
    }

    // ========================================================================
    // Daily summary
    // ========================================================================

    #[test]
    fn test_ticker_shape() {
        assert!(looks_like_ticker("BUMI"));
        assert!(looks_like_ticker("KREN"));
        assert!(looks_like_ticker("AK"));
        assert!(!looks_like_ticker("A"));
        assert!(!looks_like_ticker("TOOLONG"));
        assert!(!looks_like_ticker("bumi"));
        assert!(!looks_like_ticker("BU1"));
        assert!(!looks_like_ticker(""));
    }

    #[test]
    fn test_parse_summary_skips_banner_rows() {
        let rows = vec![
            row(&["Ringkasan Transaksi Harian"]),
            row(&["", "", ""]),
            row(&["Code", "Net Val(M)", "Net Vol"]),
            row(&["BUMI", "1,500", "2,000", "10", "20", "5", "100", "50", "120"]),
            row(&["KREN", "-300", "400"]),
        ];

        let summaries = parse_summary(&rows);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].code, "BUMI");
        assert_eq!(summaries[0].net_val_m, 1500.0);
        assert_eq!(summaries[0].buy_vol, 100.0);
        assert_eq!(summaries[1].net_val_m, -300.0);
    }

    #[test]
    fn test_parse_summary_strips_bom() {
        let rows = vec![
            row(&["Code", "Net Val(M)"]),
            row(&["\u{feff}BUMI", "10"]),
        ];

        let summaries = parse_summary(&rows);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].code, "BUMI");
    }

    #[test]
    fn test_parse_summary_drops_trailing_junk() {
        let rows = vec![
            row(&["Code"]),
            row(&["BUMI", "1"]),
            row(&["Total", "99"]),
        ];

        let summaries = parse_summary(&rows);

        assert_eq!(summaries.len(), 1);
    }

    #[test]
    fn test_sell_zero_board_orders_by_buy_volume() {
        let rows = vec![
            row(&["Code", "", "", "", "", "", ""]),
            // code, net val, net vol, fr net val, fr net vol, buy freq, buy vol, buy val, buy avg, sell freq, sell vol
            row(&["AAAA", "0", "0", "0", "0", "1", "100", "0", "0", "0", "0"]),
            row(&["BBBB", "0", "0", "0", "0", "1", "300", "0", "0", "0", "50"]),
            row(&["CCCC", "0", "0", "0", "0", "1", "200", "0", "0", "0", "0"]),
        ];
        let summaries = parse_summary(&rows);

        let board = sell_zero_board(&summaries);

        let codes: Vec<&str> = board.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["CCCC", "AAAA"]);
    }
}
