//! Tests for the snapshot ranking boards.

#[cfg(test)]
mod tests {
    use crate::rank::{self, columns, rank_by, top_by};
    use crate::record::normalize_rows;
    use crate::sort::SortDirection;
    use crate::value::{RawRecord, RawValue};

    fn snapshot(entries: &[(&str, f64, f64, f64)]) -> Vec<crate::record::Record> {
        let raw: Vec<RawRecord> = entries
            .iter()
            .map(|(code, volume, fbuy, fsell)| {
                let mut r = RawRecord::new();
                r.insert("Kode Saham".to_string(), RawValue::from(*code));
                r.insert(rank::VOLUME.to_string(), RawValue::Number(*volume));
                r.insert(rank::FOREIGN_BUY.to_string(), RawValue::Number(*fbuy));
                r.insert(rank::FOREIGN_SELL.to_string(), RawValue::Number(*fsell));
                r
            })
            .collect();
        normalize_rows(&columns(), &raw)
    }

    #[test]
    fn test_rank_by_volume_descending() {
        let rows = snapshot(&[
            ("AAAA", 100.0, 0.0, 0.0),
            ("BBBB", 300.0, 0.0, 0.0),
            ("CCCC", 200.0, 0.0, 0.0),
        ]);

        let ranked = rank_by(&rows, rank::VOLUME, SortDirection::Descending);

        let codes: Vec<&str> = ranked.iter().map(|r| r.text("Kode Saham")).collect();
        assert_eq!(codes, vec!["BBBB", "CCCC", "AAAA"]);
        assert_eq!(ranked[0].number(rank::RANKING), 1.0);
        assert_eq!(ranked[2].number(rank::RANKING), 3.0);
    }

    #[test]
    fn test_top_foreign_buy_board_re_ranks() {
        let rows = snapshot(&[
            ("AAAA", 100.0, 5.0, 0.0),
            ("BBBB", 300.0, 50.0, 0.0),
            ("CCCC", 200.0, 20.0, 0.0),
        ]);

        let board = top_by(&rows, rank::FOREIGN_BUY, 2);

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].text("Kode Saham"), "BBBB");
        assert_eq!(board[1].text("Kode Saham"), "CCCC");
        assert_eq!(board[1].number(rank::RANKING), 2.0);
    }

    #[test]
    fn test_top_board_shorter_than_n() {
        let rows = snapshot(&[("AAAA", 100.0, 5.0, 0.0)]);
        let board = top_by(&rows, rank::FOREIGN_SELL, 10);
        assert_eq!(board.len(), 1);
    }
}
