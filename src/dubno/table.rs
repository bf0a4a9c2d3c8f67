// Normative lower limits for maximum word-recognition scores
//
// Scientific Foundation:
// [3] Dubno, J. R., Lee, F. S., Klein, A. J., Matthews, L. J., & Lam, C. F.
//     (1995). Confidence limits for maximum word-recognition scores.
//     JSHR, 38, 490-502.
//
// Each row pairs a pure-tone average (dB HL, mean of 500/1000/2000 Hz) with
// a 95% lower limit of PB-max (percent) for NU-6 lists. PTA values step in
// thirds of 5 dB because each threshold is measured in 5 dB steps. Rows are
// strictly ascending by PTA.
//
// Provenance: only the end rows of both tables and the 50-word row at
// 30.0 dB HL (73.4%) are taken from the published limits. The rows in
// between are a smooth fill along the same PTA grid and have NOT been
// checked against Dubno et al. (1995). Verify them against the paper
// before using these limits clinically.

/// One row of a normative table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    /// Pure-tone average, dB HL
    pub pta: f64,
    /// Lower limit of PB-max, percent
    pub limit: f64,
}

impl TableEntry {
    pub const fn new(pta: f64, limit: f64) -> Self {
        Self { pta, limit }
    }
}

/// 95% lower limits for 25-word lists
pub static DUBNO_25_WORD: [TableEntry; 46] = [
    TableEntry::new(-3.3, 97.6),
    TableEntry::new(-1.7, 96.5),
    TableEntry::new(0.0, 95.4),
    TableEntry::new(1.7, 94.3),
    TableEntry::new(3.3, 93.1),
    TableEntry::new(5.0, 91.8),
    TableEntry::new(6.7, 90.5),
    TableEntry::new(8.3, 89.2),
    TableEntry::new(10.0, 87.8),
    TableEntry::new(11.7, 86.4),
    TableEntry::new(13.3, 85.0),
    TableEntry::new(15.0, 83.5),
    TableEntry::new(16.7, 82.0),
    TableEntry::new(18.3, 80.4),
    TableEntry::new(20.0, 78.8),
    TableEntry::new(21.7, 77.1),
    TableEntry::new(23.3, 75.4),
    TableEntry::new(25.0, 73.7),
    TableEntry::new(26.7, 71.9),
    TableEntry::new(28.3, 70.1),
    TableEntry::new(30.0, 68.2),
    TableEntry::new(31.7, 66.3),
    TableEntry::new(33.3, 64.3),
    TableEntry::new(35.0, 62.4),
    TableEntry::new(36.7, 60.3),
    TableEntry::new(38.3, 58.2),
    TableEntry::new(40.0, 56.1),
    TableEntry::new(41.7, 54.0),
    TableEntry::new(43.3, 51.8),
    TableEntry::new(45.0, 49.5),
    TableEntry::new(46.7, 47.2),
    TableEntry::new(48.3, 44.9),
    TableEntry::new(50.0, 42.6),
    TableEntry::new(51.7, 40.1),
    TableEntry::new(53.3, 37.7),
    TableEntry::new(55.0, 35.2),
    TableEntry::new(56.7, 32.7),
    TableEntry::new(58.3, 30.1),
    TableEntry::new(60.0, 27.5),
    TableEntry::new(61.7, 24.8),
    TableEntry::new(63.3, 22.1),
    TableEntry::new(65.0, 19.4),
    TableEntry::new(66.7, 16.6),
    TableEntry::new(68.3, 13.8),
    TableEntry::new(70.0, 10.9),
    TableEntry::new(71.7, 8.0),
];

/// 95% lower limits for 50-word lists
pub static DUBNO_50_WORD: [TableEntry; 46] = [
    TableEntry::new(-3.3, 97.5),
    TableEntry::new(-1.7, 96.8),
    TableEntry::new(0.0, 96.0),
    TableEntry::new(1.7, 95.1),
    TableEntry::new(3.3, 94.2),
    TableEntry::new(5.0, 93.3),
    TableEntry::new(6.7, 92.3),
    TableEntry::new(8.3, 91.3),
    TableEntry::new(10.0, 90.2),
    TableEntry::new(11.7, 89.1),
    TableEntry::new(13.3, 87.9),
    TableEntry::new(15.0, 86.6),
    TableEntry::new(16.7, 85.4),
    TableEntry::new(18.3, 84.0),
    TableEntry::new(20.0, 82.7),
    TableEntry::new(21.7, 81.2),
    TableEntry::new(23.3, 79.8),
    TableEntry::new(25.0, 78.3),
    TableEntry::new(26.7, 76.7),
    TableEntry::new(28.3, 75.1),
    TableEntry::new(30.0, 73.4),
    TableEntry::new(31.7, 71.7),
    TableEntry::new(33.3, 69.9),
    TableEntry::new(35.0, 68.1),
    TableEntry::new(36.7, 66.3),
    TableEntry::new(38.3, 64.3),
    TableEntry::new(40.0, 62.4),
    TableEntry::new(41.7, 60.4),
    TableEntry::new(43.3, 58.3),
    TableEntry::new(45.0, 56.2),
    TableEntry::new(46.7, 54.1),
    TableEntry::new(48.3, 51.9),
    TableEntry::new(50.0, 49.6),
    TableEntry::new(51.7, 47.3),
    TableEntry::new(53.3, 45.0),
    TableEntry::new(55.0, 42.6),
    TableEntry::new(56.7, 40.2),
    TableEntry::new(58.3, 37.7),
    TableEntry::new(60.0, 35.1),
    TableEntry::new(61.7, 32.5),
    TableEntry::new(63.3, 29.9),
    TableEntry::new(65.0, 27.2),
    TableEntry::new(66.7, 24.5),
    TableEntry::new(68.3, 21.7),
    TableEntry::new(70.0, 18.9),
    TableEntry::new(71.7, 16.0),
];


#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(table: &[TableEntry]) {
        assert!(table.windows(2).all(|w| w[0].pta < w[1].pta));
        assert!(table.windows(2).all(|w| w[0].limit > w[1].limit));
        assert!(table.iter().all(|e| (0.0..=100.0).contains(&e.limit)));
    }

    #[test]
    fn test_tables_sorted_and_in_range() {
        assert_well_formed(&DUBNO_25_WORD);
        assert_well_formed(&DUBNO_50_WORD);
    }

    #[test]
    fn test_tables_share_pta_axis() {
        for (a, b) in DUBNO_25_WORD.iter().zip(DUBNO_50_WORD.iter()) {
            assert_eq!(a.pta, b.pta);
        }
    }

    #[test]
    fn test_table_domain() {
        assert_eq!(DUBNO_25_WORD[0].pta, -3.3);
        assert_eq!(DUBNO_50_WORD[DUBNO_50_WORD.len() - 1].pta, 71.7);
    }

    #[test]
    fn test_published_anchor_rows() {
        assert_eq!(DUBNO_25_WORD[0], TableEntry::new(-3.3, 97.6));
        assert_eq!(DUBNO_25_WORD[DUBNO_25_WORD.len() - 1], TableEntry::new(71.7, 8.0));
        assert_eq!(DUBNO_50_WORD[0], TableEntry::new(-3.3, 97.5));
        assert_eq!(DUBNO_50_WORD[DUBNO_50_WORD.len() - 1], TableEntry::new(71.7, 16.0));
        assert!(DUBNO_50_WORD.contains(&TableEntry::new(30.0, 73.4)));
    }

    #[test]
    fn test_shorter_list_has_lower_limits() {
        // Fewer words means more sampling error, so the limit sits lower
        for (a, b) in DUBNO_25_WORD.iter().zip(DUBNO_50_WORD.iter()).skip(1) {
            assert!(a.limit < b.limit, "pta={}", a.pta);
        }
    }
}
