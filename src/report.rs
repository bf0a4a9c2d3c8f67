//! Human-readable reports for analysis results
//!
//! Percentages are shown with one decimal place throughout.

use crate::analysis::{DubnoAnalysis, ThorntonAnalysis};
use crate::score::{percent_of, ListSize};
use crate::thornton::{ConfidenceLevel, CriticalRange};

/// Default width of the text range bar, in cells
pub const RANGE_BAR_WIDTH: usize = 50;

impl ThorntonAnalysis {
    /// Verdict sentence for the comparison
    pub fn summary(&self) -> String {
        format!(
            "The difference between {:.1}% and {:.1}% is {}statistically significant at the {} confidence level.",
            self.score1.percent,
            self.score2.percent,
            if self.is_significant { "" } else { "NOT " },
            self.confidence,
        )
    }

    /// Sentence describing the range of equivalent retest scores
    pub fn equivalence_statement(&self) -> String {
        format!(
            "For a baseline score of {:.1}% ({}/{}), any subsequent score between {:.1}% and {:.1}% is considered statistically equivalent.",
            self.score1.percent,
            self.score1.count,
            self.list_size.get(),
            self.critical_range.lower_percent,
            self.critical_range.upper_percent,
        )
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        if self.is_significant {
            report.push_str("⚠️  SIGNIFICANT DIFFERENCE\n\n");
        } else {
            report.push_str("✅ NO SIGNIFICANT DIFFERENCE\n\n");
        }

        report.push_str(&self.summary());
        report.push('\n');
        if self.is_significant {
            report.push_str("It is unlikely that this difference is due to chance alone.\n");
        } else {
            report.push_str("This variation is expected within normal test-retest variability.\n");
        }

        report.push_str(&format!(
            "\n📊 Critical Difference Range (n={}, {} confidence):\n",
            self.list_size.get(),
            self.confidence
        ));
        report.push_str(&format!(
            "  {}\n",
            range_bar(&self.critical_range, self.score1.percent, self.score2.percent, RANGE_BAR_WIDTH)
        ));
        report.push_str(&format!(
            "  Baseline: {:.1}% ({}/{})   Score 2: {:.1}% ({}/{})\n",
            self.score1.percent,
            self.score1.count,
            self.list_size.get(),
            self.score2.percent,
            self.score2.count,
            self.list_size.get()
        ));
        report.push('\n');
        report.push_str(&self.equivalence_statement());
        report.push('\n');

        report
    }
}

impl DubnoAnalysis {
    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        if self.is_abnormal {
            report.push_str("⚠️  PB-MAX BELOW NORMAL LIMITS\n\n");
        } else {
            report.push_str("✅ PB-MAX WITHIN NORMAL LIMITS\n\n");
        }

        report.push_str(&format!("Pure-tone average: {:.1} dB HL\n", self.pta));
        report.push_str(&format!(
            "95% lower limit ({} list): {:.1}%\n",
            self.list, self.lower_limit
        ));
        report.push_str(&format!("Measured PB-max: {:.1}%\n", self.current_score));
        report.push('\n');

        if self.is_abnormal {
            report.push_str(&format!(
                "A PB-max of {:.1}% is poorer than expected for a PTA of {:.1} dB HL.\n",
                self.current_score, self.pta
            ));
        } else {
            report.push_str(&format!(
                "A PB-max of {:.1}% is consistent with a PTA of {:.1} dB HL.\n",
                self.current_score, self.pta
            ));
        }

        report
    }
}

/// Render the 0-100% axis with the non-significant band and both scores
///
/// `=` marks the band, `B` the baseline and `2` the comparison score. A
/// comparison score on the baseline's cell is drawn as `2`.
pub fn range_bar(range: &CriticalRange, baseline: f64, score2: f64, width: usize) -> String {
    let width = width.max(2);
    let cell = |percent: f64| -> usize {
        let scaled = (percent.clamp(0.0, 100.0) / 100.0 * (width - 1) as f64).round();
        scaled as usize
    };

    let mut cells = vec!['-'; width];
    for c in &mut cells[cell(range.lower_percent)..=cell(range.upper_percent)] {
        *c = '=';
    }
    cells[cell(baseline)] = 'B';
    cells[cell(score2)] = '2';

    let bar: String = cells.into_iter().collect();
    format!("0% |{}| 100%", bar)
}

/// Generate the critical-difference table as text
///
/// One row per baseline score, as the model is usually published.
pub fn table_to_report_string(
    table: &[CriticalRange],
    list_size: ListSize,
    confidence: ConfidenceLevel,
) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "Critical differences for {}-word lists ({} confidence)\n\n",
        list_size.get(),
        confidence
    ));
    report.push_str(&format!("{:>8} {:>9}   {:>15}\n", "score", "percent", "critical range"));
    report.push_str(&format!("{}\n", "─".repeat(36)));

    for (baseline, range) in (0u32..).zip(table) {
        report.push_str(&format!(
            "{:>8} {:>8.1}%   {:>6.1}% - {:>5.1}%\n",
            baseline,
            percent_of(baseline, list_size),
            range.lower_percent,
            range.upper_percent
        ));
    }

    report
}
