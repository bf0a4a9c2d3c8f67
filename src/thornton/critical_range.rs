// Critical-range solver for the Thornton & Raffin binomial model
//
// Given a baseline score x1 on an n-item list, the scores that are not
// significantly different from it are those whose theta lies within
// z * sd_diff of theta(n, x1). Theta is strictly increasing in x, so the
// band in theta maps to one contiguous run of integer scores.

use crate::score::{percent_of, ListSize};
use crate::thornton::confidence::ConfidenceLevel;
use crate::thornton::theta::{std_dev_diff, theta};
use serde::{Deserialize, Serialize};

/// How the band edges are located on the integer score axis
///
/// Both strategies return identical ranges; bisection only matters for
/// very long lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Ascending scan over every score 0..=n
    #[default]
    Linear,
    /// Binary search over the monotone theta sequence
    Bisection,
}

/// Scores statistically indistinguishable from a baseline
///
/// Invariant: `0 <= lower_score <= upper_score <= n`. Both bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalRange {
    pub lower_score: u32,
    pub upper_score: u32,
    pub lower_percent: f64,
    pub upper_percent: f64,
}

impl CriticalRange {
    /// True if `score` lies inside the band (boundaries included)
    pub fn contains(&self, score: u32) -> bool {
        (self.lower_score..=self.upper_score).contains(&score)
    }

    /// True if `score` differs significantly from the baseline
    ///
    /// # Example
    /// ```
    /// use speech_comparator::score::ListSize;
    /// use speech_comparator::thornton::{critical_range, ConfidenceLevel, SearchStrategy};
    ///
    /// let range = critical_range(
    ///     46,
    ///     ListSize::DEFAULT,
    ///     ConfidenceLevel::NinetyFive,
    ///     SearchStrategy::Linear,
    /// );
    /// assert!(!range.is_significant(range.lower_score));
    /// assert!(range.is_significant(range.lower_score - 1));
    /// ```
    pub fn is_significant(&self, score: u32) -> bool {
        score < self.lower_score || score > self.upper_score
    }

    /// Width of the band in words
    pub fn width(&self) -> u32 {
        self.upper_score - self.lower_score
    }
}

/// Lower and upper theta limits around a baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThetaBand {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

impl ThetaBand {
    pub(crate) fn around(baseline: u32, n: u32, confidence: ConfidenceLevel) -> Self {
        let theta1 = theta(n, baseline);
        let bound = confidence.z_score() * std_dev_diff(n);
        Self {
            lower: theta1 - bound,
            upper: theta1 + bound,
        }
    }
}

/// Solve the critical range around `baseline` correct out of `list_size`
///
/// The baseline is clamped to the list size before solving.
pub fn critical_range(
    baseline: u32,
    list_size: ListSize,
    confidence: ConfidenceLevel,
    strategy: SearchStrategy,
) -> CriticalRange {
    let n = list_size.get();
    let baseline = baseline.min(n);
    let band = ThetaBand::around(baseline, n, confidence);

    let (lower_score, upper_score) = match strategy {
        SearchStrategy::Linear => scan_linear(n, &band),
        SearchStrategy::Bisection => scan_bisection(n, &band),
    };

    tracing::debug!(
        n,
        baseline,
        %confidence,
        theta_lower = band.lower,
        theta_upper = band.upper,
        lower_score,
        upper_score,
        "solved critical range"
    );

    CriticalRange {
        lower_score,
        upper_score,
        lower_percent: percent_of(lower_score, list_size),
        upper_percent: percent_of(upper_score, list_size),
    }
}

/// Critical range for every possible baseline `0..=n`, indexed by baseline
pub fn critical_difference_table(
    list_size: ListSize,
    confidence: ConfidenceLevel,
    strategy: SearchStrategy,
) -> Vec<CriticalRange> {
    (0..=list_size.get())
        .map(|baseline| critical_range(baseline, list_size, confidence, strategy))
        .collect()
}

/// First `i` with `theta >= lower` is the lower score; the first `i` with
/// `theta > upper`, minus one, is the upper score. Missing crossings default
/// to 0 and n respectively.
fn scan_linear(n: u32, band: &ThetaBand) -> (u32, u32) {
    let mut lower_score = None;
    let mut upper_score = None;

    for i in 0..=n {
        let t = theta(n, i);
        if lower_score.is_none() && t >= band.lower {
            lower_score = Some(i);
        }
        if upper_score.is_none() && t > band.upper {
            upper_score = Some(i.saturating_sub(1));
            break;
        }
    }

    (lower_score.unwrap_or(0), upper_score.unwrap_or(n))
}

fn scan_bisection(n: u32, band: &ThetaBand) -> (u32, u32) {
    let lower_score = partition_point(n, |i| theta(n, i) < band.lower);
    let above = partition_point(n, |i| theta(n, i) <= band.upper);
    // above == n + 1 means no score exceeds the band
    let upper_score = above.saturating_sub(1);
    (clamp_to_list(lower_score, n), clamp_to_list(upper_score, n))
}

/// Number of leading scores in `0..=n` satisfying `pred`
///
/// `pred` must be true for a prefix and false afterwards. Counted in u64
/// since the result can be `n + 1`.
fn partition_point(n: u32, pred: impl Fn(u32) -> bool) -> u64 {
    let (mut lo, mut hi) = (0u64, u64::from(n) + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        // mid < hi <= n + 1, so mid fits in u32
        if pred(clamp_to_list(mid, n)) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

fn clamp_to_list(score: u64, n: u32) -> u32 {
    u32::try_from(score).map_or(n, |score| score.min(n))
}
