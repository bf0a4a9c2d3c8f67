//! Analysis entry points combining normalization and the two models
//!
//! Every analysis is a fresh computation from an explicit input struct.
//! Nothing is cached between calls, so identical inputs always produce
//! identical results.

use crate::dubno::{lower_limit, DubnoList};
use crate::score::{normalize, parse_value, InputMode, ListSize, NormalizedScore};
use crate::thornton::{critical_range, ConfidenceLevel, CriticalRange, SearchStrategy};
use serde::Serialize;

/// Inputs for a test-retest comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThorntonInput {
    pub list_size: ListSize,
    /// Baseline score, interpreted per `mode`
    pub score1: f64,
    /// Comparison score, interpreted per `mode`
    pub score2: f64,
    pub mode: InputMode,
    pub confidence: ConfidenceLevel,
}

impl ThorntonInput {
    /// Build from raw text fields, coercing anything malformed
    ///
    /// # Example
    /// ```
    /// use speech_comparator::analysis::ThorntonInput;
    /// use speech_comparator::score::InputMode;
    /// use speech_comparator::thornton::ConfidenceLevel;
    ///
    /// let input = ThorntonInput::from_raw("fifty", "92", "80", InputMode::Percent, ConfidenceLevel::NinetyFive);
    /// assert_eq!(input.list_size.get(), 50);
    /// ```
    pub fn from_raw(
        list_size: &str,
        score1: &str,
        score2: &str,
        mode: InputMode,
        confidence: ConfidenceLevel,
    ) -> Self {
        Self {
            list_size: ListSize::parse(list_size),
            score1: parse_value(score1),
            score2: parse_value(score2),
            mode,
            confidence,
        }
    }
}

/// Outcome of a test-retest comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThorntonAnalysis {
    pub list_size: ListSize,
    pub confidence: ConfidenceLevel,
    pub score1: NormalizedScore,
    pub score2: NormalizedScore,
    pub critical_range: CriticalRange,
    pub is_significant: bool,
}

/// Decide whether score 2 differs significantly from score 1
pub fn analyze_thornton(input: &ThorntonInput, strategy: SearchStrategy) -> ThorntonAnalysis {
    let score1 = normalize(input.score1, input.list_size, input.mode);
    let score2 = normalize(input.score2, input.list_size, input.mode);

    let critical_range = critical_range(score1.count, input.list_size, input.confidence, strategy);
    let is_significant = critical_range.is_significant(score2.count);

    ThorntonAnalysis {
        list_size: input.list_size,
        confidence: input.confidence,
        score1,
        score2,
        critical_range,
        is_significant,
    }
}

/// Inputs for a PB-max normative check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DubnoInput {
    /// Thresholds at 500, 1000 and 2000 Hz (dB HL)
    pub thresholds: [f64; 3],
    /// Measured PB-max, percent
    pub pb_max: f64,
    pub list: DubnoList,
}

impl DubnoInput {
    /// Build from raw text fields; unparsable numbers become 0
    pub fn from_raw(pta500: &str, pta1000: &str, pta2000: &str, pb_max: &str, list: DubnoList) -> Self {
        Self {
            thresholds: [parse_value(pta500), parse_value(pta1000), parse_value(pta2000)],
            pb_max: parse_value(pb_max),
            list,
        }
    }
}

/// Outcome of a PB-max normative check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DubnoAnalysis {
    pub list: DubnoList,
    pub pta: f64,
    pub lower_limit: f64,
    pub current_score: f64,
    pub is_abnormal: bool,
}

/// Unweighted mean of the 500, 1000 and 2000 Hz thresholds
pub fn pure_tone_average(f500: f64, f1000: f64, f2000: f64) -> f64 {
    (f500 + f1000 + f2000) / 3.0
}

/// Compare a PB-max score against the normative lower limit for its PTA
///
/// A score equal to the limit is within normal limits.
pub fn analyze_dubno(input: &DubnoInput) -> DubnoAnalysis {
    let [f500, f1000, f2000] = input.thresholds;
    let pta = pure_tone_average(f500, f1000, f2000);
    let lower_limit = lower_limit(pta, input.list);

    DubnoAnalysis {
        list: input.list,
        pta,
        lower_limit,
        current_score: input.pb_max,
        is_abnormal: input.pb_max < lower_limit,
    }
}
