//! JSON output format for analysis results
//!
//! Field names follow the presentation layer's contract so a UI shell can
//! bind them directly.

use crate::analysis::{DubnoAnalysis, ThorntonAnalysis};
use crate::score::{percent_of, InputMode, ListSize};
use crate::thornton::{ConfidenceLevel, CriticalRange};
use serde::{Deserialize, Serialize};

/// Test-retest comparison result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonThorntonResult {
    pub list_size: u32,
    pub confidence_level: u32,
    pub score1_count: u32,
    pub score1_percent: f64,
    pub score2_count: u32,
    pub score2_percent: f64,
    pub lower_critical_score: u32,
    pub upper_critical_score: u32,
    pub lower_critical_percent: f64,
    pub upper_critical_percent: f64,
    pub is_significant: bool,
}

impl From<&ThorntonAnalysis> for JsonThorntonResult {
    fn from(analysis: &ThorntonAnalysis) -> Self {
        let range = &analysis.critical_range;
        Self {
            list_size: analysis.list_size.get(),
            confidence_level: analysis.confidence.percent(),
            score1_count: analysis.score1.count,
            score1_percent: analysis.score1.percent,
            score2_count: analysis.score2.count,
            score2_percent: analysis.score2.percent,
            lower_critical_score: range.lower_score,
            upper_critical_score: range.upper_score,
            lower_critical_percent: range.lower_percent,
            upper_critical_percent: range.upper_percent,
            is_significant: analysis.is_significant,
        }
    }
}

/// PB-max normative check result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonDubnoResult {
    pub list_size: u32,
    pub calculated_pta: f64,
    pub lower_limit: f64,
    pub current_score: f64,
    pub is_abnormal: bool,
}

impl From<&DubnoAnalysis> for JsonDubnoResult {
    fn from(analysis: &DubnoAnalysis) -> Self {
        Self {
            list_size: analysis.list.items(),
            calculated_pta: analysis.pta,
            lower_limit: analysis.lower_limit,
            current_score: analysis.current_score,
            is_abnormal: analysis.is_abnormal,
        }
    }
}

/// One row of the critical-difference table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonTableRow {
    pub score: u32,
    pub percent: f64,
    pub lower_critical_percent: f64,
    pub upper_critical_percent: f64,
}

/// Critical-difference table for one list size and confidence level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonCriticalTable {
    pub list_size: u32,
    pub confidence_level: u32,
    pub rows: Vec<JsonTableRow>,
}

impl JsonCriticalTable {
    pub fn new(table: &[CriticalRange], list_size: ListSize, confidence: ConfidenceLevel) -> Self {
        let rows = (0u32..)
            .zip(table)
            .map(|(score, range)| JsonTableRow {
                score,
                percent: percent_of(score, list_size),
                lower_critical_percent: range.lower_percent,
                upper_critical_percent: range.upper_percent,
            })
            .collect();

        Self {
            list_size: list_size.get(),
            confidence_level: confidence.percent(),
            rows,
        }
    }
}

/// Result of re-deriving score inputs for a new input mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonConversion {
    pub list_size: u32,
    pub mode: InputMode,
    pub values: Vec<f64>,
}

/// Serialize any output record as pretty-printed JSON
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
