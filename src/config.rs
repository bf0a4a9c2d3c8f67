//! Analysis defaults loaded from TOML
//!
//! The presentation layer starts every form from these values. Explicit
//! command-line flags always win over the file.
//!
//! # Example speech-comparator.toml
//!
//! ```toml
//! confidence = 90
//! list_size = 25
//! input_mode = "count"
//! search = "bisection"
//! dubno_list_size = 25
//! ```

use crate::dubno::{DubnoError, DubnoList};
use crate::score::{InputMode, ListSize};
use crate::thornton::{ConfidenceError, ConfidenceLevel, SearchStrategy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors applying raw overrides to a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Confidence(#[from] ConfidenceError),

    #[error(transparent)]
    Dubno(#[from] DubnoError),
}

/// Defaults for both analyses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Confidence level for the critical range (80, 90 or 95)
    pub confidence: ConfidenceLevel,

    /// Word-list size for test-retest comparisons
    pub list_size: ListSize,

    /// Whether scores are entered as percent or word count
    pub input_mode: InputMode,

    /// Boundary search used by the critical-range solver
    pub search: SearchStrategy,

    /// Normative table used for PB-max checks (25 or 50)
    pub dubno_list_size: DubnoList,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence: ConfidenceLevel::NinetyFive,
            list_size: ListSize::DEFAULT,
            input_mode: InputMode::Percent,
            search: SearchStrategy::Linear,
            dubno_list_size: DubnoList::Words50,
        }
    }
}

impl AnalysisConfig {
    /// Conservative preset: 95% confidence with bisection search
    pub fn strict() -> Self {
        Self {
            search: SearchStrategy::Bisection,
            ..Self::default()
        }
    }

    /// Screening preset: 80% confidence flags smaller changes for follow-up
    pub fn screening() -> Self {
        Self {
            confidence: ConfidenceLevel::Eighty,
            ..Self::default()
        }
    }

    /// Load defaults from a TOML file
    ///
    /// ```no_run
    /// use speech_comparator::config::AnalysisConfig;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = AnalysisConfig::from_file("speech-comparator.toml")?;
    /// println!("confidence: {}", config.confidence);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Load defaults from a TOML string; missing keys keep their defaults
    ///
    /// Unsupported confidence levels and table sizes are rejected here
    /// rather than coerced, since a config file is written deliberately.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Apply raw command-line overrides on top of these defaults
    pub fn with_overrides(
        mut self,
        confidence: Option<u32>,
        dubno_list_size: Option<u32>,
    ) -> std::result::Result<Self, ConfigError> {
        if let Some(percent) = confidence {
            self.confidence = ConfidenceLevel::try_from(percent)?;
        }
        if let Some(items) = dubno_list_size {
            self.dubno_list_size = DubnoList::try_from(items)?;
        }
        Ok(self)
    }
}
