// Confidence levels for the critical-difference band
//
// Only three two-tailed levels are supported. Each maps to a fixed
// standard-normal z-score; there is no interpolation between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors converting a raw percentage into a [`ConfidenceLevel`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfidenceError {
    #[error("Unsupported confidence level: {0}% (expected 80, 90 or 95)")]
    Unsupported(u32),
}

/// Two-tailed confidence level for the critical range
///
/// # Example
/// ```
/// use speech_comparator::thornton::ConfidenceLevel;
///
/// let level = ConfidenceLevel::try_from(90).unwrap();
/// assert_eq!(level.z_score(), 1.645);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ConfidenceLevel {
    /// 80% (z = 1.282)
    Eighty,
    /// 90% (z = 1.645)
    Ninety,
    /// 95% (z = 1.96)
    #[default]
    NinetyFive,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [Self::Eighty, Self::Ninety, Self::NinetyFive];

    pub fn percent(self) -> u32 {
        match self {
            Self::Eighty => 80,
            Self::Ninety => 90,
            Self::NinetyFive => 95,
        }
    }

    pub fn z_score(self) -> f64 {
        match self {
            Self::Eighty => 1.282,
            Self::Ninety => 1.645,
            Self::NinetyFive => 1.96,
        }
    }
}

impl TryFrom<u32> for ConfidenceLevel {
    type Error = ConfidenceError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        match percent {
            80 => Ok(Self::Eighty),
            90 => Ok(Self::Ninety),
            95 => Ok(Self::NinetyFive),
            other => Err(ConfidenceError::Unsupported(other)),
        }
    }
}

impl From<ConfidenceLevel> for u32 {
    fn from(level: ConfidenceLevel) -> Self {
        level.percent()
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
