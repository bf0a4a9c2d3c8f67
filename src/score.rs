//! Score normalization between percent and count representations
//!
//! Raw scores arrive from the presentation layer as text. Everything that
//! enters the statistical core goes through here first, so the core only
//! ever sees a clamped integer count and its matching percentage.

use serde::{Deserialize, Serialize};

/// List sizes offered as presets (any positive custom size is accepted)
pub const PRESET_LIST_SIZES: [u32; 4] = [10, 25, 50, 100];

/// Number of items in a word list (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ListSize(u32);

impl ListSize {
    /// Fallback used whenever the raw list size is unusable
    pub const DEFAULT: ListSize = ListSize(50);

    /// Largest supported list; every solver walks at most `MAX + 1` scores
    pub const MAX: ListSize = ListSize(10_000);

    /// Returns `None` for a zero-item list or one longer than [`ListSize::MAX`]
    pub fn new(items: u32) -> Option<Self> {
        (1..=Self::MAX.0).contains(&items).then_some(Self(items))
    }

    /// Parse a raw list size, falling back to 50 items
    ///
    /// Fractional sizes are floored; non-numeric, non-finite and
    /// non-positive input all resolve to [`ListSize::DEFAULT`]. Sizes above
    /// [`ListSize::MAX`] are capped.
    ///
    /// # Example
    /// ```
    /// use speech_comparator::score::ListSize;
    ///
    /// assert_eq!(ListSize::parse("25").get(), 25);
    /// assert_eq!(ListSize::parse("abc").get(), 50);
    /// assert_eq!(ListSize::parse("0").get(), 50);
    /// assert_eq!(ListSize::parse("1e12"), ListSize::MAX);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let parsed = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 1.0);

        match parsed {
            Some(v) if v > Self::MAX.as_f64() => {
                tracing::warn!(raw, "list size too large, capping at {}", Self::MAX.0);
                Self::MAX
            }
            Some(v) => Self(v.floor() as u32),
            None => {
                tracing::warn!(raw, "unusable list size, defaulting to {}", Self::DEFAULT.0);
                Self::DEFAULT
            }
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for ListSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for ListSize {
    type Error = String;

    fn try_from(items: u32) -> Result<Self, Self::Error> {
        Self::new(items)
            .ok_or_else(|| format!("list size must be between 1 and {}", Self::MAX.0))
    }
}

impl From<ListSize> for u32 {
    fn from(size: ListSize) -> Self {
        size.0
    }
}

/// How a raw score value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Percentage correct (0-100)
    #[default]
    Percent,
    /// Number of words correct (0-n)
    Count,
}

/// A score expressed both ways, `count` clamped to `[0, n]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedScore {
    pub count: u32,
    pub percent: f64,
}

impl NormalizedScore {
    pub fn from_count(count: u32, list_size: ListSize) -> Self {
        let count = count.min(list_size.get());
        Self {
            count,
            percent: percent_of(count, list_size),
        }
    }
}

/// Parse raw score text; anything unparsable or non-finite becomes 0
pub fn parse_value(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::warn!(raw, "non-numeric score input, defaulting to 0");
            0.0
        }
    }
}

/// Convert a parsed score value into a clamped count and its percentage
///
/// Percent mode rounds `value / 100 * n` to the nearest word; count mode
/// rounds fractional counts. Halves round up. Both clamp to `[0, n]` afterwards, so "150%"
/// on a 50-word list becomes 50 words rather than 75.
///
/// # Example
/// ```
/// use speech_comparator::score::{normalize, InputMode, ListSize};
///
/// let score = normalize(92.0, ListSize::DEFAULT, InputMode::Percent);
/// assert_eq!(score.count, 46);
/// assert_eq!(score.percent, 92.0);
/// ```
pub fn normalize(value: f64, list_size: ListSize, mode: InputMode) -> NormalizedScore {
    let n = list_size.as_f64();
    let raw_count = match mode {
        InputMode::Percent => round_half_up(value / 100.0 * n),
        InputMode::Count => round_half_up(value),
    };

    let clamped = raw_count.clamp(0.0, n);
    if clamped != raw_count {
        tracing::warn!(value, ?mode, n = list_size.get(), "score out of range, clamped");
    }

    NormalizedScore::from_count(clamped as u32, list_size)
}

/// Re-derive a displayed input value when the user switches input mode
///
/// The current value is clamped into the old mode's range first and only
/// then converted: to count it becomes a whole number of words, to percent
/// it is rounded to one decimal. Switching to the same mode is a no-op.
pub fn switch_mode(value: f64, list_size: ListSize, from: InputMode, to: InputMode) -> f64 {
    let n = list_size.as_f64();
    match (from, to) {
        (InputMode::Percent, InputMode::Count) => {
            let percent = value.min(100.0);
            round_half_up(percent / 100.0 * n)
        }
        (InputMode::Count, InputMode::Percent) => {
            let count = value.min(n);
            round_to_tenth(count * 100.0 / n)
        }
        _ => value,
    }
}

/// Percentage of `count` out of the list size
pub fn percent_of(count: u32, list_size: ListSize) -> f64 {
    f64::from(count) * 100.0 / list_size.as_f64()
}

/// Nearest integer with halves rounded toward +inf, so -0.5 becomes 0
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
