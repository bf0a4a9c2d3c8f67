// Linear interpolation into the normative lower-limit tables

use crate::dubno::table::{TableEntry, DUBNO_25_WORD, DUBNO_50_WORD};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors selecting a normative table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DubnoError {
    #[error("No normative table for {0}-word lists (expected 25 or 50)")]
    UnsupportedListSize(u32),
}

/// List sizes with published normative limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DubnoList {
    Words25,
    #[default]
    Words50,
}

impl DubnoList {
    pub fn items(self) -> u32 {
        match self {
            Self::Words25 => 25,
            Self::Words50 => 50,
        }
    }

    pub fn table(self) -> &'static [TableEntry] {
        match self {
            Self::Words25 => &DUBNO_25_WORD,
            Self::Words50 => &DUBNO_50_WORD,
        }
    }
}

impl TryFrom<u32> for DubnoList {
    type Error = DubnoError;

    fn try_from(items: u32) -> Result<Self, Self::Error> {
        match items {
            25 => Ok(Self::Words25),
            50 => Ok(Self::Words50),
            other => Err(DubnoError::UnsupportedListSize(other)),
        }
    }
}

impl From<DubnoList> for u32 {
    fn from(list: DubnoList) -> Self {
        list.items()
    }
}

impl fmt::Display for DubnoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-word", self.items())
    }
}

/// 95% lower limit of PB-max (percent) for a pure-tone average
///
/// PTAs outside the table clamp to the first or last row.
///
/// # Example
/// ```
/// use speech_comparator::dubno::{lower_limit, DubnoList};
///
/// assert_eq!(lower_limit(30.0, DubnoList::Words50), 73.4);
/// assert_eq!(lower_limit(-40.0, DubnoList::Words25), 97.6);
/// ```
pub fn lower_limit(pta: f64, list: DubnoList) -> f64 {
    let limit = interpolate(list.table(), pta);
    tracing::debug!(pta, %list, limit, "interpolated normative lower limit");
    limit
}

/// Interpolate `pta` into a table sorted strictly ascending by PTA
///
/// An empty table yields 0. A PTA exactly on a row returns that row's limit.
pub fn interpolate(table: &[TableEntry], pta: f64) -> f64 {
    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return 0.0;
    };

    if pta <= first.pta {
        return first.limit;
    }
    if pta >= last.pta {
        return last.limit;
    }

    // first.pta < pta < last.pta, so exactly one pair brackets it
    let Some(pair) = table
        .windows(2)
        .find(|pair| pair[0].pta <= pta && pta < pair[1].pta)
    else {
        return last.limit;
    };

    let (lo, hi) = (pair[0], pair[1]);
    lo.limit + (pta - lo.pta) / (hi.pta - lo.pta) * (hi.limit - lo.limit)
}
