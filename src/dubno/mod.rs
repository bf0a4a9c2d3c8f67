// Normative limits for maximum word-recognition scores (PB-max)
//
// Scientific Foundation:
// [3] Dubno, J. R., Lee, F. S., Klein, A. J., Matthews, L. J., & Lam, C. F.
//     (1995). Confidence limits for maximum word-recognition scores.
//     JSHR, 38, 490-502.
//
// A PB-max below the 95% lower limit for the listener's pure-tone average is
// poorer than the audiogram predicts. Only the 95% limits were published,
// so this model takes no confidence-level parameter.

mod interpolate;
mod table;

pub use interpolate::{interpolate, lower_limit, DubnoError, DubnoList};
pub use table::{TableEntry, DUBNO_25_WORD, DUBNO_50_WORD};
