// Critical differences for speech-recognition scores (binomial model)
//
// Scientific Foundation:
// [2] Thornton, A. R., & Raffin, M. J. M. (1978). Speech-discrimination
//     scores modeled as a binomial variable. JSHR, 21, 507-518.
//
// A word-recognition score is a binomial proportion, so two scores on the
// same list size differ by chance alone more often than intuition suggests.
// Scores are mapped through the Freeman-Tukey arc-sine transform, where
// variance depends only on n, and the critical band is found in that domain
// before being mapped back to whole-word scores.

mod confidence;
mod critical_range;
mod theta;

pub use confidence::{ConfidenceError, ConfidenceLevel};
pub use critical_range::{critical_difference_table, critical_range, CriticalRange, SearchStrategy};
pub use theta::{std_dev_diff, theta, variance};
