// Freeman-Tukey arc-sine transform for binomial scores
//
// Scientific Foundation:
// [1] Freeman, M. F., & Tukey, J. W. (1950). Transformations related to the
//     angular and the square root. Annals of Mathematical Statistics, 21.
// [2] Thornton, A. R., & Raffin, M. J. M. (1978). Speech-discrimination
//     scores modeled as a binomial variable. JSHR, 21, 507-518.
//
// The transform stabilizes the variance of a binomial proportion so the
// difference between two scores can be tested against a normal band.

/// Arc-sine transform of `x` correct out of `n` items, in radians
///
/// `theta(n, x) = asin(sqrt(x / (n+1))) + asin(sqrt((x+1) / (n+1)))`
///
/// Strictly increasing in `x` over `[0, n]`; the critical-range solver
/// relies on this.
///
/// # Example
/// ```
/// use speech_comparator::thornton::theta;
///
/// assert!(theta(50, 40) < theta(50, 41));
/// ```
pub fn theta(n: u32, x: u32) -> f64 {
    let n1 = f64::from(n) + 1.0;
    let x = f64::from(x);
    (x / n1).sqrt().asin() + ((x + 1.0) / n1).sqrt().asin()
}

/// Variance of theta for an `n`-item list
///
/// `1/(n+0.5)` for lists of 50 items or more, `1/(n+1)` below that.
pub fn variance(n: u32) -> f64 {
    let n = f64::from(n);
    if n >= 50.0 {
        1.0 / (n + 0.5)
    } else {
        1.0 / (n + 1.0)
    }
}

/// Standard deviation of the difference between two thetas on equal-size lists
pub fn std_dev_diff(n: u32) -> f64 {
    (2.0 * variance(n)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theta_extremes() {
        // x = 0: asin(0) + asin(sqrt(1/(n+1)))
        let expected = (1.0f64 / 51.0).sqrt().asin();
        assert!((theta(50, 0) - expected).abs() < 1e-12);

        // x = n: asin(sqrt(n/(n+1))) + asin(1) = ... + pi/2
        let expected = (50.0f64 / 51.0).sqrt().asin() + std::f64::consts::FRAC_PI_2;
        assert!((theta(50, 50) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_theta_known_value() {
        // 46/50 words
        assert!((theta(50, 46) - 2.539272).abs() < 1e-6);
    }

    #[test]
    fn test_theta_strictly_increasing() {
        for n in [1, 10, 25, 50, 100] {
            for x in 0..n {
                assert!(theta(n, x) < theta(n, x + 1), "n={} x={}", n, x);
            }
        }
    }

    #[test]
    fn test_theta_bounded_by_pi() {
        for x in 0..=100 {
            let t = theta(100, x);
            assert!(t > 0.0 && t <= std::f64::consts::PI);
        }
    }

    #[test]
    fn test_variance_switches_at_50() {
        assert_eq!(variance(49), 1.0 / 50.0);
        assert_eq!(variance(50), 1.0 / 50.5);
        assert_eq!(variance(100), 1.0 / 100.5);
        assert_eq!(variance(25), 1.0 / 26.0);
    }

    #[test]
    fn test_std_dev_diff() {
        assert!((std_dev_diff(50) - (2.0f64 / 50.5).sqrt()).abs() < 1e-15);
        assert!(std_dev_diff(10) > std_dev_diff(100));
    }
}
