//! Comprehensive property-based tests for the statistical core
//!
//! Core properties tested:
//! 1. Theta transform monotonicity
//! 2. Critical range invariants and boundary inclusivity
//! 3. Agreement between linear and bisection search
//! 4. Input normalization clamping and round-trips
//! 5. Normative table clamping and interpolation exactness

use proptest::prelude::*;
use speech_comparator::analysis::{analyze_dubno, analyze_thornton, DubnoInput, ThorntonInput};
use speech_comparator::dubno::{lower_limit, DubnoList};
use speech_comparator::score::{normalize, parse_value, switch_mode, InputMode, ListSize};
use speech_comparator::thornton::{critical_range, theta, ConfidenceLevel, SearchStrategy};

fn confidence() -> impl Strategy<Value = ConfidenceLevel> {
    prop::sample::select(ConfidenceLevel::ALL.to_vec())
}

fn dubno_list() -> impl Strategy<Value = DubnoList> {
    prop::sample::select(vec![DubnoList::Words25, DubnoList::Words50])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_theta_strictly_increasing(
        (n, x) in (1u32..400).prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        // Property: theta(n, x) < theta(n, x + 1) across the whole domain
        prop_assert!(theta(n, x) < theta(n, x + 1));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_critical_range_invariants(
        n in 1u32..300,
        baseline in 0u32..300,
        level in confidence(),
    ) {
        let list_size = ListSize::new(n).unwrap();
        let baseline = baseline.min(n);
        let range = critical_range(baseline, list_size, level, SearchStrategy::Linear);

        // Property: 0 <= lower <= upper <= n, percentages in [0, 100]
        prop_assert!(range.lower_score <= range.upper_score);
        prop_assert!(range.upper_score <= n);
        prop_assert!(range.lower_percent >= 0.0);
        prop_assert!(range.lower_percent <= range.upper_percent);
        prop_assert!(range.upper_percent <= 100.0);

        // Property: the baseline is never significantly different from itself
        prop_assert!(!range.is_significant(baseline));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_boundaries_are_inclusive(
        n in 1u32..200,
        baseline in 0u32..200,
        level in confidence(),
    ) {
        let list_size = ListSize::new(n).unwrap();
        let range = critical_range(baseline.min(n), list_size, level, SearchStrategy::Linear);

        // Property: scores equal to either bound are never significant
        prop_assert!(!range.is_significant(range.lower_score));
        prop_assert!(!range.is_significant(range.upper_score));

        // Property: one word outside either bound is significant
        if range.lower_score > 0 {
            prop_assert!(range.is_significant(range.lower_score - 1));
        }
        if range.upper_score < n {
            prop_assert!(range.is_significant(range.upper_score + 1));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_bisection_matches_linear(
        n in 1u32..1000,
        baseline in 0u32..1000,
        level in confidence(),
    ) {
        let list_size = ListSize::new(n).unwrap();
        let baseline = baseline.min(n);

        // Property: both search strategies find the same band
        let linear = critical_range(baseline, list_size, level, SearchStrategy::Linear);
        let bisect = critical_range(baseline, list_size, level, SearchStrategy::Bisection);
        prop_assert_eq!(linear, bisect);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_bisection_matches_linear_at_max_list_size(
        baseline in 0u32..=10_000,
        level in confidence(),
    ) {
        // Property: strategies agree and keep the baseline at the largest list
        let linear = critical_range(baseline, ListSize::MAX, level, SearchStrategy::Linear);
        let bisect = critical_range(baseline, ListSize::MAX, level, SearchStrategy::Bisection);
        prop_assert_eq!(linear, bisect);
        prop_assert!(bisect.contains(baseline));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_list_size_parse_within_cap(size in 1.0f64..1.0e15) {
        // Property: any numeric list size parses into [1, MAX]
        let parsed = ListSize::parse(&size.to_string());
        prop_assert!(parsed.get() >= 1);
        prop_assert!(parsed.get() <= ListSize::MAX.get());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_normalize_always_clamped(
        n in 1u32..500,
        value in -1.0e6f64..1.0e6,
        count_mode in any::<bool>(),
    ) {
        let list_size = ListSize::new(n).unwrap();
        let mode = if count_mode { InputMode::Count } else { InputMode::Percent };
        let score = normalize(value, list_size, mode);

        // Property: count in [0, n], percent in [0, 100]
        prop_assert!(score.count <= n);
        prop_assert!((0.0..=100.0).contains(&score.percent));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_percent_count_round_trip(n in 1u32..200, percent in 0.0f64..=100.0) {
        let list_size = ListSize::new(n).unwrap();

        // Property: percent -> count -> percent moves the value by at most one word
        let count = switch_mode(percent, list_size, InputMode::Percent, InputMode::Count);
        let back = switch_mode(count, list_size, InputMode::Count, InputMode::Percent);
        let one_word = 100.0 / f64::from(n);
        prop_assert!((back - percent).abs() <= one_word / 2.0 + 0.05 + 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_parse_value_never_panics(raw in ".{0,20}") {
        // Property: arbitrary text always parses to a finite number
        prop_assert!(parse_value(&raw).is_finite());
        let parsed = ListSize::parse(&raw);
        prop_assert!(parsed.get() >= 1);
        prop_assert!(parsed.get() <= ListSize::MAX.get());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_thornton_analysis_consistent(
        n in 1u32..150,
        score1 in 0.0f64..=100.0,
        score2 in 0.0f64..=100.0,
        level in confidence(),
    ) {
        let input = ThorntonInput {
            list_size: ListSize::new(n).unwrap(),
            score1,
            score2,
            mode: InputMode::Percent,
            confidence: level,
        };
        let result = analyze_thornton(&input, SearchStrategy::Linear);

        // Property: the verdict agrees with the reported range
        let inside = result.critical_range.contains(result.score2.count);
        prop_assert_eq!(result.is_significant, !inside);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dubno_clamps_outside_table(offset in 0.0f64..1000.0, list in dubno_list()) {
        let table = list.table();
        let first = table[0];
        let last = table[table.len() - 1];

        // Property: exact first/last limit at or beyond either end
        prop_assert_eq!(lower_limit(first.pta - offset, list), first.limit);
        prop_assert_eq!(lower_limit(last.pta + offset, list), last.limit);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dubno_exact_on_rows(index in 0usize..46, list in dubno_list()) {
        let entry = list.table()[index.min(list.table().len() - 1)];

        // Property: a PTA on a table row returns that row's limit with zero error
        prop_assert_eq!(lower_limit(entry.pta, list), entry.limit);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dubno_limit_within_neighbours(pta in -3.3f64..71.7, list in dubno_list()) {
        let table = list.table();
        let limit = lower_limit(pta, list);

        // Property: interpolated limit lies between the bracketing rows
        let pair = table.windows(2).find(|w| w[0].pta <= pta && pta < w[1].pta).unwrap();
        prop_assert!(limit <= pair[0].limit + 1e-9);
        prop_assert!(limit >= pair[1].limit - 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dubno_abnormal_iff_below_limit(
        thresholds in prop::array::uniform3(-10.0f64..90.0),
        pb_max in 0.0f64..=100.0,
        list in dubno_list(),
    ) {
        let result = analyze_dubno(&DubnoInput { thresholds, pb_max, list });

        // Property: strict inequality decides abnormality
        prop_assert_eq!(result.is_abnormal, pb_max < result.lower_limit);
    }
}
