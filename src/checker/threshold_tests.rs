//! Tests for single threshold evaluation.

use super::*;

fn summary(covered: u64, total: u64) -> CoverageSummary {
    CoverageSummary::new(covered, total, 0)
}

#[test]
fn absent_threshold_is_skipped() {
    let outcome = evaluate(None, &summary(0, 10));
    assert_eq!(outcome, ThresholdOutcome::Skipped);
    assert!(!outcome.is_failed());
    assert_eq!(outcome.value(), None);
}

#[test]
fn zero_threshold_is_skipped() {
    assert_eq!(evaluate(Some(0.0), &summary(0, 10)), ThresholdOutcome::Skipped);
    assert_eq!(evaluate(Some(-0.0), &summary(0, 10)), ThresholdOutcome::Skipped);
}

#[test]
fn percentage_below_threshold_fails() {
    let outcome = evaluate(Some(80.0), &summary(3, 4));
    assert_eq!(outcome, ThresholdOutcome::Failed { value: 75.0 });
}

#[test]
fn percentage_equal_to_threshold_passes() {
    let outcome = evaluate(Some(100.0), &summary(4, 4));
    assert_eq!(outcome, ThresholdOutcome::Passed { value: 100.0 });
}

#[test]
fn percentage_above_threshold_passes() {
    assert!(!evaluate(Some(50.0), &summary(3, 4)).is_failed());
}

#[test]
fn empty_metric_passes_any_percentage() {
    assert!(!evaluate(Some(100.0), &summary(0, 0)).is_failed());
}

#[test]
fn gap_beyond_bound_fails() {
    let outcome = evaluate(Some(-5.0), &summary(10, 20));
    assert_eq!(outcome, ThresholdOutcome::Failed { value: -10.0 });
}

#[test]
fn gap_within_bound_passes() {
    let outcome = evaluate(Some(-5.0), &summary(17, 20));
    assert_eq!(outcome, ThresholdOutcome::Passed { value: -3.0 });
}

#[test]
fn gap_equal_to_bound_passes() {
    assert!(!evaluate(Some(-10.0), &summary(10, 20)).is_failed());
}

#[test]
fn gap_of_fully_covered_is_zero() {
    assert_eq!(evaluate(Some(-1.0), &summary(5, 5)).value(), Some(0.0));
}

#[test]
fn percentage_rule_matches_definition_over_grid() {
    for total in 0..12u64 {
        for covered in 0..=total {
            let s = summary(covered, total);
            for threshold in [1.0, 33.33, 50.0, 75.0, 99.99, 100.0] {
                assert_eq!(evaluate(Some(threshold), &s).is_failed(), s.pct < threshold);
            }
        }
    }
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn gap_rule_matches_definition_over_grid() {
    for total in 0..12u64 {
        for covered in 0..=total {
            let s = summary(covered, total);
            for threshold in [-1.0, -2.0, -5.0, -11.0] {
                let gap = covered as f64 - total as f64;
                assert_eq!(evaluate(Some(threshold), &s).is_failed(), gap < threshold);
            }
        }
    }
}
