use super::*;

#[test]
fn percent_of_empty_metric_is_full() {
    assert!((percent(0, 0) - 100.0).abs() < f64::EPSILON);
    assert!((CoverageSummary::new(0, 0, 0).pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn percent_rounds_half_up_to_two_decimals() {
    assert!((percent(3, 4) - 75.0).abs() < f64::EPSILON);
    assert!((percent(1, 3) - 33.33).abs() < 1e-9);
    assert!((percent(2, 3) - 66.67).abs() < 1e-9);
    assert!((percent(1, 8) - 12.5).abs() < 1e-9);
}

#[test]
fn percent_full_coverage() {
    assert!((percent(20, 20) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn gap_counts_uncovered_items() {
    let summary = CoverageSummary::new(10, 20, 0);
    assert!((summary.gap() - -10.0).abs() < f64::EPSILON);
    assert!(CoverageSummary::new(5, 5, 0).gap().abs() < f64::EPSILON);
}

#[test]
fn merge_sums_counts_and_recomputes_pct() {
    let a = CoverageSummary::new(1, 2, 0);
    let b = CoverageSummary::new(2, 2, 1);
    let merged = a.merge(&b);
    assert_eq!(merged.covered, 3);
    assert_eq!(merged.total, 4);
    assert_eq!(merged.skipped, 1);
    assert!((merged.pct - 75.0).abs() < f64::EPSILON);
}

#[test]
fn metric_order_is_fixed() {
    assert_eq!(
        MetricKind::ALL,
        [
            MetricKind::Statements,
            MetricKind::Branches,
            MetricKind::Lines,
            MetricKind::Functions
        ]
    );
}

#[test]
fn metric_kind_parses_and_displays() {
    assert_eq!("branches".parse::<MetricKind>(), Ok(MetricKind::Branches));
    assert_eq!(" Lines ".parse::<MetricKind>(), Ok(MetricKind::Lines));
    assert!("conditions".parse::<MetricKind>().is_err());
    assert_eq!(MetricKind::Functions.to_string(), "functions");
}

#[test]
fn metric_summaries_get_returns_matching_field() {
    let summaries = MetricSummaries {
        statements: CoverageSummary::new(1, 1, 0),
        branches: CoverageSummary::new(0, 2, 0),
        lines: CoverageSummary::new(3, 4, 0),
        functions: CoverageSummary::new(0, 0, 0),
    };
    assert_eq!(summaries.get(MetricKind::Branches).total, 2);
    assert_eq!(summaries.get(MetricKind::Lines).covered, 3);
    assert!((summaries.get(MetricKind::Functions).pct - 100.0).abs() < f64::EPSILON);
}
