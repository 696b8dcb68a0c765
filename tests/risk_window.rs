use projection_chart_wasm::domain::projection::{
    BandSource, RiskBand, RiskWindow, ScenarioKind, build_static_series, find_risk_window,
};
use quickcheck_macros::quickcheck;

#[test]
fn detects_first_and_last_negative() {
    let values = [3.0, -1.0, 2.0, -0.5, -4.0, 1.0];
    assert_eq!(find_risk_window(&values), Some(RiskWindow::new(1, 4)));
}

#[test]
fn single_negative_gives_single_index_window() {
    assert_eq!(find_risk_window(&[1.0, -0.01, 1.0]), Some(RiskWindow::new(1, 1)));
}

#[test]
fn zero_is_not_negative() {
    assert_eq!(find_risk_window(&[0.0, 1.0, 0.0]), None);
    assert_eq!(find_risk_window(&[]), None);
}

#[quickcheck]
fn window_covers_every_negative(samples: Vec<i8>) -> bool {
    let values: Vec<f64> = samples.iter().map(|v| *v as f64).collect();
    match find_risk_window(&values) {
        None => values.iter().all(|v| *v >= 0.0),
        Some(window) => {
            values[window.start] < 0.0
                && values[window.end] < 0.0
                && values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v < 0.0)
                    .all(|(i, _)| (window.start..=window.end).contains(&i))
        }
    }
}

#[test]
fn pessimistic_band_is_detected() {
    let band = RiskBand::resolve(&build_static_series(56, ScenarioKind::Pessimistic));
    assert_eq!(band.source, BandSource::Detected);
    assert_eq!(band.window, RiskWindow::new(14, 26));
    assert!(!band.is_fallback());
}

#[test]
fn series_without_negatives_gets_fallback_band() {
    // the optimistic scenario never goes below zero
    let band = RiskBand::resolve(&build_static_series(56, ScenarioKind::Optimistic));
    assert_eq!(band.source, BandSource::Fallback);
    assert_eq!(band.window, RiskWindow::new(16, 22));
}

#[test]
fn fallback_window_follows_count() {
    assert_eq!(RiskWindow::fallback(100), RiskWindow::new(28, 40));
    assert_eq!(RiskWindow::fallback(10), RiskWindow::new(3, 4));
}

#[test]
fn position_check_includes_whole_last_sample() {
    let window = RiskWindow::new(14, 26);
    assert!(!window.contains_position(13.99));
    assert!(window.contains_position(14.0));
    assert!(window.contains_position(26.5));
    assert!(window.contains_position(26.999));
    assert!(!window.contains_position(27.0));
}

#[test]
fn band_serializes_with_source_tag() {
    let band = RiskBand::resolve(&build_static_series(56, ScenarioKind::Pessimistic));
    insta::assert_json_snapshot!(band, @r#"
    {
      "window": {
        "start": 14,
        "end": 26
      },
      "source": "detected"
    }
    "#);
}
