use std::sync::Mutex;

use projection_chart_wasm::application::ProjectionChart;
use projection_chart_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use projection_chart_wasm::domain::projection::ChartConfig;

static ENTRIES: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        ENTRIES.lock().unwrap().push(entry);
    }
}

fn build_and_capture(sample_count: usize) -> Vec<LogEntry> {
    init_logger(Box::new(CapturingLogger));
    ProjectionChart::build(&ChartConfig { sample_count, ..ChartConfig::default() });
    ENTRIES.lock().unwrap().clone()
}

fn build_metadata(entries: &[LogEntry], samples: usize) -> serde_json::Value {
    entries
        .iter()
        .filter(|e| e.level == LogLevel::Debug)
        .filter_map(|e| e.metadata.as_deref())
        .map(|m| serde_json::from_str::<serde_json::Value>(m).unwrap())
        .find(|m| m["samples"] == samples)
        .unwrap()
}

#[test]
fn build_logs_structured_metadata() {
    let entries = build_and_capture(56);
    let metadata = build_metadata(&entries, 56);

    assert_eq!(metadata["band_start"], 14);
    assert_eq!(metadata["band_end"], 26);
    assert_eq!(metadata["band_source"], "detected");
    assert!(metadata["pessimistic_min"].as_f64().unwrap() < 0.0);
    assert!(metadata["optimistic_max"].as_f64().unwrap() > 0.0);
}

#[test]
fn fallback_band_is_logged_as_warning() {
    // two samples are too coarse to catch the dip
    let entries = build_and_capture(2);
    let metadata = build_metadata(&entries, 2);
    assert_eq!(metadata["band_source"], "fallback");

    assert!(entries.iter().any(|e| e.level == LogLevel::Warn
        && e.message.contains("fallback risk band 1..=1")));
}
