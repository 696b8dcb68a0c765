use derive_more::Display;
use serde::Serialize;

/// Slack past `end` so the whole last risky sample counts as inside
const END_SLACK: f64 = 0.999;

/// Share of the index range covered by the substitute band
const FALLBACK_START_RATIO: f64 = 0.28;
const FALLBACK_END_RATIO: f64 = 0.40;

/// Index range `[start, end]` (both inclusive) of negative samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskWindow {
    pub start: usize,
    pub end: usize,
}

impl RiskWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Presentational stand-in used when a series never goes negative.
    pub fn fallback(count: usize) -> Self {
        let count = count as f64;
        Self {
            start: (count * FALLBACK_START_RATIO).round() as usize,
            end: (count * FALLBACK_END_RATIO).round() as usize,
        }
    }

    /// Whether a continuous cursor position falls within the window
    pub fn contains_position(&self, position: f64) -> bool {
        position >= self.start as f64 && position <= self.end as f64 + END_SLACK
    }
}

/// Single pass over `values`: first and last index holding a negative value.
pub fn find_risk_window(values: &[f64]) -> Option<RiskWindow> {
    let mut window: Option<RiskWindow> = None;
    for (i, _) in values.iter().enumerate().filter(|(_, v)| **v < 0.0) {
        match window.as_mut() {
            Some(w) => w.end = i,
            None => window = Some(RiskWindow::new(i, i)),
        }
    }
    window
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandSource {
    #[display(fmt = "detected")]
    Detected,
    /// No negative sample existed; the band carries no meaning
    #[display(fmt = "fallback")]
    Fallback,
}

/// The window actually drawn, with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskBand {
    pub window: RiskWindow,
    pub source: BandSource,
}

impl RiskBand {
    /// Detected window, or the fallback range so a band always renders.
    pub fn resolve(values: &[f64]) -> Self {
        match find_risk_window(values) {
            Some(window) => Self { window, source: BandSource::Detected },
            None => Self { window: RiskWindow::fallback(values.len()), source: BandSource::Fallback },
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == BandSource::Fallback
    }
}
