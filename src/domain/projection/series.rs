use std::f64::consts::TAU;

use super::value_objects::ScenarioKind;

/// Lowest value a generated sample may take
pub const SERIES_FLOOR: f64 = -45.0;
/// Highest value a generated sample may take
pub const SERIES_CEIL: f64 = 90.0;

/// Normalized position of the pessimistic dip
pub const DIP_CENTER: f64 = 0.33;
const DIP_DEPTH: f64 = 56.0;
const DIP_SHARPNESS: f64 = 6.6;
const NOTCH_DEPTH: f64 = 18.0;
const NOTCH_HALF_WIDTH: f64 = 0.085;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Synthetic projection for one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    kind: ScenarioKind,
    values: Vec<f64>,
}

impl Series {
    /// Generate `count` samples for `kind`. Pure: equal inputs give equal output.
    pub fn generate(count: usize, kind: ScenarioKind) -> Self {
        Self { kind, values: build_static_series(count, kind) }
    }

    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Deterministic wave mix: baseline, primary sinusoid and two faster
/// sinusoids as noise. The pessimistic kind carries a gaussian dip plus a
/// triangular notch around [`DIP_CENTER`], deep enough to push a run of
/// samples below zero; the optimistic kind gets a slow positive lift.
pub fn build_static_series(count: usize, kind: ScenarioKind) -> Vec<f64> {
    let profile = kind.profile();
    let span = count.saturating_sub(1).max(1) as f64;

    (0..count)
        .map(|i| {
            let u = i as f64 / span;

            let w1 = (u * 1.45 * TAU + 0.25).sin();
            let w2 = (u * 3.3 * TAU + 0.9).sin();
            let w3 = (u * 6.6 * TAU + 1.75).sin();
            let noise = (w2 * 0.35 + w3 * 0.15) * profile.wobble;

            let mut value = profile.base + w1 * profile.amplitude + noise;

            match kind {
                ScenarioKind::Pessimistic => {
                    let distance = (u - DIP_CENTER).abs();
                    let dip = (-(distance * DIP_SHARPNESS).powi(2)).exp() * DIP_DEPTH;
                    let notch = (1.0 - distance / NOTCH_HALF_WIDTH).max(0.0) * NOTCH_DEPTH;
                    value -= dip + notch;
                }
                ScenarioKind::Optimistic => {
                    value += lerp(1.0, 2.8, (u * 0.75 * TAU - 0.35).sin() * 0.5 + 0.5);
                }
            }

            value.clamp(SERIES_FLOOR, SERIES_CEIL)
        })
        .collect()
}
