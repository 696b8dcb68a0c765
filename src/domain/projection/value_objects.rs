use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::errors::{AppError, ChartResult};

/// Value Object - Scenario kind selecting the generation profile of a series
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    #[display(fmt = "Optimistic")]
    #[strum(serialize = "optimistic")]
    Optimistic,
    #[display(fmt = "Pessimistic")]
    #[strum(serialize = "pessimistic")]
    Pessimistic,
}

/// Generation parameters attached to a scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProfile {
    pub base: f64,
    pub amplitude: f64,
    pub wobble: f64,
}

impl ScenarioKind {
    pub fn profile(self) -> ScenarioProfile {
        match self {
            ScenarioKind::Optimistic => ScenarioProfile { base: 48.0, amplitude: 16.0, wobble: 2.0 },
            ScenarioKind::Pessimistic => ScenarioProfile { base: 36.0, amplitude: 15.0, wobble: 1.8 },
        }
    }
}

/// Value Object - Point in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry and timing of the hero chart.
///
/// Every field has a default matching the landing page, so a partial JSON
/// object such as `{"sweep_ms": 4000}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Logical drawing width (SVG user units)
    pub width: f64,
    /// Logical drawing height (SVG user units)
    pub height: f64,
    pub padding: f64,
    pub sample_count: usize,
    /// Value mapped to the bottom of the inner area
    pub value_min: f64,
    /// Value mapped to the top of the inner area
    pub value_max: f64,
    pub sweep_ms: f64,
    pub gap_ms: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 112.0,
            padding: 8.0,
            sample_count: 56,
            value_min: -40.0,
            value_max: 90.0,
            sweep_ms: 9800.0,
            gap_ms: 900.0,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let numbers = [
            self.width,
            self.height,
            self.padding,
            self.value_min,
            self.value_max,
            self.sweep_ms,
            self.gap_ms,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(AppError::ValidationError("config contains non-finite numbers".into()));
        }
        if self.sample_count < 2 {
            return Err(AppError::ValidationError(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if self.value_max <= self.value_min {
            return Err(AppError::ValidationError(format!(
                "value range is empty: [{}, {}]",
                self.value_min, self.value_max
            )));
        }
        if self.padding < 0.0 || self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(AppError::ValidationError(format!(
                "padding {} leaves no drawing area in {}x{}",
                self.padding, self.width, self.height
            )));
        }
        if self.sweep_ms <= 0.0 || self.gap_ms < 0.0 {
            return Err(AppError::ValidationError(format!(
                "invalid timing: sweep {}ms, gap {}ms",
                self.sweep_ms, self.gap_ms
            )));
        }
        Ok(())
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }

    /// Bottom edge of the inner area, used as the baseline of filled areas
    pub fn baseline_y(&self) -> f64 {
        self.height - self.padding
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
