use serde::Serialize;
use serde_json::json;

use crate::domain::{
    logging::{LogComponent, LogLevel, get_logger},
    projection::{
        AnimationState, ChartConfig, CoordinateMapper, CursorPosition, Point, RiskBand,
        ScenarioKind, Series, area_path, line_path,
    },
};
use crate::{log_trace, log_warn};

/// Narrowest band drawn, in user units
pub const MIN_BAND_WIDTH: f64 = 10.0;

/// Everything about the chart that is fixed for the lifetime of a mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionChart {
    config: ChartConfig,
    mapper: CoordinateMapper,
    optimistic: Series,
    pessimistic: Series,
    optimistic_points: Vec<Point>,
    pessimistic_points: Vec<Point>,
    risk_band: RiskBand,
    pub optimistic_line: String,
    pub pessimistic_line: String,
    pub optimistic_area: String,
    pub pessimistic_area: String,
    /// Y of the value 0, where the dashed zero line sits
    pub zero_y: f64,
    pub band_x: f64,
    pub band_width: f64,
}

impl ProjectionChart {
    /// Generate both scenarios and derive the static drawing primitives.
    pub fn build(config: &ChartConfig) -> Self {
        let mapper = CoordinateMapper::from_config(config);
        let optimistic = Series::generate(config.sample_count, ScenarioKind::Optimistic);
        let pessimistic = Series::generate(config.sample_count, ScenarioKind::Pessimistic);

        let optimistic_points = mapper.map_points(optimistic.values());
        let pessimistic_points = mapper.map_points(pessimistic.values());
        let baseline = config.baseline_y();

        let risk_band = RiskBand::resolve(pessimistic.values());
        let band_x = mapper.index_to_x(risk_band.window.start);
        let band_width = (mapper.index_to_x(risk_band.window.end + 1) - band_x).max(MIN_BAND_WIDTH);

        if risk_band.is_fallback() {
            log_warn!(
                LogComponent::Application("ProjectionChart"),
                "⚠️ Pessimistic series never goes negative, drawing fallback risk band {}..={}",
                risk_band.window.start,
                risk_band.window.end
            );
        }
        let metadata = json!({
            "samples": config.sample_count,
            "pessimistic_min": pessimistic.min(),
            "optimistic_max": optimistic.max(),
            "band_start": risk_band.window.start,
            "band_end": risk_band.window.end,
            "band_source": risk_band.source,
        });
        get_logger().log_with_metadata(
            LogLevel::Debug,
            LogComponent::Application("ProjectionChart"),
            "📈 Projection chart built",
            &metadata.to_string(),
        );

        Self {
            optimistic_line: line_path(&optimistic_points),
            pessimistic_line: line_path(&pessimistic_points),
            optimistic_area: area_path(&optimistic_points, baseline),
            pessimistic_area: area_path(&pessimistic_points, baseline),
            zero_y: mapper.to_y(0.0),
            band_x,
            band_width,
            config: config.clone(),
            mapper,
            optimistic,
            pessimistic,
            optimistic_points,
            pessimistic_points,
            risk_band,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn series(&self, kind: ScenarioKind) -> &Series {
        match kind {
            ScenarioKind::Optimistic => &self.optimistic,
            ScenarioKind::Pessimistic => &self.pessimistic,
        }
    }

    pub fn points(&self, kind: ScenarioKind) -> &[Point] {
        match kind {
            ScenarioKind::Optimistic => &self.optimistic_points,
            ScenarioKind::Pessimistic => &self.pessimistic_points,
        }
    }

    pub fn risk_band(&self) -> RiskBand {
        self.risk_band
    }

    /// Per-frame primitives for `state`. The cursor rides the optimistic line.
    pub fn frame(&self, state: &AnimationState, reveal_fraction: f64) -> ChartFrame {
        let cursor = CursorPosition::locate(state.progress, &self.optimistic_points, &self.mapper);
        let in_risk = self.risk_band.window.contains_position(cursor.position);
        log_trace!(
            LogComponent::Application("ProjectionChart"),
            "🎯 frame phase={} position={:.2} in_risk={}",
            state.phase,
            cursor.position,
            in_risk
        );
        ChartFrame {
            cursor,
            in_risk,
            marker_opacity: if state.marker_visible { 1.0 } else { 0.0 },
            reveal_width: self.config.width * reveal_fraction.clamp(0.0, 1.0),
        }
    }

    pub fn snapshot(&self) -> ProjectionSnapshot {
        ProjectionSnapshot {
            optimistic: self.optimistic.values().to_vec(),
            pessimistic: self.pessimistic.values().to_vec(),
            risk_band: self.risk_band,
            zero_y: self.zero_y,
        }
    }
}

/// What changes between frames
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartFrame {
    pub cursor: CursorPosition,
    pub in_risk: bool,
    /// 1 while sweeping, 0 during the gap and under reduced motion
    pub marker_opacity: f64,
    pub reveal_width: f64,
}

impl ChartFrame {
    pub fn marker_visible(&self) -> bool {
        self.marker_opacity > 0.0
    }

    pub fn marker_color(&self) -> &'static str {
        if self.in_risk { RISK_RED } else { OPTIMISTIC_GREEN }
    }

    pub fn guide_stroke(&self) -> &'static str {
        if self.in_risk { "rgba(239,68,68,0.45)" } else { "rgba(255,255,255,0.10)" }
    }

    pub fn halo_opacity(&self) -> f64 {
        (if self.in_risk { 0.16 } else { 0.10 }) * self.marker_opacity
    }

    pub fn zero_line_opacity(&self) -> f64 {
        if self.in_risk { 0.55 } else { 0.28 }
    }
}

pub const OPTIMISTIC_GREEN: &str = "#22c55e";
pub const PESSIMISTIC_AMBER: &str = "#f59e0b";
pub const RISK_RED: &str = "#ef4444";

/// Serializable view of the generated data for debugging hosts
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionSnapshot {
    pub optimistic: Vec<f64>,
    pub pessimistic: Vec<f64>,
    pub risk_band: RiskBand,
    pub zero_y: f64,
}
