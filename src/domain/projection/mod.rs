pub mod animation;
pub mod easing;
pub mod geometry;
pub mod paths;
pub mod risk;
pub mod series;
pub mod value_objects;

pub use animation::{
    AnimationDriver, AnimationPhase, AnimationState, MotionPreference, RevealTransition, SweepCycle,
};
pub use easing::CubicBezier;
pub use geometry::{CoordinateMapper, CursorPosition};
pub use paths::{area_path, line_path};
pub use risk::{BandSource, RiskBand, RiskWindow, find_risk_window};
pub use series::{SERIES_CEIL, SERIES_FLOOR, Series, build_static_series};
pub use value_objects::{ChartConfig, Point, ScenarioKind, ScenarioProfile};
