pub mod projection_chart;

pub use projection_chart::{ChartFrame, ProjectionChart, ProjectionSnapshot};
