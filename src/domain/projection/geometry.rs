use super::value_objects::{ChartConfig, Point};

/// Linear mapping from (sample index, value) space into drawing space.
///
/// X spreads samples evenly across the inner width: `to_x` over the configured
/// `sample_count`, `map_points` over the slice it is given. Y maps
/// `[value_min, value_max]` onto the inner height inverted, so larger values
/// sit higher (smaller y). Values outside the range extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    padding: f64,
    inner_width: f64,
    inner_height: f64,
    value_min: f64,
    value_max: f64,
    sample_count: usize,
}

impl CoordinateMapper {
    pub fn new(
        width: f64,
        height: f64,
        padding: f64,
        value_min: f64,
        value_max: f64,
        sample_count: usize,
    ) -> Self {
        Self {
            padding,
            inner_width: width - padding * 2.0,
            inner_height: height - padding * 2.0,
            value_min,
            value_max,
            sample_count,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(
            config.width,
            config.height,
            config.padding,
            config.value_min,
            config.value_max,
            config.sample_count,
        )
    }

    /// X for a possibly fractional sample position
    pub fn to_x(&self, position: f64) -> f64 {
        self.spread_x(position, self.sample_count)
    }

    /// X for `position` when `count` samples span the inner width
    pub fn spread_x(&self, position: f64, count: usize) -> f64 {
        let last = count.saturating_sub(1).max(1) as f64;
        self.padding + (position / last) * self.inner_width
    }

    pub fn index_to_x(&self, index: usize) -> f64 {
        self.to_x(index as f64)
    }

    pub fn to_y(&self, value: f64) -> f64 {
        let range = self.value_max - self.value_min;
        if range == 0.0 {
            return self.padding + self.inner_height / 2.0;
        }
        let t = (value - self.value_min) / range;
        self.padding + (1.0 - t) * self.inner_height
    }

    /// Project `values` index-for-index, first on the left padding edge and
    /// last on the right one whatever the slice length
    pub fn map_points(&self, values: &[f64]) -> Vec<Point> {
        let count = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(self.spread_x(i as f64, count), self.to_y(v)))
            .collect()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

/// Position of the animated cursor along the shared index axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    /// Continuous sample position in `[0, count - 1]`
    pub position: f64,
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    /// Place the cursor at `progress` and interpolate y between the two
    /// neighbouring `points` so motion is smooth between samples.
    pub fn locate(progress: f64, points: &[Point], mapper: &CoordinateMapper) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let last_index = points.len() - 1;
        let t = progress.clamp(0.0, 1.0);
        let position = t * last_index as f64;

        let i0 = (position.floor() as usize).min(last_index);
        let i1 = (i0 + 1).min(last_index);
        let frac = position - i0 as f64;

        let y0 = points.get(i0).map_or(first.y, |p| p.y);
        let y1 = points.get(i1).map_or(y0, |p| p.y);

        Self { position, x: mapper.spread_x(position, points.len()), y: y0 + (y1 - y0) * frac }
    }
}
