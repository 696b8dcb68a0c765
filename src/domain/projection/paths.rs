use std::fmt::Write;

use super::value_objects::Point;

/// SVG path through `points`: one move-to followed by line-to segments.
pub fn line_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut d = String::with_capacity(points.len() * 16);
    let _ = write!(d, "M {:.2} {:.2}", first.x, first.y);
    for p in rest {
        let _ = write!(d, " L {:.2} {:.2}", p.x, p.y);
    }
    d
}

/// Closed SVG region between the line through `points` and `baseline_y`.
///
/// Starts on the baseline under the first point, follows the line and drops
/// back to the baseline under the last point before closing.
pub fn area_path(points: &[Point], baseline_y: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = String::with_capacity(points.len() * 16 + 32);
    let _ = write!(d, "M {:.2} {:.2}", first.x, baseline_y);
    for p in points {
        let _ = write!(d, " L {:.2} {:.2}", p.x, p.y);
    }
    let _ = write!(d, " L {:.2} {:.2} Z", last.x, baseline_y);
    d
}
