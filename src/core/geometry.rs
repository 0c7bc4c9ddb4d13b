/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angular resolution used when approximating a slice arc as a hit polygon.
///
/// Sampling trades hit-test precision for per-frame cost; 20 segments keeps
/// the polygon visually indistinguishable from the true arc at chart sizes.
pub const ARC_HIT_SAMPLES: usize = 20;

#[must_use]
pub fn point_on_arc(cx: f64, cy: f64, radius: f64, angle: f64) -> Point {
    Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Even-odd ray-casting containment test with half-open edges.
///
/// Boundary rule: each edge is half-open, so for an axis-aligned quad the
/// minimum-x/minimum-y boundary reports contained while the maximum-side
/// boundary does not. The rule is arbitrary but deterministic and applied
/// consistently to every hit region.
#[must_use]
pub fn point_in_polygon(x: f64, y: f64, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > y) != (b.y > y) {
            let x_cross = (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x;
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Approximates an annulus segment as a closed polygon.
///
/// Traces `samples` steps along the outer edge from `start_angle` to
/// `end_angle`, then back along the inner edge. A non-finite angular step
/// (zero-length sweep against zero samples) degrades to a zero step so no
/// NaN ever reaches drawing or hit-testing.
#[must_use]
pub fn arc_band_polygon(
    cx: f64,
    cy: f64,
    radius: f64,
    band_width: f64,
    start_angle: f64,
    end_angle: f64,
    samples: usize,
) -> Vec<Point> {
    let raw_step = (end_angle - start_angle) / samples as f64;
    let step = if raw_step.is_finite() { raw_step } else { 0.0 };

    let mut polygon = Vec::with_capacity((samples + 1) * 2);
    for i in 0..=samples {
        polygon.push(point_on_arc(
            cx,
            cy,
            radius + band_width / 2.0,
            start_angle + step * i as f64,
        ));
    }
    for i in 0..=samples {
        polygon.push(point_on_arc(
            cx,
            cy,
            radius - band_width / 2.0,
            end_angle - step * i as f64,
        ));
    }
    polygon
}

#[cfg(test)]
mod tests {
    use super::{ARC_HIT_SAMPLES, Point, arc_band_polygon, point_in_polygon, point_on_arc};

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn point_on_arc_walks_the_circle() {
        let right = point_on_arc(5.0, 5.0, 2.0, 0.0);
        assert!((right.x - 7.0).abs() < 1e-12);
        assert!((right.y - 5.0).abs() < 1e-12);

        let down = point_on_arc(5.0, 5.0, 2.0, std::f64::consts::FRAC_PI_2);
        assert!((down.x - 5.0).abs() < 1e-12);
        assert!((down.y - 7.0).abs() < 1e-12);
    }

    #[test]
    fn strictly_inside_point_is_contained() {
        assert!(point_in_polygon(5.0, 5.0, &unit_square()));
    }

    #[test]
    fn far_outside_point_is_not_contained() {
        assert!(!point_in_polygon(500.0, -300.0, &unit_square()));
    }

    #[test]
    fn vertex_containment_follows_half_open_rule() {
        // Minimum-corner vertex is contained, maximum-corner vertex is not.
        assert!(point_in_polygon(0.0, 0.0, &unit_square()));
        assert!(!point_in_polygon(10.0, 10.0, &unit_square()));
    }

    #[test]
    fn degenerate_polygon_is_never_hit() {
        assert!(!point_in_polygon(0.0, 0.0, &[]));
        assert!(!point_in_polygon(
            0.0,
            0.0,
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]
        ));
    }

    #[test]
    fn arc_band_polygon_has_expected_vertex_count() {
        let polygon = arc_band_polygon(0.0, 0.0, 50.0, 20.0, 0.0, 1.0, ARC_HIT_SAMPLES);
        assert_eq!(polygon.len(), (ARC_HIT_SAMPLES + 1) * 2);
    }

    #[test]
    fn arc_band_polygon_guards_non_finite_step() {
        let polygon = arc_band_polygon(0.0, 0.0, 50.0, 20.0, 0.0, 1.0, 0);
        assert_eq!(polygon.len(), 2);
        for point in polygon {
            assert!(point.x.is_finite());
            assert!(point.y.is_finite());
        }
    }

    #[test]
    fn arc_band_polygon_contains_band_midpoint() {
        let polygon = arc_band_polygon(
            100.0,
            100.0,
            50.0,
            20.0,
            0.0,
            std::f64::consts::FRAC_PI_2,
            ARC_HIT_SAMPLES,
        );
        let mid = point_on_arc(100.0, 100.0, 50.0, std::f64::consts::FRAC_PI_4);
        assert!(point_in_polygon(mid.x, mid.y, &polygon));

        let outside = point_on_arc(100.0, 100.0, 80.0, std::f64::consts::FRAC_PI_4);
        assert!(!point_in_polygon(outside.x, outside.y, &polygon));
    }
}
