use core::f64::consts::SQRT_2;

/// One of the four box corners, in path emission order.
///
/// Each corner is the same construction rotated by 90°: the path arrives
/// travelling along [`Corner::heading`] and leaves travelling along
/// [`Corner::turn`]. Mirroring offsets is therefore a matter of projecting
/// the same magnitudes onto a different pair of unit axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Corner {
    /// Emission order, clockwise from the top edge.
    pub const ALL: [Corner; 4] =
        [Corner::TopRight, Corner::BottomRight, Corner::BottomLeft, Corner::TopLeft];

    /// Unit direction of travel when entering the corner (+Y down).
    #[inline]
    pub const fn heading(self) -> (f64, f64) {
        match self {
            Corner::TopRight => (1.0, 0.0),
            Corner::BottomRight => (0.0, 1.0),
            Corner::BottomLeft => (-1.0, 0.0),
            Corner::TopLeft => (0.0, -1.0),
        }
    }

    /// Unit direction of travel when leaving the corner.
    #[inline]
    pub const fn turn(self) -> (f64, f64) {
        match self {
            Corner::TopRight => (0.0, 1.0),
            Corner::BottomRight => (-1.0, 0.0),
            Corner::BottomLeft => (0.0, -1.0),
            Corner::TopLeft => (1.0, 0.0),
        }
    }

    /// Offset `along * heading + across * turn`.
    #[inline]
    pub fn offset(self, along: f64, across: f64) -> (f64, f64) {
        let (hx, hy) = self.heading();
        let (tx, ty) = self.turn();
        (along * hx + across * tx, along * hy + across * ty)
    }
}

/// Derived lengths for one corner's transition-curve / arc / transition-curve run.
///
/// Recomputed on every call; nothing here is cached between calls.
///
/// Along the heading axis a corner spans `a + b + c` (first curve), the arc
/// chord, then `d` (second curve), which sums back to `p`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerPathParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// Total distance from the straight edge to the corner's end point.
    pub p: f64,
    /// Per-axis offset covered by the circular arc.
    pub arc_length: f64,
    /// Angular extent of the circular arc, in degrees.
    pub arc_measure: f64,
    pub corner_radius: f64,
}

impl CornerPathParams {
    /// Derives the corner lengths for an already-clamped `radius` and `smoothing`.
    pub fn for_corner(radius: f64, smoothing: f64) -> Self {
        let p = (1.0 + smoothing) * radius;

        // 90° at smoothing 0 (pure arc), 0° at smoothing 1 (pure transition).
        let arc_measure = 90.0 * (1.0 - smoothing);
        let arc_length = (arc_measure / 2.0).to_radians().sin() * radius * SQRT_2;

        let angle_alpha = (90.0 - arc_measure) / 2.0;
        let p3_to_p4 = radius * (angle_alpha / 2.0).to_radians().tan();

        let angle_beta = (45.0 * smoothing).to_radians();
        let c = p3_to_p4 * angle_beta.cos();
        let d = c * angle_beta.tan();

        let b = (p - arc_length - c - d) / 3.0;
        let a = 2.0 * b;

        Self { a, b, c, d, p, arc_length, arc_measure, corner_radius: radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ── corner axes ───────────────────────────────────────────────────────

    #[test]
    fn heading_and_turn_are_perpendicular() {
        for corner in Corner::ALL {
            let (hx, hy) = corner.heading();
            let (tx, ty) = corner.turn();
            assert_eq!(hx * tx + hy * ty, 0.0, "{corner:?}");
        }
    }

    #[test]
    fn each_corner_leaves_along_the_next_heading() {
        for i in 0..4 {
            let here = Corner::ALL[i];
            let next = Corner::ALL[(i + 1) % 4];
            assert_eq!(here.turn(), next.heading());
        }
    }

    #[test]
    fn offset_mirrors_per_corner() {
        assert_eq!(Corner::TopRight.offset(3.0, 1.0), (3.0, 1.0));
        assert_eq!(Corner::BottomRight.offset(3.0, 1.0), (-1.0, 3.0));
        assert_eq!(Corner::BottomLeft.offset(3.0, 1.0), (-3.0, -1.0));
        assert_eq!(Corner::TopLeft.offset(3.0, 1.0), (1.0, -3.0));
    }

    // ── params ────────────────────────────────────────────────────────────

    #[test]
    fn zero_smoothing_is_a_pure_arc() {
        let p = CornerPathParams::for_corner(20.0, 0.0);
        assert!(close(p.a, 0.0));
        assert!(close(p.b, 0.0));
        assert!(close(p.c, 0.0));
        assert!(close(p.d, 0.0));
        assert!(close(p.arc_length, 20.0));
        assert_eq!(p.arc_measure, 90.0);
        assert_eq!(p.p, 20.0);
    }

    #[test]
    fn full_smoothing_has_no_arc() {
        let p = CornerPathParams::for_corner(20.0, 1.0);
        assert!(close(p.arc_length, 0.0));
        assert_eq!(p.arc_measure, 0.0);
        assert_eq!(p.p, 40.0);
        assert!(close(p.c, p.d));
    }

    #[test]
    fn lengths_sum_to_p() {
        for &s in &[0.0, 0.25, 0.6, 1.0] {
            let p = CornerPathParams::for_corner(20.0, s);
            assert!(close(p.a + p.b + p.c + p.arc_length + p.d, p.p), "smoothing {s}");
        }
    }

    #[test]
    fn known_values_at_default_smoothing() {
        let p = CornerPathParams::for_corner(20.0, 0.6);
        assert!((p.a - 11.20105).abs() < 1e-4);
        assert!((p.b - 5.600525).abs() < 1e-4);
        assert!((p.c - 4.278235).abs() < 1e-4);
        assert!((p.d - 2.17987).abs() < 1e-4);
        assert!((p.arc_length - 8.74032).abs() < 1e-4);
        assert_eq!(p.corner_radius, 20.0);
    }
}
