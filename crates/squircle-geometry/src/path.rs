use std::fmt::{self, Write as _};

use crate::config::{clamp_extent, clamp_smoothing, effective_radius, SquircleConfig};
use crate::corner::{Corner, CornerPathParams};

/// A closed boundary in SVG path syntax.
///
/// Corners are emitted as relative offsets (`c`, `a`), the edges between them
/// as absolute `L` commands. Every coordinate is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathDescriptor(String);

impl PathDescriptor {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathDescriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PathDescriptor> for String {
    fn from(path: PathDescriptor) -> Self {
        path.0
    }
}

/// Builds the squircle boundary for a `width × height` box.
///
/// Total over its domain: degenerate input (empty box, zero radius, NaN) yields
/// the box outline rather than an error. The radius is clamped to
/// `min(radius, width/2, height/2)` and smoothing to `[0, 1]`.
pub fn compute(width: f64, height: f64, radius: f64, smoothing: f64) -> PathDescriptor {
    let width = clamp_extent(width);
    let height = clamp_extent(height);
    let radius = effective_radius(radius, width, height);

    let mut out = PathWriter::new();

    if radius <= 0.0 || width <= 0.0 || height <= 0.0 {
        out.box_outline(width, height);
        return out.finish();
    }

    let params = CornerPathParams::for_corner(radius, clamp_smoothing(smoothing));
    let p = params.p;

    out.move_to(width - p, 0.0);
    out.corner(Corner::TopRight, &params);
    out.line_to(width, height - p);
    out.corner(Corner::BottomRight, &params);
    out.line_to(p, height);
    out.corner(Corner::BottomLeft, &params);
    out.line_to(0.0, p);
    out.corner(Corner::TopLeft, &params);
    out.close();

    out.finish()
}

/// [`compute`] with the radius and smoothing taken from `config`.
#[inline]
pub fn compute_config(width: f64, height: f64, config: SquircleConfig) -> PathDescriptor {
    compute(width, height, config.radius(), config.smoothing())
}

// ── writer ─────────────────────────────────────────────────────────────────

struct PathWriter {
    buf: String,
}

impl PathWriter {
    fn new() -> Self {
        Self { buf: String::with_capacity(320) }
    }

    fn box_outline(&mut self, width: f64, height: f64) {
        self.move_to(0.0, 0.0);
        self.line_to(width, 0.0);
        self.line_to(width, height);
        self.line_to(0.0, height);
        self.close();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.command('M');
        self.coords(&[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.command('L');
        self.coords(&[x, y]);
    }

    /// Transition curve, arc, transition curve, all relative to the pen.
    fn corner(&mut self, corner: Corner, k: &CornerPathParams) {
        let CornerPathParams { a, b, c, d, arc_length, corner_radius, .. } = *k;

        let (x1, y1) = corner.offset(a, 0.0);
        let (x2, y2) = corner.offset(a + b, 0.0);
        let (x3, y3) = corner.offset(a + b + c, d);
        self.command('c');
        self.coords(&[x1, y1, x2, y2, x3, y3]);

        let (ax, ay) = corner.offset(arc_length, arc_length);
        self.command('a');
        self.coords(&[corner_radius, corner_radius]);
        self.buf.push_str(" 0 0 1");
        self.coords(&[ax, ay]);

        let (x1, y1) = corner.offset(d, c);
        let (x2, y2) = corner.offset(d, b + c);
        let (x3, y3) = corner.offset(d, a + b + c);
        self.command('c');
        self.coords(&[x1, y1, x2, y2, x3, y3]);
    }

    fn close(&mut self) {
        self.command('Z');
    }

    fn command(&mut self, cmd: char) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push(cmd);
    }

    fn coords(&mut self, values: &[f64]) {
        for &v in values {
            self.buf.push(' ');
            push_number(&mut self.buf, v);
        }
    }

    fn finish(self) -> PathDescriptor {
        PathDescriptor(self.buf)
    }
}

/// Rounds half away from zero at two decimals.
///
/// Magnitudes too large to scale are returned as-is; they carry no fraction.
#[inline]
pub(crate) fn round2(v: f64) -> f64 {
    let scaled = v * 100.0;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / 100.0
}

/// Shortest decimal form of `round2(v)`; negative zero prints as `0`.
fn push_number(buf: &mut String, v: f64) {
    let r = round2(v);
    if r == 0.0 {
        buf.push('0');
    } else {
        // Writing into a String cannot fail.
        let _ = write!(buf, "{r}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(v: f64) -> String {
        let mut s = String::new();
        push_number(&mut s, v);
        s
    }

    // ── number formatting ─────────────────────────────────────────────────

    #[test]
    fn numbers_round_to_two_decimals() {
        assert_eq!(number(8.740_32), "8.74");
        assert_eq!(number(21.079_8), "21.08");
        assert_eq!(number(0.125), "0.13");
        assert_eq!(number(-2.179_87), "-2.18");
    }

    #[test]
    fn numbers_have_no_trailing_zeros() {
        assert_eq!(number(80.0), "80");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(-0.001), "0");
    }

    #[test]
    fn huge_magnitudes_print_unscaled() {
        assert_eq!(number(1e307), format!("{}", 1e307_f64));
        assert_eq!(number(-f64::MAX), format!("{}", -f64::MAX));
    }

    // ── degenerate boxes ──────────────────────────────────────────────────

    #[test]
    fn zero_radius_is_the_box_outline() {
        assert_eq!(compute(100.0, 50.0, 0.0, 0.6).as_str(), "M 0 0 L 100 0 L 100 50 L 0 50 Z");
    }

    #[test]
    fn empty_box_is_a_closed_outline() {
        assert_eq!(compute(0.0, 50.0, 10.0, 0.6).as_str(), "M 0 0 L 0 0 L 0 50 L 0 50 Z");
        assert_eq!(compute(-10.0, -5.0, 10.0, 0.6).as_str(), "M 0 0 L 0 0 L 0 0 L 0 0 Z");
    }

    #[test]
    fn non_finite_input_is_degenerate() {
        assert_eq!(compute(f64::NAN, 50.0, 10.0, 0.6).as_str(), "M 0 0 L 0 0 L 0 50 L 0 50 Z");
        assert_eq!(
            compute(100.0, 50.0, f64::NAN, 0.6).as_str(),
            "M 0 0 L 100 0 L 100 50 L 0 50 Z"
        );
    }

    #[test]
    fn huge_finite_extents_never_overflow() {
        let outline = compute(1e307, 1e307, 0.0, 0.6);
        let w = format!("{}", 1e307_f64);
        assert_eq!(outline.as_str(), format!("M 0 0 L {w} 0 L {w} {w} L 0 {w} Z"));

        let path = compute(1e307, 1e307, 1e306, 0.6);
        let s = path.as_str();
        assert!(s.starts_with("M ") && s.ends_with(" Z"));
        assert!(!s.contains("inf") && !s.contains("NaN"));
        assert_eq!(s.matches(" a ").count(), 4);
    }

    // ── squircle paths ────────────────────────────────────────────────────

    #[test]
    fn default_smoothing_golden_path() {
        let expected = "M 68 0 \
            c 11.2 0 16.8 0 21.08 2.18 a 20 20 0 0 1 8.74 8.74 \
            c 2.18 4.28 2.18 9.88 2.18 21.08 \
            L 100 68 \
            c 0 11.2 0 16.8 -2.18 21.08 a 20 20 0 0 1 -8.74 8.74 \
            c -4.28 2.18 -9.88 2.18 -21.08 2.18 \
            L 32 100 \
            c -11.2 0 -16.8 0 -21.08 -2.18 a 20 20 0 0 1 -8.74 -8.74 \
            c -2.18 -4.28 -2.18 -9.88 -2.18 -21.08 \
            L 0 32 \
            c 0 -11.2 0 -16.8 2.18 -21.08 a 20 20 0 0 1 8.74 -8.74 \
            c 4.28 -2.18 9.88 -2.18 21.08 -2.18 \
            Z";
        assert_eq!(compute(100.0, 100.0, 20.0, 0.6).as_str(), expected);
    }

    #[test]
    fn zero_smoothing_emits_flat_transitions_and_quarter_arcs() {
        let path = compute(100.0, 100.0, 20.0, 0.0);
        let s = path.as_str();
        assert!(s.starts_with("M 80 0 c 0 0 0 0 0 0 a 20 20 0 0 1 20 20 c 0 0 0 0 0 0 L 100 80"));
        assert_eq!(s.matches("c 0 0 0 0 0 0").count(), 8);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(compute(100.0, 100.0, 20.0, 0.6), compute(100.0, 100.0, 20.0, 0.6));
    }

    #[test]
    fn oversized_radius_clamps_to_short_side() {
        assert_eq!(compute(50.0, 100.0, 100.0, 0.6), compute(50.0, 100.0, 25.0, 0.6));
    }

    #[test]
    fn out_of_range_smoothing_is_clamped() {
        assert_eq!(compute(80.0, 80.0, 10.0, 4.0), compute(80.0, 80.0, 10.0, 1.0));
        assert_eq!(compute(80.0, 80.0, 10.0, -1.0), compute(80.0, 80.0, 10.0, 0.0));
    }

    #[test]
    fn compute_config_matches_compute() {
        let cfg = SquircleConfig::new(12.0, 0.4);
        assert_eq!(compute_config(64.0, 48.0, cfg), compute(64.0, 48.0, 12.0, 0.4));
    }

    #[test]
    fn path_has_four_corners_and_one_close() {
        let path = compute(200.0, 120.0, 30.0, 0.8);
        let s = path.as_str();
        assert_eq!(s.matches(" a ").count(), 4);
        assert_eq!(s.matches(" c ").count(), 8);
        assert_eq!(s.matches(" L ").count(), 3);
        assert_eq!(s.matches('Z').count(), 1);
        assert!(s.starts_with('M'));
    }
}
