/// Smoothing used when a caller supplies none (or an unusable value).
pub const DEFAULT_SMOOTHING: f64 = 0.6;

/// Corner configuration shared by all four corners.
///
/// Always holds `radius >= 0` and `smoothing ∈ [0, 1]`; the constructor
/// clamps anything else. The value is immutable: updates go through
/// [`SquircleConfig::merge`], which returns a new configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquircleConfig {
    radius: f64,
    smoothing: f64,
}

impl SquircleConfig {
    /// Builds a configuration, clamping out-of-domain values.
    ///
    /// - non-finite or negative `radius` becomes `0`
    /// - non-finite `smoothing` becomes [`DEFAULT_SMOOTHING`]
    /// - finite `smoothing` is clamped into `[0, 1]`
    pub fn new(radius: f64, smoothing: f64) -> Self {
        Self {
            radius: clamp_radius_value(radius),
            smoothing: if smoothing.is_finite() {
                smoothing.clamp(0.0, 1.0)
            } else {
                DEFAULT_SMOOTHING
            },
        }
    }

    /// Uniform radius with the default smoothing.
    #[inline]
    pub fn with_radius(radius: f64) -> Self {
        Self::new(radius, DEFAULT_SMOOTHING)
    }

    #[inline]
    pub const fn radius(self) -> f64 {
        self.radius
    }

    #[inline]
    pub const fn smoothing(self) -> f64 {
        self.smoothing
    }

    /// Returns a copy with the fields present in `partial` replaced.
    pub fn merge(self, partial: PartialConfig) -> Self {
        Self::new(
            partial.radius.unwrap_or(self.radius),
            partial.smoothing.unwrap_or(self.smoothing),
        )
    }
}

impl Default for SquircleConfig {
    fn default() -> Self {
        Self { radius: 0.0, smoothing: DEFAULT_SMOOTHING }
    }
}

/// A sparse configuration update. `None` fields keep their current value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PartialConfig {
    pub radius: Option<f64>,
    pub smoothing: Option<f64>,
}

impl PartialConfig {
    #[inline]
    pub const fn radius(radius: f64) -> Self {
        Self { radius: Some(radius), smoothing: None }
    }

    #[inline]
    pub const fn smoothing(smoothing: f64) -> Self {
        Self { radius: None, smoothing: Some(smoothing) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.is_none() && self.smoothing.is_none()
    }
}

impl From<SquircleConfig> for PartialConfig {
    fn from(config: SquircleConfig) -> Self {
        Self { radius: Some(config.radius), smoothing: Some(config.smoothing) }
    }
}

// ── clamping helpers (shared with `path`) ──────────────────────────────────

#[inline]
fn clamp_radius_value(radius: f64) -> f64 {
    if radius.is_finite() { radius.max(0.0) } else { 0.0 }
}

/// Box extents: non-finite and negative sizes collapse to zero.
#[inline]
pub(crate) fn clamp_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Smoothing inside the engine: NaN collapses to zero rather than the default,
/// so that `compute` stays total without guessing intent.
#[inline]
pub(crate) fn clamp_smoothing(s: f64) -> f64 {
    if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) }
}

/// The radius the path is actually built with: `min(radius, width/2, height/2)`.
#[inline]
pub fn effective_radius(radius: f64, width: f64, height: f64) -> f64 {
    clamp_radius_value(radius)
        .min(clamp_extent(width) / 2.0)
        .min(clamp_extent(height) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_keeps_in_range_values() {
        let c = SquircleConfig::new(12.0, 0.25);
        assert_eq!(c.radius(), 12.0);
        assert_eq!(c.smoothing(), 0.25);
    }

    #[test]
    fn new_clamps_negative_radius() {
        assert_eq!(SquircleConfig::new(-4.0, 0.5).radius(), 0.0);
        assert_eq!(SquircleConfig::new(f64::INFINITY, 0.5).radius(), 0.0);
    }

    #[test]
    fn new_clamps_smoothing() {
        assert_eq!(SquircleConfig::new(1.0, 1.7).smoothing(), 1.0);
        assert_eq!(SquircleConfig::new(1.0, -0.2).smoothing(), 0.0);
        assert_eq!(SquircleConfig::new(1.0, f64::NAN).smoothing(), DEFAULT_SMOOTHING);
    }

    // ── merge ─────────────────────────────────────────────────────────────

    #[test]
    fn merge_replaces_only_present_fields() {
        let base = SquircleConfig::new(10.0, 0.2);
        let merged = base.merge(PartialConfig::radius(30.0));
        assert_eq!(merged, SquircleConfig::new(30.0, 0.2));

        let merged = base.merge(PartialConfig::smoothing(0.9));
        assert_eq!(merged, SquircleConfig::new(10.0, 0.9));
    }

    #[test]
    fn merge_empty_is_identity() {
        let base = SquircleConfig::new(10.0, 0.2);
        assert!(PartialConfig::default().is_empty());
        assert_eq!(base.merge(PartialConfig::default()), base);
    }

    #[test]
    fn merge_sanitizes_new_values() {
        let base = SquircleConfig::new(10.0, 0.2);
        assert_eq!(base.merge(PartialConfig::smoothing(3.0)).smoothing(), 1.0);
    }

    // ── effective radius ──────────────────────────────────────────────────

    #[test]
    fn effective_radius_limited_by_short_side() {
        assert_eq!(effective_radius(100.0, 50.0, 100.0), 25.0);
        assert_eq!(effective_radius(100.0, 100.0, 40.0), 20.0);
        assert_eq!(effective_radius(8.0, 100.0, 100.0), 8.0);
    }

    #[test]
    fn effective_radius_of_empty_box_is_zero() {
        assert_eq!(effective_radius(10.0, 0.0, 100.0), 0.0);
        assert_eq!(effective_radius(10.0, -5.0, 100.0), 0.0);
        assert_eq!(effective_radius(10.0, f64::NAN, 100.0), 0.0);
    }
}
