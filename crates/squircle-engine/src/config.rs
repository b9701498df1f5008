//! Configuration intake: sanitizing raw numbers, parsing declarative
//! attribute strings, and dispatcher settings.

use squircle_geometry::{SquircleConfig, DEFAULT_SMOOTHING};

use crate::error::ConfigError;
use crate::tier::Tier;

/// Minimum per-axis size change that triggers a recompute.
pub const DEFAULT_RESIZE_THRESHOLD: f64 = 1.0;

/// Dispatcher settings.
///
/// `tier` is the already-resolved capability tier (see [`Tier::select`]);
/// the dispatcher never probes the host itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DispatcherConfig {
    pub tier: Tier,
    /// Size changes strictly below this on both axes are ignored.
    pub resize_threshold: f64,
}

impl DispatcherConfig {
    pub fn new(tier: Tier) -> Self {
        Self { tier, ..Self::default() }
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self { tier: Tier::ClipPath, resize_threshold: DEFAULT_RESIZE_THRESHOLD }
    }
}

/// Turns raw caller numbers into a valid [`SquircleConfig`], logging each
/// adjustment at debug level.
pub fn sanitize(radius: f64, smoothing: f64) -> SquircleConfig {
    if !radius.is_finite() || radius < 0.0 {
        log::debug!("squircle: radius {radius} out of range; using 0");
    }
    if !smoothing.is_finite() {
        log::debug!("squircle: smoothing {smoothing} is not finite; using {DEFAULT_SMOOTHING}");
    } else if !(0.0..=1.0).contains(&smoothing) {
        log::debug!("squircle: smoothing {smoothing} clamped into [0, 1]");
    }
    SquircleConfig::new(radius, smoothing)
}

/// Parses a declarative attribute string such as `"radius: 24; smoothing: 0.8"`.
///
/// Pairs are separated by `;` or `,` and written as `key: value` or
/// `key=value`. Missing keys fall back to radius `0` / the default smoothing.
/// The result is sanitized.
pub fn parse_attributes(src: &str) -> Result<SquircleConfig, ConfigError> {
    let mut radius = 0.0;
    let mut smoothing = DEFAULT_SMOOTHING;

    for pair in src.split([';', ',']).map(str::trim).filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once([':', '=']) else {
            return Err(ConfigError::Malformed(pair.to_string()));
        };
        let key = key.trim();
        let value = value.trim();
        let number = || {
            value.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            })
        };
        match key {
            "radius" => radius = number()?,
            "smoothing" => smoothing = number()?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    Ok(sanitize(radius, smoothing))
}
