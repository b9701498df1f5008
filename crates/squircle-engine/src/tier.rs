/// What the host can draw, as reported by a one-shot capability probe.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Capabilities {
    /// The host renders continuous corners natively from a radius + smoothing pair.
    pub native_corner_shape: bool,
    /// The host can clip an element to an arbitrary path.
    pub clip_path: bool,
}

/// Rendering strategy, ranked best-first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Host draws the curve; the dispatcher only writes scalar values.
    Native,
    /// The dispatcher computes a path and clips the element to it.
    ClipPath,
    /// Plain circular rounding; smoothing is dropped.
    BorderRadius,
}

impl Tier {
    /// Picks the best tier the host supports.
    pub fn select(caps: &Capabilities) -> Self {
        if caps.native_corner_shape {
            Tier::Native
        } else if caps.clip_path {
            Tier::ClipPath
        } else {
            Tier::BorderRadius
        }
    }

    /// Whether this tier writes a path and needs resize tracking.
    #[inline]
    pub const fn needs_geometry(self) -> bool {
        matches!(self, Tier::ClipPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_prefers_native_then_clip_path() {
        let all = Capabilities { native_corner_shape: true, clip_path: true };
        assert_eq!(Tier::select(&all), Tier::Native);

        let clip = Capabilities { native_corner_shape: false, clip_path: true };
        assert_eq!(Tier::select(&clip), Tier::ClipPath);

        assert_eq!(Tier::select(&Capabilities::default()), Tier::BorderRadius);
    }

    #[test]
    fn only_clip_path_needs_geometry() {
        assert!(Tier::ClipPath.needs_geometry());
        assert!(!Tier::Native.needs_geometry());
        assert!(!Tier::BorderRadius.needs_geometry());
    }

    #[test]
    fn ranking_is_best_first() {
        assert!(Tier::Native < Tier::ClipPath);
        assert!(Tier::ClipPath < Tier::BorderRadius);
    }
}
