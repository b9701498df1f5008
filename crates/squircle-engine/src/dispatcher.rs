use std::rc::Rc;

use squircle_geometry::{compute_config, PartialConfig, PathDescriptor, SquircleConfig};

use crate::config::DispatcherConfig;
use crate::error::{SquircleError, SurfaceError};
use crate::registry::{Enrollment, Registration, Registry};
use crate::scheduler::{FrameReport, Scheduler};
use crate::surface::{Presentation, ResizeSource, Size, Surface, SubscriptionId};
use crate::tier::Tier;

/// Read-only view of one managed element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ManagedSnapshot {
    pub config: SquircleConfig,
    pub tier: Tier,
    pub subscription: Option<SubscriptionId>,
    pub last_dimensions: Size,
    /// A recomputation is scheduled for the next frame.
    pub pending: bool,
}

/// Entry point: applies, updates and removes squircle corners on host elements.
///
/// The capability tier is fixed at construction. For [`Tier::ClipPath`] the
/// dispatcher subscribes to dimension changes through `R` and recomputes the
/// path on the frame after a change (see [`Dispatcher::run_frame`]).
///
/// Single-threaded by construction: elements are `Rc`s and every operation
/// completes synchronously.
///
/// ```rust,ignore
/// let mut squircles = Dispatcher::new(DispatcherConfig::new(tier), host.resize_source());
/// squircles.apply(&card, SquircleConfig::new(24.0, 0.6))?;
///
/// // host resize callback:
/// squircles.notify_resize(&card);
/// // host frame callback:
/// let report = squircles.run_frame();
/// ```
pub struct Dispatcher<S, R> {
    tier: Tier,
    registry: Registry<S>,
    scheduler: Scheduler,
    resize: R,
}

impl<S: Surface, R: ResizeSource<S>> Dispatcher<S, R> {
    pub fn new(config: DispatcherConfig, resize: R) -> Self {
        log::debug!("squircle: dispatcher using {:?} tier", config.tier);
        Self {
            tier: config.tier,
            registry: Registry::new(),
            scheduler: Scheduler::new(config.resize_threshold),
            resize,
        }
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[inline]
    pub fn resize_source(&self) -> &R {
        &self.resize
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Renders `config` onto `surface` and starts managing it.
    ///
    /// Applying to an already-managed element re-applies in place: config is
    /// replaced, the existing subscription is kept, and the call returns
    /// [`Registration::Reapplied`].
    pub fn apply(
        &mut self,
        surface: &Rc<S>,
        config: SquircleConfig,
    ) -> Result<Registration, SquircleError> {
        let existing = self.registry.get(surface);
        let restore = match existing {
            Some(state) => state.restore().clone(),
            None => surface.presentation(),
        };
        let has_subscription = existing.is_some_and(|s| s.subscription_id().is_some());

        let dimensions = self.render(surface, config, &restore)?;

        let subscription = (self.tier.needs_geometry() && !has_subscription)
            .then(|| self.resize.subscribe(surface));

        let registration = self.registry.register(
            surface,
            Enrollment { config, tier: self.tier, subscription, dimensions, restore },
        );
        log::debug!(
            "squircle: {registration:?} radius={} smoothing={}",
            config.radius(),
            config.smoothing()
        );
        Ok(registration)
    }

    /// Merges `partial` into the element's config and re-renders.
    /// The dimension-change subscription is left untouched.
    pub fn update(&mut self, surface: &Rc<S>, partial: PartialConfig) -> Result<(), SquircleError> {
        let state = self.registry.get(surface).ok_or(SquircleError::NotManaged)?;
        let config = state.config().merge(partial);
        let restore = state.restore().clone();

        let dimensions = self.render(surface, config, &restore)?;

        let state = self.registry.get_mut(surface).ok_or(SquircleError::NotManaged)?;
        state.config = config;
        if self.tier.needs_geometry() {
            state.last_dimensions = dimensions;
        }
        Ok(())
    }

    /// Stops managing `surface` and restores its pre-managed presentation.
    pub fn remove(&mut self, surface: &Rc<S>) -> Result<(), SquircleError> {
        let state = self.registry.delete(surface).ok_or(SquircleError::NotManaged)?;
        let restore = state.release();
        if let Err(err) = surface.present(restore) {
            // Entry and subscription are already gone; the element just keeps its look.
            log::warn!("squircle: could not restore presentation on remove: {err}");
        }
        Ok(())
    }

    /// Removes every managed element. Safe to call repeatedly.
    /// Returns how many elements were restored.
    pub fn destroy(&mut self) -> usize {
        let states = self.registry.drain_live();
        let count = states.len();
        for state in states {
            let element = state.element();
            let restore = state.release();
            if let Some(element) = element {
                if let Err(err) = element.present(restore) {
                    log::warn!("squircle: could not restore presentation on destroy: {err}");
                }
            }
        }
        if count > 0 {
            log::debug!("squircle: destroyed {count} managed element(s)");
        }
        count
    }

    // ── host callbacks ────────────────────────────────────────────────────

    /// Records a dimension change; the recomputation runs on the next
    /// [`run_frame`](Self::run_frame). Returns `true` if a job is now pending.
    pub fn notify_resize(&mut self, surface: &Rc<S>) -> bool {
        let Some(state) = self.registry.get_mut(surface) else {
            log::trace!("squircle: resize for unmanaged element ignored");
            return false;
        };
        if !state.tier().needs_geometry() {
            return false;
        }
        if self.scheduler.schedule(state) {
            log::trace!("squircle: coalesced resize into pending job");
        }
        true
    }

    /// Runs every pending recomputation. Call once per host frame.
    pub fn run_frame(&mut self) -> FrameReport {
        self.scheduler.run_frame(&mut self.registry)
    }

    // ── inspection ────────────────────────────────────────────────────────

    /// Returns `None` for elements that are not managed.
    pub fn inspect(&self, surface: &Rc<S>) -> Option<ManagedSnapshot> {
        self.registry.get(surface).map(|state| ManagedSnapshot {
            config: state.config(),
            tier: state.tier(),
            subscription: state.subscription_id(),
            last_dimensions: state.last_dimensions(),
            pending: state.pending.is_some(),
        })
    }

    #[inline]
    pub fn is_managed(&self, surface: &Rc<S>) -> bool {
        self.registry.has(surface)
    }

    /// Number of managed elements that are still alive.
    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether the next [`run_frame`](Self::run_frame) has work to do.
    pub fn has_pending(&self) -> bool {
        self.registry.has_pending()
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Writes the tier's presentation. Returns the measured size for
    /// geometry tiers, `Size::ZERO` otherwise.
    fn render(
        &self,
        surface: &S,
        config: SquircleConfig,
        restore: &Presentation,
    ) -> Result<Size, SurfaceError> {
        if !self.tier.needs_geometry() {
            surface.present(presentation_for(self.tier, config, restore, None))?;
            return Ok(Size::ZERO);
        }
        let size = surface.measure()?;
        let path = compute_config(size.width, size.height, config);
        surface.present(presentation_for(self.tier, config, restore, Some(path)))?;
        Ok(size)
    }
}

/// The presentation a tier writes, layered over the pre-managed snapshot.
pub(crate) fn presentation_for(
    tier: Tier,
    config: SquircleConfig,
    base: &Presentation,
    path: Option<PathDescriptor>,
) -> Presentation {
    let mut out = base.clone();
    match tier {
        Tier::ClipPath => out.clip_path = path.map(PathDescriptor::into_string),
        Tier::Native => {
            out.corner_radius = Some(config.radius());
            out.corner_smoothing = Some(config.smoothing());
        }
        Tier::BorderRadius => out.corner_radius = Some(config.radius()),
    }
    out
}
