//! Per-element state, keyed by element identity.
//!
//! Entries hold only a `Weak` reference to their element, so dropping the last
//! host-side `Rc` reclaims the element even if `remove` was never called. The
//! orphaned entry is then invisible to lookups and is swept by [`Registry::prune`].
//! Pruning drops the entry's subscription, which disconnects it.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use squircle_geometry::SquircleConfig;

use crate::scheduler::PendingJob;
use crate::surface::{Presentation, Size, Subscription, SubscriptionId};
use crate::tier::Tier;

/// Address-based identity of an element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) struct ElementKey(usize);

impl ElementKey {
    #[inline]
    pub(crate) fn of<S>(surface: &Rc<S>) -> Self {
        Self(Rc::as_ptr(surface) as usize)
    }
}

/// State owned by the registry for one managed element.
#[derive(Debug)]
pub struct ManagedElementState<S> {
    element: Weak<S>,
    pub(crate) config: SquircleConfig,
    pub(crate) tier: Tier,
    subscription: Option<Subscription>,
    pub(crate) last_dimensions: Size,
    pub(crate) pending: Option<PendingJob>,
    /// Presentation captured before the first write.
    restore: Presentation,
}

impl<S> ManagedElementState<S> {
    #[inline]
    pub fn config(&self) -> SquircleConfig {
        self.config
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[inline]
    pub fn last_dimensions(&self) -> Size {
        self.last_dimensions
    }

    #[inline]
    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    #[inline]
    pub fn restore(&self) -> &Presentation {
        &self.restore
    }

    /// Upgrades the weak element reference, if it is still alive.
    #[inline]
    pub fn element(&self) -> Option<Rc<S>> {
        self.element.upgrade()
    }

    #[inline]
    fn is_alive(&self) -> bool {
        self.element.strong_count() > 0
    }

    fn is_for(&self, surface: &Rc<S>) -> bool {
        self.is_alive() && Weak::ptr_eq(&self.element, &Rc::downgrade(surface))
    }

    /// Cancels the subscription and drops any pending job, returning the
    /// pre-managed presentation. Consumes the state so the handle cannot be
    /// cancelled twice.
    pub(crate) fn release(mut self) -> Presentation {
        self.pending = None;
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.restore
    }
}

/// Everything `register` needs to create or refresh an entry.
#[derive(Debug)]
pub struct Enrollment {
    pub config: SquircleConfig,
    pub tier: Tier,
    /// `None` on re-application keeps the entry's current subscription.
    pub subscription: Option<Subscription>,
    pub dimensions: Size,
    /// Ignored on re-application: the first snapshot wins.
    pub restore: Presentation,
}

/// Outcome of [`Registry::register`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Registration {
    Created,
    /// The element already had an entry; it was updated in place.
    Reapplied,
}

/// Identity-keyed map from element to [`ManagedElementState`].
#[derive(Debug)]
pub struct Registry<S> {
    entries: HashMap<ElementKey, ManagedElementState<S>>,
}

impl<S> Registry<S> {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Creates an entry, or updates the existing one in place.
    ///
    /// Re-registering is not an error: the advisory is logged and the entry's
    /// config, tier and dimensions are replaced. A new subscription cancels the
    /// old one before taking its place.
    pub fn register(&mut self, surface: &Rc<S>, enrollment: Enrollment) -> Registration {
        let key = ElementKey::of(surface);

        if let Some(state) = self.entries.get_mut(&key).filter(|s| s.is_for(surface)) {
            log::warn!(
                "squircle: element {key:?} is already managed; re-applying configuration"
            );
            if let Some(subscription) = enrollment.subscription {
                if let Some(old) = state.subscription.replace(subscription) {
                    old.cancel();
                }
            }
            state.config = enrollment.config;
            state.tier = enrollment.tier;
            state.last_dimensions = enrollment.dimensions;
            return Registration::Reapplied;
        }

        let state = ManagedElementState {
            element: Rc::downgrade(surface),
            config: enrollment.config,
            tier: enrollment.tier,
            subscription: enrollment.subscription,
            last_dimensions: enrollment.dimensions,
            pending: None,
            restore: enrollment.restore,
        };
        // The stored `Weak` pins the allocation, so a key can only collide with
        // an entry for the same element; anything displaced here is released.
        if let Some(displaced) = self.entries.insert(key, state) {
            drop(displaced.release());
        }
        Registration::Created
    }

    pub fn get(&self, surface: &Rc<S>) -> Option<&ManagedElementState<S>> {
        self.entries.get(&ElementKey::of(surface)).filter(|s| s.is_for(surface))
    }

    pub fn get_mut(&mut self, surface: &Rc<S>) -> Option<&mut ManagedElementState<S>> {
        self.entries.get_mut(&ElementKey::of(surface)).filter(|s| s.is_for(surface))
    }

    #[inline]
    pub fn has(&self, surface: &Rc<S>) -> bool {
        self.get(surface).is_some()
    }

    /// Removes and returns the entry. The caller owns the subscription from here.
    pub fn delete(&mut self, surface: &Rc<S>) -> Option<ManagedElementState<S>> {
        let key = ElementKey::of(surface);
        if self.get(surface).is_some() { self.entries.remove(&key) } else { None }
    }

    /// Cancels every subscription and empties the registry.
    pub fn clear(&mut self) {
        for (_, state) in self.entries.drain() {
            drop(state.release());
        }
    }

    /// Removes and yields every entry whose element is still alive; reclaimed
    /// entries are released along the way.
    pub fn drain_live(&mut self) -> Vec<ManagedElementState<S>> {
        let mut live = Vec::with_capacity(self.entries.len());
        for (_, state) in self.entries.drain() {
            if state.is_alive() {
                live.push(state);
            } else {
                drop(state.release());
            }
        }
        live
    }

    /// Drops entries whose element has been reclaimed. Returns how many were swept.
    pub fn prune(&mut self) -> usize {
        let dead: Vec<ElementKey> =
            self.entries.iter().filter(|(_, s)| !s.is_alive()).map(|(k, _)| *k).collect();
        for key in &dead {
            if let Some(state) = self.entries.remove(key) {
                drop(state.release());
            }
        }
        if !dead.is_empty() {
            log::debug!("squircle: pruned {} reclaimed element(s)", dead.len());
        }
        dead.len()
    }

    /// Number of entries whose element is still alive.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|s| s.is_alive()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── scheduler access ──────────────────────────────────────────────────

    /// Whether any entry holds an unexecuted job.
    pub(crate) fn has_pending(&self) -> bool {
        self.entries.values().any(|s| s.pending.is_some())
    }

    pub(crate) fn pending_keys(&self) -> Vec<ElementKey> {
        let mut keys: Vec<(u64, ElementKey)> = self
            .entries
            .iter()
            .filter_map(|(k, s)| s.pending.map(|job| (job.ticket, *k)))
            .collect();
        // Oldest request first; there is no cross-element ordering guarantee,
        // this only keeps runs reproducible.
        keys.sort_unstable_by_key(|(ticket, _)| *ticket);
        keys.into_iter().map(|(_, k)| k).collect()
    }

    pub(crate) fn entry_mut(&mut self, key: ElementKey) -> Option<&mut ManagedElementState<S>> {
        self.entries.get_mut(&key)
    }

    pub(crate) fn remove_key(&mut self, key: ElementKey) -> Option<ManagedElementState<S>> {
        self.entries.remove(&key)
    }
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}
