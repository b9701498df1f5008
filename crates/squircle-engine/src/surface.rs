//! Host-facing seams: the element's presentation surface and the
//! dimension-change subscription.

use std::fmt;
use std::rc::Rc;

use crate::error::SurfaceError;

/// Rendered box size of an element, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either axis moved by at least `threshold` relative to `previous`.
    #[inline]
    pub fn differs_by(self, previous: Size, threshold: f64) -> bool {
        (self.width - previous.width).abs() >= threshold
            || (self.height - previous.height).abs() >= threshold
    }
}

/// The corner-related presentation state of an element.
///
/// Captured before the first write so `remove` can put the element back
/// exactly as it was found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    /// Clip boundary (path descriptor), if any.
    pub clip_path: Option<String>,
    /// Scalar corner radius, if any.
    pub corner_radius: Option<f64>,
    /// Native corner smoothing, if any.
    pub corner_smoothing: Option<f64>,
}

/// An element's presentation surface, as seen by the dispatcher.
///
/// Methods take `&self`: hosts hand elements out as shared `Rc`s and keep
/// their mutable state behind interior mutability.
pub trait Surface {
    /// Reads the current rendered box size.
    fn measure(&self) -> Result<Size, SurfaceError>;

    /// Returns the current presentation state.
    fn presentation(&self) -> Presentation;

    /// Replaces the presentation state.
    fn present(&self, presentation: Presentation) -> Result<(), SurfaceError>;
}

/// Host mechanism that notices element size changes.
///
/// After `subscribe`, the host reports changes by calling
/// [`Dispatcher::notify_resize`](crate::Dispatcher::notify_resize) until the
/// returned [`Subscription`] is cancelled or dropped.
pub trait ResizeSource<S> {
    fn subscribe(&self, surface: &Rc<S>) -> Subscription;
}

impl<S, R: ResizeSource<S>> ResizeSource<S> for Rc<R> {
    fn subscribe(&self, surface: &Rc<S>) -> Subscription {
        (**self).subscribe(surface)
    }
}

/// Host-assigned identity of a subscription.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Live dimension-change subscription.
///
/// Disconnects exactly once: either through [`Subscription::cancel`] or when
/// dropped.
pub struct Subscription {
    id: SubscriptionId,
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(id: SubscriptionId, disconnect: impl FnOnce() + 'static) -> Self {
        Self { id, disconnect: Some(Box::new(disconnect)) }
    }

    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Disconnects now.
    pub fn cancel(mut self) {
        self.disconnect_once();
    }

    fn disconnect_once(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.disconnect_once();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &self.disconnect.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting(id: u64, hits: &Rc<Cell<u32>>) -> Subscription {
        let hits = Rc::clone(hits);
        Subscription::new(SubscriptionId(id), move || hits.set(hits.get() + 1))
    }

    // ── subscription ──────────────────────────────────────────────────────

    #[test]
    fn cancel_disconnects_once() {
        let hits = Rc::new(Cell::new(0));
        let sub = counting(1, &hits);
        assert_eq!(sub.id(), SubscriptionId(1));
        sub.cancel();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn drop_disconnects_once() {
        let hits = Rc::new(Cell::new(0));
        drop(counting(2, &hits));
        assert_eq!(hits.get(), 1);
    }

    // ── size ──────────────────────────────────────────────────────────────

    #[test]
    fn sub_threshold_change_is_not_a_difference() {
        let base = Size::new(100.0, 100.0);
        assert!(!Size::new(100.6, 99.2).differs_by(base, 1.0));
        assert!(Size::new(101.0, 100.0).differs_by(base, 1.0));
        assert!(Size::new(100.0, 98.5).differs_by(base, 1.0));
    }
}
