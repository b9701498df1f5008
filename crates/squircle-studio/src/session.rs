//! Scripted resize session against an in-memory host.
//!
//! Exercises the full coordinator lifecycle the way a host would drive it:
//! resize callbacks followed by one `run_frame` per frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{ensure, Result};

use squircle_engine::{
    Dispatcher, DispatcherConfig, FrameReport, PartialConfig, Presentation, ResizeSource, Size,
    SquircleConfig, Subscription, SubscriptionId, Surface, SurfaceError, Tier,
};

// ── in-memory host ────────────────────────────────────────────────────────

pub struct MemorySurface {
    name: &'static str,
    size: Cell<Size>,
    attached: Cell<bool>,
    presentation: RefCell<Presentation>,
}

impl MemorySurface {
    pub fn new(name: &'static str, width: f64, height: f64) -> Rc<Self> {
        Rc::new(Self {
            name,
            size: Cell::new(Size::new(width, height)),
            attached: Cell::new(true),
            presentation: RefCell::new(Presentation::default()),
        })
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.size.set(Size::new(width, height));
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }
}

impl Surface for MemorySurface {
    fn measure(&self) -> Result<Size, SurfaceError> {
        if self.attached.get() { Ok(self.size.get()) } else { Err(SurfaceError::Detached) }
    }

    fn presentation(&self) -> Presentation {
        self.presentation.borrow().clone()
    }

    fn present(&self, presentation: Presentation) -> Result<(), SurfaceError> {
        if !self.attached.get() {
            return Err(SurfaceError::Detached);
        }
        log::debug!(
            "{}: clip={}",
            self.name,
            presentation.clip_path.as_deref().unwrap_or("none")
        );
        *self.presentation.borrow_mut() = presentation;
        Ok(())
    }
}

/// Counts live subscriptions.
#[derive(Default)]
pub struct MemoryObserver {
    next_id: Cell<u64>,
    live: Rc<Cell<u32>>,
}

impl MemoryObserver {
    pub fn live(&self) -> u32 {
        self.live.get()
    }
}

impl ResizeSource<MemorySurface> for MemoryObserver {
    fn subscribe(&self, surface: &Rc<MemorySurface>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.set(self.live.get() + 1);
        log::debug!("{}: observing (subscription {id})", surface.name);

        let live = Rc::clone(&self.live);
        Subscription::new(SubscriptionId(id), move || live.set(live.get() - 1))
    }
}

// ── script ────────────────────────────────────────────────────────────────

/// Runs the script and returns one labelled report per frame.
pub fn replay() -> Result<Vec<(&'static str, FrameReport)>> {
    let observer = Rc::new(MemoryObserver::default());
    let mut squircles =
        Dispatcher::new(DispatcherConfig::new(Tier::ClipPath), Rc::clone(&observer));
    let mut frames = Vec::new();

    let card = MemorySurface::new("card", 240.0, 160.0);
    let badge = MemorySurface::new("badge", 48.0, 48.0);
    let toast = MemorySurface::new("toast", 320.0, 56.0);

    squircles.apply(&card, SquircleConfig::new(24.0, 0.6))?;
    squircles.apply(&badge, SquircleConfig::with_radius(100.0))?;
    squircles.apply(&toast, SquircleConfig::new(12.0, 0.8))?;
    frames.push(("applied", squircles.run_frame()));

    card.resize(250.0, 160.0);
    squircles.notify_resize(&card);
    card.resize(251.0, 161.0);
    squircles.notify_resize(&card);
    frames.push(("card drag (coalesced)", squircles.run_frame()));

    card.resize(251.4, 161.6);
    squircles.notify_resize(&card);
    frames.push(("card sub-pixel jitter", squircles.run_frame()));

    squircles.update(&badge, PartialConfig::smoothing(1.0))?;
    frames.push(("badge smoothing update", squircles.run_frame()));

    badge.resize(64.0, 64.0);
    badge.detach();
    squircles.notify_resize(&badge);
    frames.push(("badge left the tree", squircles.run_frame()));

    drop(toast);
    frames.push(("toast dropped", squircles.run_frame()));

    squircles.remove(&card)?;
    ensure!(squircles.inspect(&card).is_none(), "card still managed after remove");
    ensure!(squircles.remove(&card).is_err(), "second remove must be rejected");
    frames.push(("card removed", squircles.run_frame()));

    squircles.destroy();
    ensure!(observer.live() == 0, "{} subscription(s) leaked", observer.live());

    Ok(frames)
}
