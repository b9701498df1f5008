//! Frame-coalesced recomputation after dimension changes.
//!
//! Per element there is at most one pending job. A notification replaces any
//! job that has not run yet; [`Scheduler::run_frame`] executes every pending
//! job once, on the host's frame boundary.
//!
//! Lifecycle of an element, as seen from here:
//!
//! ```text
//! UNREGISTERED ──apply──▶ APPLIED ──remove/destroy──▶ REMOVED
//!                          │  ▲
//!                          └──┘ notify + run_frame
//!                          │
//!                          └──refresh failed──▶ DETACHED_ERROR
//! ```
//!
//! APPLIED is "has a registry entry"; both terminal states delete the entry.
//! A failing refresh never escapes `run_frame`: the element is detached and
//! the remaining jobs in the frame still run.

use squircle_geometry::compute_config;

use crate::dispatcher::presentation_for;
use crate::error::SurfaceError;
use crate::registry::{ManagedElementState, Registry};
use crate::surface::Surface;

/// A scheduled-but-unexecuted recomputation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct PendingJob {
    /// Monotonic across the scheduler; a replaced job's ticket is never run.
    pub(crate) ticket: u64,
}

/// What one [`Scheduler::run_frame`] did.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameReport {
    /// Index of the frame, starting at 0.
    pub frame: u64,
    /// Jobs that recomputed and wrote a new path.
    pub recomputed: usize,
    /// Jobs discarded because the size moved less than the threshold.
    pub skipped: usize,
    /// Elements detached because their refresh failed.
    pub detached: usize,
    /// Entries swept because their element was reclaimed.
    pub pruned: usize,
}

impl FrameReport {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.recomputed == 0 && self.skipped == 0 && self.detached == 0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Refresh {
    Recomputed,
    BelowThreshold,
}

#[derive(Debug)]
pub(crate) struct Scheduler {
    threshold: f64,
    next_ticket: u64,
    frame_index: u64,
}

impl Scheduler {
    pub(crate) fn new(threshold: f64) -> Self {
        Self { threshold, next_ticket: 0, frame_index: 0 }
    }

    /// Replaces the element's pending job with a fresh one.
    /// Returns `true` if an unexecuted job was cancelled.
    pub(crate) fn schedule<S>(&mut self, state: &mut ManagedElementState<S>) -> bool {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        state.pending.replace(PendingJob { ticket }).is_some()
    }

    /// Runs every pending job once.
    pub(crate) fn run_frame<S: Surface>(&mut self, registry: &mut Registry<S>) -> FrameReport {
        let mut report = FrameReport { frame: self.frame_index, ..FrameReport::default() };
        self.frame_index = self.frame_index.wrapping_add(1);

        report.pruned = registry.prune();

        for key in registry.pending_keys() {
            let Some(state) = registry.entry_mut(key) else { continue };
            let Some(job) = state.pending.take() else { continue };

            match refresh(state, self.threshold) {
                Ok(Refresh::Recomputed) => report.recomputed += 1,
                Ok(Refresh::BelowThreshold) => {
                    log::trace!("squircle: job {} below threshold; discarded", job.ticket);
                    report.skipped += 1;
                }
                Err(err) => {
                    log::warn!("squircle: detaching element {key:?} after failed refresh: {err}");
                    if let Some(state) = registry.remove_key(key) {
                        drop(state.release());
                    }
                    report.detached += 1;
                }
            }
        }

        report
    }
}

/// Re-measures one element and rewrites its path if the size moved enough.
fn refresh<S: Surface>(
    state: &mut ManagedElementState<S>,
    threshold: f64,
) -> Result<Refresh, SurfaceError> {
    let element = state.element().ok_or(SurfaceError::Detached)?;
    let size = element.measure()?;

    if !size.differs_by(state.last_dimensions, threshold) {
        return Ok(Refresh::BelowThreshold);
    }

    let path = compute_config(size.width, size.height, state.config);
    log::trace!(
        "squircle: recomputed {}x{} -> {}x{}",
        state.last_dimensions.width,
        state.last_dimensions.height,
        size.width,
        size.height
    );
    element.present(presentation_for(state.tier, state.config, state.restore(), Some(path)))?;
    state.last_dimensions = size;
    Ok(Refresh::Recomputed)
}
