//! Squircle engine: keeps continuous-corner boundaries in sync with the size
//! of host elements.
//!
//! This crate owns per-element state and the resize/frame coordination; the
//! path math itself lives in `squircle-geometry`.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dispatcher`] | `Dispatcher`: apply, update, remove, destroy |
//! | [`registry`] | weakly-held per-element state |
//! | [`scheduler`] | frame-coalesced recomputation, `FrameReport` |
//! | [`surface`] | host traits: `Surface`, `ResizeSource`, `Subscription` |
//! | [`tier`] | capability tiers |
//! | [`config`] | sanitizing, attribute parsing, `DispatcherConfig` |

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod registry;
pub mod scheduler;
pub mod surface;
pub mod tier;

pub use config::{parse_attributes, sanitize, DispatcherConfig};
pub use dispatcher::{Dispatcher, ManagedSnapshot};
pub use error::{ConfigError, SquircleError, SurfaceError};
pub use registry::{Registration, Registry};
pub use scheduler::FrameReport;
pub use surface::{Presentation, ResizeSource, Size, Subscription, SubscriptionId, Surface};
pub use tier::{Capabilities, Tier};

pub use squircle_geometry::{PartialConfig, SquircleConfig};
