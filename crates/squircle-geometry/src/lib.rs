//! Path construction for continuous ("squircle") corners.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! preview tooling, tests, and the element coordinator in `squircle-engine`
//! alike. Every function here is pure: the same box and configuration always
//! produce a byte-identical [`PathDescriptor`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `SquircleConfig`, `PartialConfig`, clamping helpers |
//! | [`corner`] | `Corner`, `CornerPathParams` |
//! | [`path`] | `compute` entry point, `PathDescriptor` |
//! | [`svg`] | standalone SVG document wrapper for previews |
//!
//! # Quick start
//!
//! ```rust
//! use squircle_geometry::compute;
//!
//! let path = compute(100.0, 100.0, 20.0, 0.6);
//! assert!(path.as_str().starts_with("M 68 0 c"));
//! assert!(path.as_str().ends_with('Z'));
//! ```

pub mod config;
pub mod corner;
pub mod path;
pub mod svg;

pub use config::{PartialConfig, SquircleConfig, DEFAULT_SMOOTHING};
pub use corner::{Corner, CornerPathParams};
pub use path::{compute, compute_config, PathDescriptor};
pub use svg::svg_document;
