//! Logging setup.
//!
//! The library itself only emits through the `log` facade; binaries and
//! tests that want output call [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig};
