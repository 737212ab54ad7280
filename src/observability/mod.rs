//! Structured logging setup.
//!
//! The library logs through `tracing` macros only. Binaries call
//! [`init_tracing`] once to install a subscriber that prints events to stderr.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `trace_level` in [`Config`](crate::Config)
//! 2. Default: `"info"`
//!
//! The level string accepts full `EnvFilter` directives such as
//! `"vitrine=debug"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber construction and installation

mod init;

pub use init::init_tracing;
