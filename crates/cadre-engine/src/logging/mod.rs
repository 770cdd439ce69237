//! Logging utilities.
//!
//! This module centralizes logger initialization. The engine itself only emits
//! through the standard `log` facade; binaries decide whether to install
//! `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
