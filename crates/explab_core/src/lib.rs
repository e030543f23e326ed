//! Core contracts for the explab experiment harness.
//! This crate is the single source of truth for harness invariants.

pub mod experiment;
pub mod logging;

pub use experiment::builtin::TypeSemantics;
pub use experiment::contract::{Experiment, RunReport};
pub use experiment::registry::{ExperimentRegistry, RegistryError, BUILTIN_BASELINE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
