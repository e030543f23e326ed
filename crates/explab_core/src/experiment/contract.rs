//! Named-runnable capability contract.
//!
//! # Responsibility
//! - Define the minimal contract shared by every experiment: an immutable
//!   identifying name and one runnable operation.
//! - Define the report record produced by harness runs.
//!
//! # Invariants
//! - `name()` is assigned exactly once, at construction, and never changes.
//! - `run()` returns an integer status; the contract assigns no meaning to
//!   the value and defines no failure modes.

use serde::{Deserialize, Serialize};

/// Contract for a named, runnable experiment.
///
/// Implementations receive their name at construction and expose it
/// read-only; the contract offers no operation that can change it.
pub trait Experiment {
    /// Returns the identifying name fixed at construction.
    fn name(&self) -> &str;

    /// Runs the experiment and returns an integer status.
    fn run(&self) -> i32;
}

/// Outcome record for one harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Name of the experiment that ran.
    pub name: String,
    /// Integer status returned by `run()`.
    pub status: i32,
}
