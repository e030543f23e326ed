//! Harness entry point.
//!
//! # Responsibility
//! - Print the fixed start-of-program line to stdout and exit with status 0.
//! - Keep stdout limited to that single line; diagnostics go through the
//!   `log` facade only.

use explab_core::ExperimentRegistry;
use log::{info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Arguments are accepted and ignored; there are no flags.
    let mut registry = ExperimentRegistry::new();
    if let Err(err) = registry.register_builtin_baseline() {
        warn!("event=registry_init module=cli status=error error={err}");
    }
    info!(
        "event=registry_ready module=cli status=ok core_version={} experiments={}",
        explab_core::core_version(),
        registry.len()
    );

    println!("The start of the program");
    ExitCode::SUCCESS
}
