//! Experiment harness contracts.
//!
//! This module defines the named-runnable capability contract, the built-in
//! baseline experiment, and in-process registry wiring.

pub mod builtin;
pub mod contract;
pub mod registry;
