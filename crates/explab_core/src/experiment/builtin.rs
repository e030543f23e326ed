//! Built-in baseline experiment.

use crate::experiment::contract::Experiment;

/// The one concrete experiment shipped with the harness.
///
/// Holds its name from construction onward and exposes it read-only.
/// `run()` prints a fixed greeting and reports status `0`; the status is
/// fixed rather than derived from the print, which cannot fail visibly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSemantics {
    name: String,
}

impl TypeSemantics {
    /// Creates the experiment with its identifying name.
    ///
    /// The name is stored verbatim; any string is accepted here, and
    /// registration is where empty names get rejected.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Experiment for TypeSemantics {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> i32 {
        println!("hello");
        0
    }
}
