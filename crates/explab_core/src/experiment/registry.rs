//! In-process experiment registry.
//!
//! # Responsibility
//! - Hold named-runnable implementations behind the capability contract.
//! - Run experiments by name with deterministic ordering.
//!
//! # Invariants
//! - Names are unique within one registry.
//! - Registration reads an experiment's name but never changes it.
//! - Listing and `run_all` follow sorted name order.

use crate::experiment::builtin::TypeSemantics;
use crate::experiment::contract::{Experiment, RunReport};
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name under which the built-in baseline experiment registers.
pub const BUILTIN_BASELINE_NAME: &str = "type_semantics";

/// Registration/lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    EmptyName,
    DuplicateName(String),
    UnknownName(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "experiment name must not be empty"),
            Self::DuplicateName(value) => {
                write!(f, "experiment name already registered: {value}")
            }
            Self::UnknownName(value) => write!(f, "experiment not found: {value}"),
        }
    }
}

impl Error for RegistryError {}

/// Registry of named-runnable experiments keyed by name.
#[derive(Default)]
pub struct ExperimentRegistry {
    experiments: BTreeMap<String, Box<dyn Experiment>>,
}

impl ExperimentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one experiment under its constructed name.
    ///
    /// The name is taken verbatim from the experiment; whitespace-only
    /// names count as empty.
    pub fn register(&mut self, experiment: Box<dyn Experiment>) -> Result<(), RegistryError> {
        let name = experiment.name().to_string();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.experiments.contains_key(name.as_str()) {
            return Err(RegistryError::DuplicateName(name));
        }

        self.experiments.insert(name, experiment);
        Ok(())
    }

    /// Registers the built-in baseline experiment.
    pub fn register_builtin_baseline(&mut self) -> Result<(), RegistryError> {
        self.register(Box::new(TypeSemantics::new(BUILTIN_BASELINE_NAME)))
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.experiments.contains_key(name)
    }

    /// Returns registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.experiments.keys().cloned().collect()
    }

    /// Returns one experiment by name.
    pub fn get(&self, name: &str) -> Option<&dyn Experiment> {
        self.experiments.get(name).map(|experiment| experiment.as_ref())
    }

    /// Runs one experiment by name and returns its status.
    pub fn run(&self, name: &str) -> Result<i32, RegistryError> {
        let experiment = self
            .experiments
            .get(name)
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))?;
        Ok(run_logged(experiment.as_ref()))
    }

    /// Runs every registered experiment in name order.
    pub fn run_all(&self) -> Vec<RunReport> {
        self.experiments
            .values()
            .map(|experiment| RunReport {
                name: experiment.name().to_string(),
                status: run_logged(experiment.as_ref()),
            })
            .collect()
    }
}

fn run_logged(experiment: &dyn Experiment) -> i32 {
    let status = experiment.run();
    info!(
        "event=experiment_run module=core status=ok name={} exit_status={}",
        experiment.name(),
        status
    );
    status
}

#[cfg(test)]
mod tests {
    use super::{ExperimentRegistry, RegistryError, BUILTIN_BASELINE_NAME};
    use crate::experiment::builtin::TypeSemantics;
    use crate::experiment::contract::Experiment;

    #[test]
    fn registers_builtin_baseline() {
        let mut registry = ExperimentRegistry::new();
        registry
            .register_builtin_baseline()
            .expect("baseline registration");

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(BUILTIN_BASELINE_NAME));
        let experiment = registry
            .get(BUILTIN_BASELINE_NAME)
            .expect("registered experiment");
        assert_eq!(experiment.name(), BUILTIN_BASELINE_NAME);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut registry = ExperimentRegistry::new();
        registry
            .register(Box::new(TypeSemantics::new("dup")))
            .expect("first registration should succeed");
        let err = registry
            .register(Box::new(TypeSemantics::new("dup")))
            .expect_err("duplicate registration must fail");
        assert_eq!(err, RegistryError::DuplicateName("dup".to_string()));
    }

    #[test]
    fn rejects_empty_and_whitespace_names() {
        let mut registry = ExperimentRegistry::new();
        let err = registry
            .register(Box::new(TypeSemantics::new("")))
            .expect_err("empty name must fail");
        assert_eq!(err, RegistryError::EmptyName);

        let err = registry
            .register(Box::new(TypeSemantics::new("   ")))
            .expect_err("whitespace name must fail");
        assert_eq!(err, RegistryError::EmptyName);
        assert!(registry.is_empty());
    }

    #[test]
    fn run_reports_unknown_name() {
        let registry = ExperimentRegistry::new();
        let err = registry
            .run("missing")
            .expect_err("unknown name must fail");
        assert_eq!(err, RegistryError::UnknownName("missing".to_string()));
    }
}
