// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Workflow reports

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::executors::CommandResult;

/// Step results in execution order, serialized as a map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepResults {
    steps: Vec<(String, CommandResult)>,
}

impl StepResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step. Re-recording a name replaces its result in place.
    pub fn insert(&mut self, name: impl Into<String>, result: CommandResult) {
        let name = name.into();
        match self.steps.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = result,
            None => self.steps.push((name, result)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandResult> {
        self.steps.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandResult)> {
        self.steps.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// True when every recorded step succeeded (vacuously true when empty)
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|(_, r)| r.success)
    }

    /// Names of the steps that failed
    pub fn failed(&self) -> Vec<String> {
        self.steps
            .iter()
            .filter(|(_, r)| !r.success)
            .map(|(n, _)| n.clone())
            .collect()
    }
}

impl Serialize for StepResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for (name, result) in &self.steps {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

/// Result of format-then-validate
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FormatValidateReport {
    pub format: CommandResult,
    pub validate: CommandResult,
    pub overall_success: bool,
}

impl FormatValidateReport {
    pub fn new(format: CommandResult, validate: CommandResult) -> Self {
        let overall_success = format.success && validate.success;
        Self {
            format,
            validate,
            overall_success,
        }
    }

    pub fn failed_steps(&self) -> Vec<String> {
        let mut failed = Vec::new();
        if !self.format.success {
            failed.push("format".to_string());
        }
        if !self.validate.success {
            failed.push("validate".to_string());
        }
        failed
    }
}

/// Result of the full pipeline
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PipelineReport {
    /// Target path as given
    pub path: String,
    pub steps: StepResults,
    pub overall_success: bool,
}

impl PipelineReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            steps: StepResults::new(),
            overall_success: false,
        }
    }

    /// Stop early: a mandatory step failed
    pub(crate) fn abort(mut self) -> Self {
        self.overall_success = false;
        self
    }

    /// All steps ran; success is the AND of every recorded step
    pub(crate) fn finish(mut self) -> Self {
        self.overall_success = self.steps.all_succeeded();
        self
    }
}
