//! Scenario records
//!
//! Provides [`ScenarioRecord`], the immutable output unit of enumeration,
//! and its [`ScenarioKind`] classification.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification of a generated scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Baseline-derived: required steps at defaults, at most one optional
    /// step varied
    Primary,
    /// Control step varied away from its default, combined with one
    /// alternative-eligible step variation
    Alternative,
}

impl ScenarioKind {
    /// String form, as persisted by the store collaborator
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Alternative => "Alternative",
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated attack scenario
///
/// Identity is `id`, assigned in enumeration order starting at 1 and
/// stable across runs for a fixed catalog and budget. Step values keep
/// catalog order; keys are a subset of the catalog's step keys. Records
/// are immutable once emitted — filtering and pagination only select,
/// never mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    id: u32,
    kind: ScenarioKind,
    step_values: IndexMap<String, String>,
}

impl ScenarioRecord {
    pub(crate) fn new(id: u32, kind: ScenarioKind, step_values: IndexMap<String, String>) -> Self {
        debug_assert!(id >= 1, "scenario ids start at 1");
        Self {
            id,
            kind,
            step_values,
        }
    }

    /// Unique, monotonically assigned identifier (≥ 1)
    #[inline]
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Primary or Alternative classification
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    /// Selected variant for a step, if the step participates
    #[inline]
    #[must_use]
    pub fn value(&self, step_key: &str) -> Option<&str> {
        self.step_values.get(step_key).map(String::as_str)
    }

    /// All `(step key, variant)` pairs in catalog order
    #[inline]
    #[must_use]
    pub fn step_values(&self) -> &IndexMap<String, String> {
        &self.step_values
    }

    /// Number of participating steps
    #[inline]
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_values.len()
    }
}
