//! Step catalog and its builder
//!
//! Provides [`StepCatalog`], the immutable, ordered step table the
//! enumeration engine reads, and [`CatalogBuilder`], the only way to
//! construct one. Every structural invariant is checked in
//! [`CatalogBuilder::build`]; a catalog that exists is well-formed.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CatalogError;
use crate::step::StepDefinition;

/// Ordered, immutable table of step definitions
///
/// Declaration order is significant: it is the enumeration order contract.
/// Beyond the step table itself, a catalog carries three designations:
///
/// - the **anchor** step, whose variants drive the outer enumeration loop;
/// - the **control** step, whose non-default variants define Alternative
///   scenarios;
/// - the **alternative-eligible** steps, the small set varied (one at a
///   time) alongside a control override.
///
/// Catalogs are `Send + Sync` and safely shared by concurrent readers.
#[derive(Debug, Clone, Serialize)]
pub struct StepCatalog {
    steps: IndexMap<String, StepDefinition>,
    anchor: String,
    control: String,
    alternative_steps: Vec<String>,
}

impl StepCatalog {
    /// Look up a step by key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StepDefinition> {
        self.steps.get(key)
    }

    /// Look up a step, raising [`CatalogError::UnknownStep`] when absent
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownStep`] for keys not in the catalog.
    pub fn require(&self, key: &str) -> Result<&StepDefinition, CatalogError> {
        self.steps
            .get(key)
            .ok_or_else(|| CatalogError::UnknownStep(key.to_string()))
    }

    /// Check whether a step key exists
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.steps.contains_key(key)
    }

    /// All steps in declared order
    pub fn steps(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.values()
    }

    /// Required steps in declared order
    pub fn required_steps(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.values().filter(|s| s.required())
    }

    /// Optional steps (`required == false`) in declared order
    pub fn optional_steps(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.values().filter(|s| !s.required())
    }

    /// The anchor step definition
    ///
    /// Existence and `required` status were validated at build time.
    #[must_use]
    pub fn anchor(&self) -> &StepDefinition {
        &self.steps[&self.anchor]
    }

    /// The control step definition
    #[must_use]
    pub fn control(&self) -> &StepDefinition {
        &self.steps[&self.control]
    }

    /// Alternative-eligible step definitions in designation order
    pub fn alternative_steps(&self) -> impl Iterator<Item = &StepDefinition> {
        self.alternative_steps.iter().map(|k| &self.steps[k])
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the catalog has no steps
    ///
    /// Always false for a built catalog (anchor and control must exist),
    /// kept for API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total variant count across all steps
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.steps.values().map(StepDefinition::variant_count).sum()
    }
}

/// Builder for [`StepCatalog`]
///
/// Steps are recorded in the order [`CatalogBuilder::step`] is called;
/// that order becomes the catalog's declared order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    steps: Vec<StepDefinition>,
    anchor: Option<String>,
    control: Option<String>,
    alternative_steps: Vec<String>,
}

impl CatalogBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step definition
    #[must_use]
    pub fn step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    /// Designate the anchor step
    #[must_use]
    pub fn anchor(mut self, key: impl Into<String>) -> Self {
        self.anchor = Some(key.into());
        self
    }

    /// Designate the control step
    #[must_use]
    pub fn control(mut self, key: impl Into<String>) -> Self {
        self.control = Some(key.into());
        self
    }

    /// Mark a step as alternative-eligible
    #[must_use]
    pub fn alternative_step(mut self, key: impl Into<String>) -> Self {
        self.alternative_steps.push(key.into());
        self
    }

    /// Validate and build the catalog
    ///
    /// # Errors
    /// Returns the first [`CatalogError`] found: duplicate step keys,
    /// missing or non-required anchor/control, anchor == control, or an
    /// alternative step that is unknown or collides with anchor/control.
    pub fn build(self) -> Result<StepCatalog, CatalogError> {
        let mut steps = IndexMap::with_capacity(self.steps.len());
        for step in self.steps {
            let key = step.key().to_string();
            if steps.insert(key.clone(), step).is_some() {
                return Err(CatalogError::DuplicateStep(key));
            }
        }

        let anchor = self.anchor.ok_or(CatalogError::MissingAnchor)?;
        let control = self.control.ok_or(CatalogError::MissingControl)?;
        if anchor == control {
            return Err(CatalogError::AnchorControlConflict(anchor));
        }
        for key in [&anchor, &control] {
            let step = steps
                .get(key)
                .ok_or_else(|| CatalogError::UnknownStep(key.clone()))?;
            if !step.required() {
                return Err(CatalogError::NotRequired(key.clone()));
            }
        }
        for key in &self.alternative_steps {
            if !steps.contains_key(key) {
                return Err(CatalogError::UnknownStep(key.clone()));
            }
            if *key == anchor || *key == control {
                return Err(CatalogError::AlternativeStepConflict(key.clone()));
            }
        }

        let catalog = StepCatalog {
            steps,
            anchor,
            control,
            alternative_steps: self.alternative_steps,
        };
        tracing::debug!(
            steps = catalog.len(),
            variants = catalog.variant_count(),
            anchor = catalog.anchor().key(),
            control = catalog.control().key(),
            "step catalog built"
        );
        Ok(catalog)
    }
}
