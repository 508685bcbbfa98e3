//! Interactive scenario construction
//!
//! Provides [`ScenarioBuilder`], the mutable per-step selection model
//! behind the builder view. Unlike enumeration, which is deterministic by
//! contract, the builder offers explicit randomization entry points; the
//! caller supplies the random source.

use std::collections::HashMap;

use asb_catalog::{CatalogError, StepCatalog, StepDefinition};
use rand::Rng;

/// Mutable per-step variant selection over a catalog
///
/// Every selection is validated against the catalog: unknown steps and
/// unknown variants are rejected, so the builder can never hold a value
/// the catalog does not define. Read-side iteration follows catalog order
/// regardless of selection order.
#[derive(Debug, Clone)]
pub struct ScenarioBuilder<'a> {
    catalog: &'a StepCatalog,
    selections: HashMap<String, String>,
}

impl<'a> ScenarioBuilder<'a> {
    /// Create an empty builder over `catalog`
    #[must_use]
    pub fn new(catalog: &'a StepCatalog) -> Self {
        Self {
            catalog,
            selections: HashMap::new(),
        }
    }

    /// The catalog this builder validates against
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'a StepCatalog {
        self.catalog
    }

    /// Select `variant` for `step_key`, replacing any prior selection
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownStep`] or
    /// [`CatalogError::UnknownVariant`] when the pair is not in the
    /// catalog.
    pub fn select(
        &mut self,
        step_key: &str,
        variant: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let step = self.catalog.require(step_key)?;
        let variant = variant.into();
        if !step.has_variant(&variant) {
            return Err(CatalogError::UnknownVariant {
                step: step_key.to_string(),
                variant,
            });
        }
        self.selections.insert(step_key.to_string(), variant);
        Ok(())
    }

    /// Select a uniformly random variant for `step_key`
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownStep`] for keys not in the catalog.
    pub fn select_random<R: Rng + ?Sized>(
        &mut self,
        step_key: &str,
        rng: &mut R,
    ) -> Result<&'a str, CatalogError> {
        let step = self.catalog.require(step_key)?;
        let variant = &step.variants()[rng.random_range(0..step.variant_count())];
        self.selections
            .insert(step_key.to_string(), variant.clone());
        Ok(variant.as_str())
    }

    /// Select a random variant for every step, required and optional alike
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for step in self.catalog.steps() {
            let variant = &step.variants()[rng.random_range(0..step.variant_count())];
            self.selections
                .insert(step.key().to_string(), variant.clone());
        }
    }

    /// Drop the selection for one step
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownStep`] for keys not in the catalog,
    /// selected or not.
    pub fn clear(&mut self, step_key: &str) -> Result<(), CatalogError> {
        self.catalog.require(step_key)?;
        self.selections.remove(step_key);
        Ok(())
    }

    /// Drop every selection
    pub fn reset(&mut self) {
        self.selections.clear();
    }

    /// Current selection for a step, if any
    #[inline]
    #[must_use]
    pub fn selection(&self, step_key: &str) -> Option<&str> {
        self.selections.get(step_key).map(String::as_str)
    }

    /// Selected `(step key, variant)` pairs in catalog order
    pub fn selections(&self) -> impl Iterator<Item = (&'a str, &str)> + '_ {
        self.catalog.steps().filter_map(|step| {
            self.selections
                .get(step.key())
                .map(|v| (step.key(), v.as_str()))
        })
    }

    /// Number of selected steps
    #[inline]
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// True when every required step has a selection
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.catalog
            .required_steps()
            .all(|step| self.selections.contains_key(step.key()))
    }

    /// Required steps still lacking a selection, in catalog order
    pub fn missing_required(&self) -> impl Iterator<Item = &'a StepDefinition> + '_ {
        self.catalog
            .required_steps()
            .filter(|step| !self.selections.contains_key(step.key()))
    }
}
