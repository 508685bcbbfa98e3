//! Step definitions
//!
//! Provides [`StepDefinition`], one named attack-chain stage with its
//! ordered catalog of textual variants.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One attack-chain step and its possible variants
///
/// Variant order is significant: index 0 is the step's default, and the
/// enumeration engine walks variants in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    key: String,
    label: String,
    #[serde(default)]
    description: String,
    required: bool,
    variants: Vec<String>,
}

impl StepDefinition {
    /// Create a new step definition
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyVariants`] when `variants` is empty and
    /// [`CatalogError::DuplicateVariant`] when a variant string repeats.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        required: bool,
        variants: Vec<impl Into<String>>,
    ) -> Result<Self, CatalogError> {
        let key = key.into();
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();

        if variants.is_empty() {
            return Err(CatalogError::EmptyVariants(key));
        }
        for (i, variant) in variants.iter().enumerate() {
            if variants[..i].contains(variant) {
                return Err(CatalogError::DuplicateVariant {
                    step: key,
                    variant: variant.clone(),
                });
            }
        }

        Ok(Self {
            key,
            label: label.into(),
            description: String::new(),
            required,
            variants,
        })
    }

    /// Attach a human-readable description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Step key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Human-readable description (may be empty)
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this step is part of every baseline scenario
    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// All variants in declared order
    #[inline]
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Number of variants
    #[inline]
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// The default variant (index 0)
    ///
    /// Guaranteed to exist: construction rejects empty variant lists.
    #[inline]
    #[must_use]
    pub fn default_variant(&self) -> &str {
        &self.variants[0]
    }

    /// Check whether `variant` belongs to this step
    #[inline]
    #[must_use]
    pub fn has_variant(&self, variant: &str) -> bool {
        self.variants.iter().any(|v| v == variant)
    }
}
