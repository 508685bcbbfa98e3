//! Enumeration budgets
//!
//! Provides [`EnumerationBudget`], the named caps that keep scenario
//! generation finite. The defaults carry the product-tuned magnitudes the
//! system shipped with; every cap is configuration, never derived.

use serde::{Deserialize, Serialize};

/// Caps bounding scenario enumeration
///
/// The theoretical cross-product of step variants is combinatorially
/// explosive; these caps are what make enumeration tractable. A budget is
/// plain data: copy it freely, tweak it per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationBudget {
    /// Global ceiling on emitted records across both phases
    pub max_total: usize,
    /// Ceiling on Primary records; the remainder of `max_total` is left
    /// for Alternatives
    pub max_primary: usize,
    /// Per-step ceiling on variants walked during one-field variation
    pub max_per_optional_step: usize,
    /// Number of anchor variants reserved for the Alternative phase
    pub max_alternative_anchors: usize,
}

impl Default for EnumerationBudget {
    fn default() -> Self {
        Self {
            max_total: 200,
            max_primary: 150,
            max_per_optional_step: 8,
            max_alternative_anchors: 5,
        }
    }
}

impl EnumerationBudget {
    /// Budget with a global ceiling and the default sub-caps
    #[must_use]
    pub fn with_max_total(max_total: usize) -> Self {
        Self {
            max_total,
            ..Self::default()
        }
    }

    /// Override the Primary-phase ceiling
    #[inline]
    #[must_use]
    pub fn with_max_primary(mut self, max_primary: usize) -> Self {
        self.max_primary = max_primary;
        self
    }

    /// Override the per-step variation ceiling
    #[inline]
    #[must_use]
    pub fn with_max_per_optional_step(mut self, cap: usize) -> Self {
        self.max_per_optional_step = cap;
        self
    }

    /// Override the Alternative-phase anchor reservation
    #[inline]
    #[must_use]
    pub fn with_max_alternative_anchors(mut self, cap: usize) -> Self {
        self.max_alternative_anchors = cap;
        self
    }

    /// Effective Primary-phase ceiling (`max_primary` clamped to
    /// `max_total`)
    #[inline]
    #[must_use]
    pub fn primary_ceiling(&self) -> usize {
        self.max_primary.min(self.max_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget() {
        let budget = EnumerationBudget::default();
        assert_eq!(budget.max_total, 200);
        assert_eq!(budget.max_primary, 150);
        assert_eq!(budget.primary_ceiling(), 150);
    }

    #[test]
    fn primary_ceiling_clamps_to_total() {
        let budget = EnumerationBudget::with_max_total(100).with_max_primary(500);
        assert_eq!(budget.primary_ceiling(), 100);
    }

    #[test]
    fn builder_overrides() {
        let budget = EnumerationBudget::default()
            .with_max_per_optional_step(2)
            .with_max_alternative_anchors(1);
        assert_eq!(budget.max_per_optional_step, 2);
        assert_eq!(budget.max_alternative_anchors, 1);
        assert_eq!(budget.max_total, 200);
    }
}
