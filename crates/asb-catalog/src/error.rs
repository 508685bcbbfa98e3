//! Error types for catalog construction and lookup
//!
//! Every variant here is a configuration error: raised once while building
//! or querying a [`crate::StepCatalog`], never during enumeration.

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two step definitions share a key
    #[error("duplicate step key: {0}")]
    DuplicateStep(String),

    /// A step was declared with no variants
    #[error("step {0} has an empty variant list")]
    EmptyVariants(String),

    /// A variant string appears twice within one step
    #[error("step {step} declares duplicate variant: {variant}")]
    DuplicateVariant {
        /// Step key containing the duplicate
        step: String,
        /// The repeated variant string
        variant: String,
    },

    /// A referenced step key is not in the catalog
    #[error("unknown step key: {0}")]
    UnknownStep(String),

    /// A referenced variant does not belong to the step
    #[error("step {step} has no variant: {variant}")]
    UnknownVariant {
        /// Step key that was queried
        step: String,
        /// The missing variant string
        variant: String,
    },

    /// No anchor step was designated
    #[error("no anchor step designated")]
    MissingAnchor,

    /// No control step was designated
    #[error("no control step designated")]
    MissingControl,

    /// Anchor and control steps must be marked required
    #[error("step {0} must be required to serve as anchor or control")]
    NotRequired(String),

    /// The same step was designated both anchor and control
    #[error("step {0} cannot be both anchor and control")]
    AnchorControlConflict(String),

    /// An alternative-eligible step collides with the anchor or control
    #[error("alternative step {0} collides with the anchor or control step")]
    AlternativeStepConflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::EmptyVariants("persistence".to_string());
        assert!(err.to_string().contains("persistence"));

        let err = CatalogError::UnknownVariant {
            step: "exfil".to_string(),
            variant: "X9".to_string(),
        };
        assert!(err.to_string().contains("exfil"));
        assert!(err.to_string().contains("X9"));
    }
}
