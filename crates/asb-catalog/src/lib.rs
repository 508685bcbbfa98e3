//! ASB Step Catalog
//!
//! Static catalog of attack-chain steps and their textual variants.
//!
//! # Core Concepts
//!
//! - [`StepDefinition`]: one named step with an ordered, non-empty variant list
//! - [`StepCatalog`]: ordered, immutable step table plus the anchor/control
//!   designations the enumeration engine drives on
//! - [`CatalogBuilder`]: the only way to construct a catalog; all structural
//!   validation happens in [`CatalogBuilder::build`]
//! - [`attack_catalog`]: the built-in nine-step attack data set
//!
//! # Example
//!
//! ```rust
//! use asb_catalog::{CatalogBuilder, StepDefinition};
//!
//! let catalog = CatalogBuilder::new()
//!     .step(StepDefinition::new("initialAccess", "Initial Access", true, vec!["Phishing"]).unwrap())
//!     .step(StepDefinition::new("control", "Control", true, vec!["Immediate", "Delayed"]).unwrap())
//!     .anchor("initialAccess")
//!     .control("control")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod data;
mod error;
mod step;

pub use catalog::{CatalogBuilder, StepCatalog};
pub use data::{attack_catalog, keys};
pub use error::CatalogError;
pub use step::StepDefinition;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
