//! ASB Scenario Combination Engine
//!
//! Deterministic, budgeted enumeration of synthetic attack scenarios over a
//! [`StepCatalog`](asb_catalog::StepCatalog), with filtering and paginated
//! retrieval. The unrestricted cross-product of step variants runs to
//! millions of combinations; this engine never materializes it. Instead it
//! walks a fixed, restartable order — anchor variants, then one optional
//! field varied at a time — and checks an explicit [`EnumerationBudget`]
//! at every yield.
//!
//! # Core Concepts
//!
//! - [`ScenarioRecord`]: one immutable generated scenario, identified by a
//!   monotonically assigned id
//! - [`EnumerationBudget`]: named caps that keep the space finite
//! - [`ScenarioEnumerator`]: lazy, finite, restartable iterator of records
//! - [`FilterState`]: step-value filters (OR within a step, AND across
//!   steps) plus free-text search
//! - [`Paginator`]: stateless fixed-size page derivation over the filtered
//!   enumeration
//! - [`ScenarioBuilder`]: interactive per-step selection for the builder
//!   view
//!
//! # Example
//!
//! ```rust
//! use asb_catalog::attack_catalog;
//! use asb_engine::{EnumerationBudget, FilterState, Paginator};
//!
//! let catalog = attack_catalog();
//! let paginator = Paginator::new(catalog, EnumerationBudget::default());
//!
//! let filter = FilterState::new()
//!     .allow("initialAccess", "USB drop attack with malicious payload");
//! let page = paginator.get_page(&filter, 1, 12);
//! assert!(page.items.len() <= 12);
//! ```
//!
//! # Determinism
//!
//! For a fixed `(catalog, budget)` pair, two independent enumerations yield
//! identical `(id, kind, step_values)` sequences. Pagination re-derives
//! pages from that order on every call and carries no state between calls.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod budget;
mod builder;
mod enumerate;
mod filter;
mod page;
mod record;

pub use budget::EnumerationBudget;
pub use builder::ScenarioBuilder;
pub use enumerate::ScenarioEnumerator;
pub use filter::FilterState;
pub use page::{Page, Paginator};
pub use record::{ScenarioKind, ScenarioRecord};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
