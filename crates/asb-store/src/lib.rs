//! ASB Scenario Store collaborator
//!
//! The persistence seam between the combination engine and whatever stores
//! scenarios durably. The engine hands over immutable
//! [`ScenarioRecord`](asb_engine::ScenarioRecord)s; this crate flattens
//! them into the wire payload shape and defines the narrow store contract
//! the engine relies on.
//!
//! # Core Concepts
//!
//! - [`store_id`]: derived, human-facing identifier (`SC001`, `SC042`)
//! - [`ScenarioPayload`]: flattened record — title, description, and a
//!   technique entry per step — serialized with camelCase field names
//! - [`ScenarioStore`]: the persistence trait (save, get, completion
//!   toggling)
//! - [`MemoryStore`]: deterministic in-memory implementation, the test
//!   and embedding default
//!
//! Real databases live behind [`ScenarioStore`] in the embedding
//! application; nothing in this workspace performs I/O.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod payload;
mod store;

pub use payload::{store_id, ScenarioPayload, TechniqueEntry};
pub use store::{MemoryStore, ScenarioStore, StoreError, StoredScenario};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
