//! The store contract and its in-memory reference implementation

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::payload::ScenarioPayload;

/// Errors raised by [`ScenarioStore`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A scenario with this derived id is already stored
    #[error("scenario '{0}' already exists")]
    Duplicate(String),
    /// No stored scenario carries this derived id
    #[error("scenario '{0}' not found")]
    NotFound(String),
}

/// A persisted scenario with its lifecycle timestamps
///
/// `updated_at` moves on every mutation; `completed_at` is present exactly
/// while `completed` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredScenario {
    /// The flattened scenario payload
    pub payload: ScenarioPayload,
    /// Whether the scenario has been worked through
    pub completed: bool,
    /// When completion was last recorded
    pub completed_at: Option<DateTime<Utc>>,
    /// When the scenario was first saved
    pub created_at: DateTime<Utc>,
    /// When the scenario was last mutated
    pub updated_at: DateTime<Utc>,
}

impl StoredScenario {
    fn new(payload: ScenarioPayload) -> Self {
        let now = Utc::now();
        Self {
            payload,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The derived scenario id this entry is keyed by
    #[inline]
    #[must_use]
    pub fn scenario_id(&self) -> &str {
        &self.payload.scenario_id
    }
}

/// Persistence seam for scenario payloads
///
/// The engine never talks to a database; embedding applications implement
/// this trait over their storage of choice. Ids are the derived
/// [`store_id`](crate::store_id) strings.
pub trait ScenarioStore {
    /// Persist a payload as a new, incomplete scenario
    ///
    /// # Errors
    /// Returns [`StoreError::Duplicate`] when the id is already stored.
    fn save(&mut self, payload: ScenarioPayload) -> Result<(), StoreError>;

    /// Look up a stored scenario by derived id
    fn get(&self, scenario_id: &str) -> Option<&StoredScenario>;

    /// All stored scenarios in insertion order
    fn all(&self) -> Vec<&StoredScenario>;

    /// Completed scenarios in insertion order
    fn completed(&self) -> Vec<&StoredScenario> {
        self.all().into_iter().filter(|s| s.completed).collect()
    }

    /// Mark a scenario completed, stamping `completed_at`
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown ids.
    fn mark_complete(&mut self, scenario_id: &str) -> Result<(), StoreError>;

    /// Clear a scenario's completion, dropping `completed_at`
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown ids.
    fn mark_incomplete(&mut self, scenario_id: &str) -> Result<(), StoreError>;
}

/// In-memory [`ScenarioStore`], keyed by derived id in insertion order
///
/// The reference implementation used by tests and as the embedding
/// default.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scenarios: IndexMap<String, StoredScenario>,
}

impl MemoryStore {
    /// Empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored scenarios
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the store holds no scenarios
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    fn entry_mut(&mut self, scenario_id: &str) -> Result<&mut StoredScenario, StoreError> {
        self.scenarios
            .get_mut(scenario_id)
            .ok_or_else(|| StoreError::NotFound(scenario_id.to_string()))
    }
}

impl ScenarioStore for MemoryStore {
    fn save(&mut self, payload: ScenarioPayload) -> Result<(), StoreError> {
        let id = payload.scenario_id.clone();
        if self.scenarios.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        tracing::debug!(scenario_id = %id, "scenario saved");
        self.scenarios.insert(id, StoredScenario::new(payload));
        Ok(())
    }

    fn get(&self, scenario_id: &str) -> Option<&StoredScenario> {
        self.scenarios.get(scenario_id)
    }

    fn all(&self) -> Vec<&StoredScenario> {
        self.scenarios.values().collect()
    }

    fn mark_complete(&mut self, scenario_id: &str) -> Result<(), StoreError> {
        let entry = self.entry_mut(scenario_id)?;
        let now = Utc::now();
        entry.completed = true;
        entry.completed_at = Some(now);
        entry.updated_at = now;
        tracing::debug!(scenario_id, "scenario completed");
        Ok(())
    }

    fn mark_incomplete(&mut self, scenario_id: &str) -> Result<(), StoreError> {
        let entry = self.entry_mut(scenario_id)?;
        entry.completed = false;
        entry.completed_at = None;
        entry.updated_at = Utc::now();
        tracing::debug!(scenario_id, "scenario reopened");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asb_engine::{EnumerationBudget, ScenarioEnumerator};
    use asb_test_utils::small_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn payloads(n: usize) -> Vec<ScenarioPayload> {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        ScenarioEnumerator::new(&catalog, EnumerationBudget::default())
            .take(n)
            .map(|r| ScenarioPayload::from_record(&r, &mut rng))
            .collect()
    }

    #[test]
    fn save_and_get_round_trip() {
        let mut store = MemoryStore::new();
        for payload in payloads(3) {
            store.save(payload).unwrap();
        }
        assert_eq!(store.len(), 3);
        let stored = store.get("SC002").unwrap();
        assert_eq!(stored.scenario_id(), "SC002");
        assert!(!stored.completed);
        assert!(stored.completed_at.is_none());
        assert!(store.get("SC099").is_none());
    }

    #[test]
    fn duplicate_save_is_rejected() {
        let mut store = MemoryStore::new();
        let payload = payloads(1).pop().unwrap();
        store.save(payload.clone()).unwrap();
        let err = store.save(payload).unwrap_err();
        assert_eq!(err, StoreError::Duplicate("SC001".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn completion_stamps_and_clears() {
        let mut store = MemoryStore::new();
        for payload in payloads(2) {
            store.save(payload).unwrap();
        }

        store.mark_complete("SC001").unwrap();
        let done = store.get("SC001").unwrap();
        assert!(done.completed);
        assert!(done.completed_at.is_some());
        assert!(done.updated_at >= done.created_at);

        let ids: Vec<_> = store
            .completed()
            .iter()
            .map(|s| s.scenario_id().to_string())
            .collect();
        assert_eq!(ids, vec!["SC001"]);

        store.mark_incomplete("SC001").unwrap();
        let reopened = store.get("SC001").unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_at.is_none());
        assert!(store.completed().is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = MemoryStore::new();
        let err = store.mark_complete("SC007").unwrap_err();
        assert_eq!(err, StoreError::NotFound("SC007".to_string()));
        assert!(store.mark_incomplete("SC007").is_err());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        for payload in payloads(4) {
            store.save(payload).unwrap();
        }
        let ids: Vec<_> = store.all().iter().map(|s| s.scenario_id()).collect();
        assert_eq!(ids, vec!["SC001", "SC002", "SC003", "SC004"]);
    }
}
