//! Record flattening
//!
//! Converts a [`ScenarioRecord`] into the camelCase payload shape the
//! store contract accepts: a derived `SC`-prefixed identifier, a display
//! title and description, and one technique entry per participating step.

use asb_engine::ScenarioRecord;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Derive the store identifier for a record id
///
/// `"SC"` followed by the id zero-padded to three digits; ids beyond 999
/// keep their full width (`SC1234`).
#[must_use]
pub fn store_id(record_id: u32) -> String {
    format!("SC{record_id:03}")
}

/// One technique line in a scenario payload
///
/// `technique_name` is the selected variant, `tactic` the step key it was
/// selected for. `technique_id` is a synthesized `T`-prefixed four-digit
/// label with no registry meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueEntry {
    /// Synthesized label, `T1000`..=`T9999`
    pub technique_id: String,
    /// The selected variant text
    pub technique_name: String,
    /// The step key the variant belongs to
    pub tactic: String,
}

/// Flattened scenario, ready for the store contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPayload {
    /// Derived identifier, see [`store_id`]
    pub scenario_id: String,
    /// Display title carrying the record id and kind
    pub title: String,
    /// One-line description with the step count
    pub description: String,
    /// Technique entries in the record's step order
    pub attack_techniques: Vec<TechniqueEntry>,
}

impl ScenarioPayload {
    /// Flatten `record` into a payload
    ///
    /// Technique ids are drawn from `rng`; everything else is a pure
    /// function of the record.
    pub fn from_record<R: Rng + ?Sized>(record: &ScenarioRecord, rng: &mut R) -> Self {
        let attack_techniques = record
            .step_values()
            .iter()
            .map(|(key, value)| TechniqueEntry {
                technique_id: format!("T{}", rng.random_range(1000..10_000)),
                technique_name: value.clone(),
                tactic: key.clone(),
            })
            .collect();

        Self {
            scenario_id: store_id(record.id()),
            title: format!("Attack Scenario {} - {}", record.id(), record.kind()),
            description: format!(
                "{} attack scenario with {} attack steps",
                record.kind(),
                record.step_count()
            ),
            attack_techniques,
        }
    }
}
