//! Record filtering
//!
//! Provides [`FilterState`], the combination of per-step variant filters
//! and free-text search applied to an enumeration before pagination.
//! Filtering selects, never mutates: records pass through untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::ScenarioRecord;

/// Per-step variant filters plus free-text search
///
/// Semantics:
///
/// - within one step, allowed variants combine with **OR** — the record's
///   value for that step must equal one of them;
/// - across steps, filters combine with **AND** — every filtered step must
///   match;
/// - a record lacking a filtered step fails that step's filter;
/// - the search text matches case-insensitively as a substring against
///   every step value and the scenario kind; the id does not participate;
/// - an empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    steps: IndexMap<String, Vec<String>>,
    search: String,
}

impl FilterState {
    /// Empty filter that matches every record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `variant` for `step_key`
    ///
    /// Repeated calls for the same step widen the allowed set (OR); a
    /// variant already allowed is not duplicated.
    #[must_use]
    pub fn allow(mut self, step_key: impl Into<String>, variant: impl Into<String>) -> Self {
        let variant = variant.into();
        let allowed = self.steps.entry(step_key.into()).or_default();
        if !allowed.contains(&variant) {
            allowed.push(variant);
        }
        self
    }

    /// Set the free-text search term
    ///
    /// Whitespace-only input is treated as no search at all.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into().trim().to_lowercase();
        self
    }

    /// Drop the filter for one step
    #[must_use]
    pub fn clear_step(mut self, step_key: &str) -> Self {
        self.steps.shift_remove(step_key);
        self
    }

    /// True when no step filter and no search term is active
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.search.is_empty()
    }

    /// Steps with an active filter, in insertion order
    pub fn filtered_steps(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.steps.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Active search term (lowercased), empty when none
    #[inline]
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Decide whether `record` passes this filter
    #[must_use]
    pub fn matches(&self, record: &ScenarioRecord) -> bool {
        for (step_key, allowed) in &self.steps {
            // An explicitly emptied allow-set matches nothing for that step.
            let Some(value) = record.value(step_key) else {
                return false;
            };
            if !allowed.iter().any(|v| v == value) {
                return false;
            }
        }

        if self.search.is_empty() {
            return true;
        }
        record
            .step_values()
            .values()
            .any(|v| v.to_lowercase().contains(&self.search))
            || record
                .kind()
                .as_str()
                .to_lowercase()
                .contains(&self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ScenarioKind;
    use indexmap::IndexMap;

    fn record(kind: ScenarioKind, pairs: &[(&str, &str)]) -> ScenarioRecord {
        let values: IndexMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ScenarioRecord::new(1, kind, values)
    }

    fn phishing() -> ScenarioRecord {
        record(
            ScenarioKind::Primary,
            &[
                ("initialAccess", "Phishing email with malicious attachment"),
                ("persistence", "Registry run key"),
            ],
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterState::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&phishing()));
    }

    #[test]
    fn or_within_step() {
        let filter = FilterState::new()
            .allow("persistence", "Scheduled task")
            .allow("persistence", "Registry run key");
        assert!(filter.matches(&phishing()));
    }

    #[test]
    fn and_across_steps() {
        let filter = FilterState::new()
            .allow("persistence", "Registry run key")
            .allow("initialAccess", "USB drop");
        assert!(!filter.matches(&phishing()));
    }

    #[test]
    fn missing_step_fails_its_filter() {
        let filter = FilterState::new().allow("dataExfiltration", "DNS tunneling");
        assert!(!filter.matches(&phishing()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = FilterState::new().search("MALICIOUS attach");
        assert!(filter.matches(&phishing()));
        let miss = FilterState::new().search("kerberoasting");
        assert!(!miss.matches(&phishing()));
    }

    #[test]
    fn search_matches_kind_not_id() {
        let alt = record(ScenarioKind::Alternative, &[("initialAccess", "USB drop")]);
        assert!(FilterState::new().search("alternative").matches(&alt));
        assert!(!FilterState::new().search("alternative").matches(&phishing()));
        // Record id 1 does not make "1" match.
        assert!(!FilterState::new().search("1").matches(&alt));
    }

    #[test]
    fn whitespace_search_is_inert() {
        let filter = FilterState::new().search("   ");
        assert!(filter.is_empty());
        assert!(filter.matches(&phishing()));
    }

    #[test]
    fn search_combines_with_step_filters() {
        let hit = FilterState::new()
            .allow("persistence", "Registry run key")
            .search("phishing");
        assert!(hit.matches(&phishing()));
        let miss = FilterState::new()
            .allow("persistence", "Scheduled task")
            .search("phishing");
        assert!(!miss.matches(&phishing()));
    }

    #[test]
    fn clear_step_reopens_the_step() {
        let filter = FilterState::new()
            .allow("persistence", "Scheduled task")
            .clear_step("persistence");
        assert!(filter.is_empty());
        assert!(filter.matches(&phishing()));
    }
}
