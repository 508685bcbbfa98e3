use std::collections::HashSet;

use asb_engine::{EnumerationBudget, ScenarioEnumerator, ScenarioKind, ScenarioRecord};
use asb_test_utils::{small_catalog, wide_catalog};
use proptest::prelude::*;

#[test]
fn test_small_catalog_full_sequence() {
    let catalog = small_catalog();
    let records: Vec<_> =
        ScenarioEnumerator::new(&catalog, EnumerationBudget::with_max_total(100)).collect();

    // 2 anchors x (baseline + 2 exfiltration variations), no anchor left
    // for the Alternative phase.
    assert_eq!(records.len(), 6);
    assert!(records.iter().all(|r| r.kind() == ScenarioKind::Primary));

    let first = &records[0];
    assert_eq!(first.id(), 1);
    assert_eq!(first.value("initialAccess"), Some("A"));
    assert_eq!(first.value("attackerControl"), Some("Immediate"));
    assert_eq!(first.value("persistence"), Some("P0"));
    assert_eq!(first.value("dataExfiltration"), None);

    assert_eq!(records[1].value("dataExfiltration"), Some("X0"));
    assert_eq!(records[2].value("dataExfiltration"), Some("X1"));
    assert_eq!(records[3].value("initialAccess"), Some("B"));
}

#[test]
fn test_wide_catalog_emits_both_kinds() {
    let catalog = wide_catalog();
    // 10 anchors x (baseline + 2 cleanup + 3 lateral) = 60 Primaries; cap
    // Primaries early so anchors remain for the Alternative phase.
    let budget = EnumerationBudget::with_max_total(200)
        .with_max_primary(30)
        .with_max_alternative_anchors(3);
    let records: Vec<_> = ScenarioEnumerator::new(&catalog, budget).collect();

    let primaries = records
        .iter()
        .filter(|r| r.kind() == ScenarioKind::Primary)
        .count();
    let alternatives = records
        .iter()
        .filter(|r| r.kind() == ScenarioKind::Alternative)
        .count();
    assert_eq!(primaries, 30);
    // 3 anchors x 2 non-default controls x (2 harvesting + 3 exfil) = 30.
    assert_eq!(alternatives, 30);
}

#[test]
fn test_alternative_anchors_disjoint_from_primary_anchors() {
    let catalog = wide_catalog();
    let budget = EnumerationBudget::with_max_total(500)
        .with_max_primary(13)
        .with_max_alternative_anchors(4);
    let records: Vec<_> = ScenarioEnumerator::new(&catalog, budget).collect();

    let anchors = |kind: ScenarioKind| -> HashSet<String> {
        records
            .iter()
            .filter(|r| r.kind() == kind)
            .filter_map(|r| r.value("initialAccess"))
            .map(str::to_string)
            .collect()
    };
    let primary = anchors(ScenarioKind::Primary);
    let alternative = anchors(ScenarioKind::Alternative);
    assert!(!primary.is_empty());
    assert!(!alternative.is_empty());
    assert!(primary.is_disjoint(&alternative));
}

#[test]
fn test_alternatives_override_control_only() {
    let catalog = wide_catalog();
    let budget = EnumerationBudget::with_max_total(500)
        .with_max_primary(6)
        .with_max_alternative_anchors(1);
    for record in ScenarioEnumerator::new(&catalog, budget)
        .filter(|r| r.kind() == ScenarioKind::Alternative)
    {
        let control = record.value("attackerControl").unwrap();
        assert_ne!(control, "Immediate", "control must leave its default");
        // Non-designated required steps stay at defaults.
        assert_eq!(record.value("persistence"), Some("Registry"));
    }
}

fn optional_steps_present(record: &ScenarioRecord, optional_keys: &[&str]) -> usize {
    optional_keys
        .iter()
        .filter(|k| record.value(k).is_some())
        .count()
}

#[test]
fn test_primaries_vary_at_most_one_optional_step() {
    let catalog = wide_catalog();
    let records: Vec<_> =
        ScenarioEnumerator::new(&catalog, EnumerationBudget::with_max_total(500)).collect();
    for record in records.iter().filter(|r| r.kind() == ScenarioKind::Primary) {
        let optionals = optional_steps_present(record, &["postAttackCleanup", "lateralMovement"]);
        assert!(optionals <= 1, "record {} varies {optionals} optionals", record.id());
    }
}

proptest! {
    #[test]
    fn prop_enumeration_is_deterministic(
        max_total in 1..300usize,
        max_primary in 1..200usize,
        per_step in 1..10usize,
        alt_anchors in 0..8usize,
    ) {
        let catalog = wide_catalog();
        let budget = EnumerationBudget::with_max_total(max_total)
            .with_max_primary(max_primary)
            .with_max_per_optional_step(per_step)
            .with_max_alternative_anchors(alt_anchors);
        let a: Vec<_> = ScenarioEnumerator::new(&catalog, budget).collect();
        let b: Vec<_> = ScenarioEnumerator::new(&catalog, budget).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_budget_caps_are_respected(
        max_total in 1..300usize,
        max_primary in 1..200usize,
    ) {
        let catalog = wide_catalog();
        let budget = EnumerationBudget::with_max_total(max_total)
            .with_max_primary(max_primary);
        let records: Vec<_> = ScenarioEnumerator::new(&catalog, budget).collect();
        prop_assert!(records.len() <= max_total);
        let primaries = records
            .iter()
            .filter(|r| r.kind() == ScenarioKind::Primary)
            .count();
        prop_assert!(primaries <= budget.primary_ceiling());
    }

    #[test]
    fn prop_ids_dense_and_records_complete(max_total in 1..300usize) {
        let catalog = wide_catalog();
        let budget = EnumerationBudget::with_max_total(max_total);
        let required: Vec<_> = catalog.required_steps().map(|s| s.key().to_string()).collect();
        for (i, record) in ScenarioEnumerator::new(&catalog, budget).enumerate() {
            prop_assert_eq!(record.id() as usize, i + 1);
            for key in &required {
                prop_assert!(record.value(key).is_some(), "missing {}", key);
            }
        }
    }

    #[test]
    fn prop_every_value_comes_from_the_catalog(per_step in 1..10usize) {
        let catalog = wide_catalog();
        let budget = EnumerationBudget::with_max_total(500)
            .with_max_primary(40)
            .with_max_per_optional_step(per_step);
        for record in ScenarioEnumerator::new(&catalog, budget) {
            for (key, value) in record.step_values() {
                let step = catalog.get(key).expect("unknown step in record");
                prop_assert!(step.has_variant(value));
            }
        }
    }
}
