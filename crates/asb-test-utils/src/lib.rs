//! Shared fixtures for ASB workspace tests
//!
//! Small, hand-sized catalogs so tests can assert exact record sequences,
//! plus a wide catalog for exercising budget truncation. Test-only code:
//! panicking constructors are fine here.

#![allow(clippy::missing_panics_doc)]

use asb_catalog::{CatalogBuilder, StepCatalog, StepDefinition};

/// Build a step definition, panicking on invalid input
#[must_use]
pub fn step(key: &str, required: bool, variants: &[&str]) -> StepDefinition {
    StepDefinition::new(key, key, required, variants.to_vec())
        .unwrap_or_else(|e| panic!("fixture step {key}: {e}"))
}

/// Minimal catalog: two anchors, one control, one optional step
///
/// Small enough that the full enumeration (6 Primaries) fits in a single
/// assertion.
#[must_use]
pub fn small_catalog() -> StepCatalog {
    CatalogBuilder::new()
        .step(step("initialAccess", true, &["A", "B"]))
        .step(step("attackerControl", true, &["Immediate", "Delayed"]))
        .step(step("persistence", true, &["P0", "P1"]))
        .step(step("dataExfiltration", false, &["X0", "X1"]))
        .anchor("initialAccess")
        .control("attackerControl")
        .alternative_step("persistence")
        .build()
        .unwrap_or_else(|e| panic!("small fixture catalog: {e}"))
}

/// Wide catalog: ten anchors and multiple optional steps
///
/// Large enough for default budgets to truncate, leaving anchors for the
/// Alternative phase.
#[must_use]
pub fn wide_catalog() -> StepCatalog {
    let anchors: Vec<String> = (0..10).map(|i| format!("Access vector {i}")).collect();
    let anchor_refs: Vec<&str> = anchors.iter().map(String::as_str).collect();
    CatalogBuilder::new()
        .step(step("initialAccess", true, &anchor_refs))
        .step(step("attackerControl", true, &["Immediate", "Delayed", "Staged"]))
        .step(step("credentialHarvesting", true, &["Mimikatz", "Keylogger"]))
        .step(step("persistence", true, &["Registry", "Service", "Task"]))
        .step(step("dataExfiltration", true, &["HTTPS", "DNS", "Cloud"]))
        .step(step("postAttackCleanup", false, &["Log wipe", "Timestomp"]))
        .step(step("lateralMovement", false, &["PsExec", "WMI", "RDP"]))
        .anchor("initialAccess")
        .control("attackerControl")
        .alternative_step("credentialHarvesting")
        .alternative_step("dataExfiltration")
        .build()
        .unwrap_or_else(|e| panic!("wide fixture catalog: {e}"))
}
