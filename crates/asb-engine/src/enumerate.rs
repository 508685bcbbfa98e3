//! Scenario enumeration
//!
//! Provides [`ScenarioEnumerator`], a lazy, finite, restartable iterator
//! over [`ScenarioRecord`]s. The emission order is the determinism
//! contract:
//!
//! 1. **Primary phase** — anchor variants in catalog order; per anchor, the
//!    baseline record (all required steps at defaults), then each optional
//!    step in declared order, each variant in catalog order, one field
//!    varied at a time. Bounded by `min(max_primary, max_total)`.
//! 2. **Alternative phase** — a disjoint slice of anchor variants the
//!    Primary phase never touched; per anchor, each non-default control
//!    variant, then each alternative-eligible step, each variant, again one
//!    field at a time. Bounded by `max_total`.
//!
//! Ids increment in emission order starting at 1. The budget counter is
//! checked before every yield; a record is atomic — truncation never emits
//! a partial record.

use asb_catalog::{StepCatalog, StepDefinition};
use indexmap::IndexMap;

use crate::budget::EnumerationBudget;
use crate::record::{ScenarioKind, ScenarioRecord};

/// Position within the Primary phase for one anchor variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrimaryPos {
    /// The all-defaults baseline record is next
    Baseline,
    /// One-field variation: `step_idx` indexes the optional steps,
    /// `variant_idx` the step's variants
    Vary { step_idx: usize, variant_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Primary {
        anchor_idx: usize,
        pos: PrimaryPos,
    },
    Alternative {
        anchor_idx: usize,
        /// Exclusive end of the alternative anchor slice
        anchor_end: usize,
        /// Index into the control step's variants; starts at 1 (non-default)
        control_idx: usize,
        /// Index into the alternative-eligible step set
        step_idx: usize,
        variant_idx: usize,
    },
    Done,
}

/// Lazy, budgeted enumeration of scenario records
///
/// Finite and restartable: constructing a fresh enumerator over identical
/// inputs replays the identical sequence. Holds only cursors — the full
/// combinatorial space is never materialized.
#[derive(Debug)]
pub struct ScenarioEnumerator<'a> {
    catalog: &'a StepCatalog,
    budget: EnumerationBudget,
    /// Optional step keys in declared order (the Primary variation set)
    optional_keys: Vec<&'a str>,
    /// Alternative-eligible step keys in designation order
    alternative_keys: Vec<&'a str>,
    emitted: usize,
    primary_emitted: usize,
    next_id: u32,
    phase: Phase,
}

impl<'a> ScenarioEnumerator<'a> {
    /// Create an enumerator over `catalog` bounded by `budget`
    #[must_use]
    pub fn new(catalog: &'a StepCatalog, budget: EnumerationBudget) -> Self {
        let optional_keys = catalog.optional_steps().map(StepDefinition::key).collect();
        let alternative_keys = catalog
            .alternative_steps()
            .map(StepDefinition::key)
            .collect();
        Self {
            catalog,
            budget,
            optional_keys,
            alternative_keys,
            emitted: 0,
            primary_emitted: 0,
            next_id: 1,
            phase: Phase::Primary {
                anchor_idx: 0,
                pos: PrimaryPos::Baseline,
            },
        }
    }

    /// The budget this enumerator honors
    #[inline]
    #[must_use]
    pub fn budget(&self) -> EnumerationBudget {
        self.budget
    }

    /// Records emitted so far
    #[inline]
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Per-step variation ceiling for `step`
    fn variation_cap(&self, step: &StepDefinition) -> usize {
        step.variant_count().min(self.budget.max_per_optional_step)
    }

    fn optional_step(&self, step_idx: usize) -> &'a StepDefinition {
        // Keys collected from the catalog itself; lookup cannot miss.
        self.catalog
            .get(self.optional_keys[step_idx])
            .expect("optional key originates from catalog")
    }

    fn alternative_step(&self, step_idx: usize) -> &'a StepDefinition {
        self.catalog
            .get(self.alternative_keys[step_idx])
            .expect("alternative key originates from catalog")
    }

    /// Build a record: required steps at defaults, the anchor at
    /// `anchor_variant`, then `overrides` applied field-wise. Walks the
    /// catalog in declared order so step order is canonical.
    fn build_record(
        &mut self,
        kind: ScenarioKind,
        anchor_variant: &str,
        overrides: &[(&str, &str)],
    ) -> ScenarioRecord {
        let anchor_key = self.catalog.anchor().key();
        let mut values = IndexMap::with_capacity(self.catalog.required_steps().count() + 1);
        for step in self.catalog.steps() {
            let key = step.key();
            if let Some((_, v)) = overrides.iter().find(|(k, _)| *k == key) {
                values.insert(key.to_string(), (*v).to_string());
            } else if key == anchor_key {
                values.insert(key.to_string(), anchor_variant.to_string());
            } else if step.required() {
                values.insert(key.to_string(), step.default_variant().to_string());
            }
        }

        let record = ScenarioRecord::new(self.next_id, kind, values);
        self.next_id += 1;
        self.emitted += 1;
        if kind == ScenarioKind::Primary {
            self.primary_emitted += 1;
        }
        record
    }

    /// First in-bounds variation position at or after (`step_idx`, 0),
    /// or `None` when the anchor's variation phase is exhausted
    fn first_variation_at(&self, step_idx: usize) -> Option<PrimaryPos> {
        (step_idx..self.optional_keys.len())
            .find(|&i| self.variation_cap(self.optional_step(i)) > 0)
            .map(|i| PrimaryPos::Vary {
                step_idx: i,
                variant_idx: 0,
            })
    }

    /// Advance Primary cursors past the position just emitted
    fn advance_primary(&mut self, anchor_idx: usize, pos: PrimaryPos) {
        let next = match pos {
            PrimaryPos::Baseline => self.first_variation_at(0),
            PrimaryPos::Vary {
                step_idx,
                variant_idx,
            } => {
                let cap = self.variation_cap(self.optional_step(step_idx));
                if variant_idx + 1 < cap {
                    Some(PrimaryPos::Vary {
                        step_idx,
                        variant_idx: variant_idx + 1,
                    })
                } else {
                    self.first_variation_at(step_idx + 1)
                }
            }
        };
        self.phase = match next {
            Some(pos) => Phase::Primary { anchor_idx, pos },
            None => Phase::Primary {
                anchor_idx: anchor_idx + 1,
                pos: PrimaryPos::Baseline,
            },
        };
    }

    /// Enter the Alternative phase over anchors `[start, start + cap)`
    ///
    /// Emits nothing when the control step has no non-default variant, the
    /// alternative-eligible set is empty, or no unused anchor remains.
    fn enter_alternative(&mut self, start_anchor: usize) {
        let anchor_count = self.catalog.anchor().variant_count();
        let anchor_end = start_anchor
            .saturating_add(self.budget.max_alternative_anchors)
            .min(anchor_count);
        let has_controls = self.catalog.control().variant_count() > 1;
        let has_steps = (0..self.alternative_keys.len())
            .any(|i| self.variation_cap(self.alternative_step(i)) > 0);

        self.phase = if start_anchor < anchor_end && has_controls && has_steps {
            Phase::Alternative {
                anchor_idx: start_anchor,
                anchor_end,
                control_idx: 1,
                step_idx: self.first_alternative_step(0).unwrap_or(0),
                variant_idx: 0,
            }
        } else {
            Phase::Done
        };
    }

    fn first_alternative_step(&self, step_idx: usize) -> Option<usize> {
        (step_idx..self.alternative_keys.len())
            .find(|&i| self.variation_cap(self.alternative_step(i)) > 0)
    }

    /// Advance Alternative cursors past the position just emitted
    fn advance_alternative(
        &mut self,
        anchor_idx: usize,
        anchor_end: usize,
        control_idx: usize,
        step_idx: usize,
        variant_idx: usize,
    ) {
        let step_cap = self.variation_cap(self.alternative_step(step_idx));
        let control_count = self.catalog.control().variant_count();

        if variant_idx + 1 < step_cap {
            self.phase = Phase::Alternative {
                anchor_idx,
                anchor_end,
                control_idx,
                step_idx,
                variant_idx: variant_idx + 1,
            };
        } else if let Some(next_step) = self.first_alternative_step(step_idx + 1) {
            self.phase = Phase::Alternative {
                anchor_idx,
                anchor_end,
                control_idx,
                step_idx: next_step,
                variant_idx: 0,
            };
        } else if control_idx + 1 < control_count {
            self.phase = Phase::Alternative {
                anchor_idx,
                anchor_end,
                control_idx: control_idx + 1,
                step_idx: self.first_alternative_step(0).unwrap_or(0),
                variant_idx: 0,
            };
        } else if anchor_idx + 1 < anchor_end {
            self.phase = Phase::Alternative {
                anchor_idx: anchor_idx + 1,
                anchor_end,
                control_idx: 1,
                step_idx: self.first_alternative_step(0).unwrap_or(0),
                variant_idx: 0,
            };
        } else {
            self.phase = Phase::Done;
        }
    }
}

impl Iterator for ScenarioEnumerator<'_> {
    type Item = ScenarioRecord;

    fn next(&mut self) -> Option<ScenarioRecord> {
        if self.emitted >= self.budget.max_total {
            self.phase = Phase::Done;
            return None;
        }

        loop {
            match self.phase {
                Phase::Primary { anchor_idx, pos } => {
                    let anchor = self.catalog.anchor();
                    if anchor_idx >= anchor.variant_count() {
                        // Anchors exhausted naturally; nothing left for
                        // the Alternative phase either.
                        self.enter_alternative(anchor_idx);
                        continue;
                    }
                    if self.primary_emitted >= self.budget.primary_ceiling() {
                        // Budget hit: anchors from here on are unused by
                        // Primaries. A partially-walked anchor still counts
                        // as used.
                        let start = match pos {
                            PrimaryPos::Baseline => anchor_idx,
                            PrimaryPos::Vary { .. } => anchor_idx + 1,
                        };
                        self.enter_alternative(start);
                        continue;
                    }

                    let anchor_variant = anchor.variants()[anchor_idx].clone();
                    let record = match pos {
                        PrimaryPos::Baseline => {
                            self.build_record(ScenarioKind::Primary, &anchor_variant, &[])
                        }
                        PrimaryPos::Vary {
                            step_idx,
                            variant_idx,
                        } => {
                            let step = self.optional_step(step_idx);
                            let variant = step.variants()[variant_idx].clone();
                            self.build_record(
                                ScenarioKind::Primary,
                                &anchor_variant,
                                &[(step.key(), variant.as_str())],
                            )
                        }
                    };
                    self.advance_primary(anchor_idx, pos);
                    return Some(record);
                }
                Phase::Alternative {
                    anchor_idx,
                    anchor_end,
                    control_idx,
                    step_idx,
                    variant_idx,
                } => {
                    let anchor_variant = self.catalog.anchor().variants()[anchor_idx].clone();
                    let control = self.catalog.control();
                    let control_variant = control.variants()[control_idx].clone();
                    let step = self.alternative_step(step_idx);
                    let variant = step.variants()[variant_idx].clone();

                    let record = self.build_record(
                        ScenarioKind::Alternative,
                        &anchor_variant,
                        &[
                            (control.key(), control_variant.as_str()),
                            (step.key(), variant.as_str()),
                        ],
                    );
                    self.advance_alternative(
                        anchor_idx,
                        anchor_end,
                        control_idx,
                        step_idx,
                        variant_idx,
                    );
                    return Some(record);
                }
                Phase::Done => return None,
            }
        }
    }
}
