//! Stateless pagination
//!
//! Provides [`Paginator`], which re-derives any requested page from a fresh
//! enumeration pass, and [`Page`], the result envelope. No cursor survives
//! between calls; determinism of the enumeration order is what makes the
//! same request return the same page.

use asb_catalog::StepCatalog;
use serde::Serialize;

use crate::budget::EnumerationBudget;
use crate::enumerate::ScenarioEnumerator;
use crate::filter::FilterState;
use crate::record::ScenarioRecord;

/// One page of filtered scenario records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Records on this page, in enumeration order
    pub items: Vec<ScenarioRecord>,
    /// 1-based page number this page answers (after clamping)
    pub page_number: usize,
    /// Requested page size
    pub page_size: usize,
    /// Matching records across the whole budgeted enumeration
    pub total_matched: usize,
    /// Whether at least one matching record exists past this page
    pub has_more: bool,
}

impl Page {
    /// Number of pages the current filter yields
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_matched.div_ceil(self.page_size)
    }
}

/// Stateless page derivation over the filtered enumeration
///
/// A paginator is a `(catalog, budget)` pair and nothing else. Every
/// [`Paginator::get_page`] call walks a fresh [`ScenarioEnumerator`] in a
/// single pass: it counts all matches for `total_matched` and collects the
/// slice belonging to the requested page.
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a> {
    catalog: &'a StepCatalog,
    budget: EnumerationBudget,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over `catalog` bounded by `budget`
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a StepCatalog, budget: EnumerationBudget) -> Self {
        Self { catalog, budget }
    }

    /// The budget every page derivation honors
    #[inline]
    #[must_use]
    pub fn budget(&self) -> EnumerationBudget {
        self.budget
    }

    /// Derive one page of records matching `filter`
    ///
    /// `page_number` is 1-based; zero is clamped to the first page. A page
    /// past the end comes back with empty `items` but an accurate
    /// `total_matched`, so callers can recover by re-requesting an
    /// in-range page.
    ///
    /// Callers are required to keep at least one step filter or a search
    /// term active; a fully empty filter yields an empty page rather than
    /// the whole enumeration.
    #[must_use]
    pub fn get_page(&self, filter: &FilterState, page_number: usize, page_size: usize) -> Page {
        let page_number = page_number.max(1);
        if filter.is_empty() {
            tracing::warn!(page_number, "page requested with no active filter");
            return Page {
                items: Vec::new(),
                page_number,
                page_size,
                total_matched: 0,
                has_more: false,
            };
        }
        let start = (page_number - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size);

        let mut items = Vec::new();
        let mut total_matched = 0usize;
        for record in ScenarioEnumerator::new(self.catalog, self.budget) {
            if !filter.matches(&record) {
                continue;
            }
            if page_size > 0 && total_matched >= start && total_matched < end {
                items.push(record);
            }
            total_matched += 1;
        }

        let has_more = total_matched > end;
        tracing::debug!(
            page_number,
            page_size,
            total_matched,
            returned = items.len(),
            "page derived"
        );
        Page {
            items,
            page_number,
            page_size,
            total_matched,
            has_more,
        }
    }

    /// Count records matching `filter` without collecting any
    ///
    /// Subject to the same active-filter precondition as
    /// [`Paginator::get_page`]: an empty filter counts zero.
    #[must_use]
    pub fn count_matched(&self, filter: &FilterState) -> usize {
        if filter.is_empty() {
            return 0;
        }
        ScenarioEnumerator::new(self.catalog, self.budget)
            .filter(|record| filter.matches(record))
            .count()
    }
}
