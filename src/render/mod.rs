// src/render/mod.rs
//! Section renderers.
//!
//! Each renderer reads one configuration sub-tree and replaces the content
//! of one target region. Renderers are mutually independent and never touch
//! another renderer's region, so [`render_all`] attempts every one of them
//! and aggregates the failures instead of stopping at the first.

pub mod additional_skills;
pub mod basic;
pub mod certificates;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod projects;
pub mod self_evaluation;
pub mod skills;

use tracing::{debug, warn};

use crate::config::ResumeConfig;
use crate::error::RenderError;
use crate::page::{NodeId, Page};

type SectionFn = fn(&ResumeConfig, &mut Page) -> Result<(), RenderError>;

/// Every section renderer, in the order regions appear on the page. The
/// order is cosmetic; no renderer depends on another having run.
const SECTIONS: &[(&str, SectionFn)] = &[
    ("basic", basic::render),
    ("contact", contact::render),
    ("experience", experience::render),
    ("education", education::render),
    ("skills", skills::render),
    ("projects", projects::render),
    ("additional_skills", additional_skills::render),
    ("certificates", certificates::render),
    ("self_evaluation", self_evaluation::render),
    ("footer", footer::render),
];

/// Outcome of one section's render attempt.
pub struct SectionOutcome {
    pub section: &'static str,
    pub result: Result<(), RenderError>,
}

/// Aggregated outcomes of a full render pass.
#[derive(Default)]
pub struct RenderReport {
    pub outcomes: Vec<SectionOutcome>,
}

impl RenderReport {
    pub fn is_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &RenderError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.section, e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Runs every section renderer against `page`, regardless of earlier
/// failures, and reports each outcome.
pub fn render_all(config: &ResumeConfig, page: &mut Page) -> RenderReport {
    let mut report = RenderReport::default();
    for (section, render) in SECTIONS {
        let result = render(config, page);
        match &result {
            Ok(()) => debug!("section `{section}` rendered"),
            Err(e) => warn!("section `{section}` failed: {e}"),
        }
        report.outcomes.push(SectionOutcome { section, result });
    }
    report
}

/// Looks up a renderer's target region.
fn region(page: &Page, id: &'static str) -> Result<NodeId, RenderError> {
    page.element_by_id(id)
        .ok_or(RenderError::RegionMissing { region: id })
}

/// Unwraps a required configuration sub-tree.
fn require<'a, T>(value: &'a Option<T>, section: &'static str) -> Result<&'a T, RenderError> {
    value.as_ref().ok_or(RenderError::MissingField { section })
}
