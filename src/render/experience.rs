// src/render/experience.rs
//! `experience` section: one timeline entry per job, achievements as a list.

use crate::config::{Job, ResumeConfig};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::{region, require};

pub const REGION: &str = "experience-timeline";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let jobs = require(&config.experience, "experience")?;
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(jobs));
    Ok(())
}

/// Entries concatenated in payload order; an empty list clears the region.
pub fn fragment(jobs: &[Job]) -> String {
    jobs.iter().map(entry_fragment).collect()
}

fn entry_fragment(job: &Job) -> String {
    let achievements: String = job
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape_text(a)))
        .collect();
    format!(
        r#"<div class="timeline-item"><div class="timeline-header"><h3>{}</h3><span class="company">{}</span><span class="period">{}</span></div><ul class="achievements">{achievements}</ul></div>"#,
        escape_text(&job.position),
        escape_text(&job.company),
        escape_text(&job.period),
    )
}
