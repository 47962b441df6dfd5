// src/render/education.rs
//! `education` section: a single record, not a list.

use crate::config::{Education, ResumeConfig};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::{region, require};

pub const REGION: &str = "education-item";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let education = require(&config.education, "education")?;
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(education));
    Ok(())
}

pub fn fragment(education: &Education) -> String {
    format!(
        r#"<div class="education-header"><h3>{}</h3><span class="degree">{}</span></div><p class="school">{}</p><p class="period">{}</p><p class="gpa">{}</p>"#,
        escape_text(&education.major),
        escape_text(&education.degree),
        escape_text(&education.school),
        escape_text(&education.period),
        escape_text(&education.gpa),
    )
}
