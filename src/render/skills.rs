// src/render/skills.rs
//! `skills` section: three fixed categories of tag pills.

use crate::config::{ResumeConfig, Skills};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::{region, require};

pub const REGION: &str = "skills-container";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let skills = require(&config.skills, "skills")?;
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(skills));
    Ok(())
}

/// Categories always render in the same order, empty ones included, so the
/// page keeps its shape whatever the payload carries.
pub fn fragment(skills: &Skills) -> String {
    [
        ("Technical Skills", &skills.technical),
        ("Soft Skills", &skills.soft),
        ("Languages", &skills.languages),
    ]
    .into_iter()
    .map(|(label, entries)| category_fragment(label, entries))
    .collect()
}

fn category_fragment(label: &str, entries: &[String]) -> String {
    let tags: String = entries
        .iter()
        .map(|s| format!(r#"<span class="skill-tag">{}</span>"#, escape_text(s)))
        .collect();
    format!(
        r#"<div class="skill-category"><h4>{}</h4><div class="skill-tags">{tags}</div></div>"#,
        escape_text(label),
    )
}
