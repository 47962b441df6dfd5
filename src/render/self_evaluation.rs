// src/render/self_evaluation.rs
//! `self_evaluation` section: a single paragraph. Optional; an absent value
//! leaves the region untouched.

use crate::config::ResumeConfig;
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::region;

pub const REGION: &str = "self-evaluation";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let Some(text) = &config.self_evaluation else {
        return Ok(());
    };
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(text));
    Ok(())
}

pub fn fragment(text: &str) -> String {
    format!(
        r#"<div class="self-evaluation-content"><p>{}</p></div>"#,
        escape_text(text),
    )
}
