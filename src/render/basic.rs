// src/render/basic.rs
//! `basic` section: name, title and summary land in their own regions as
//! plain text.

use crate::config::ResumeConfig;
use crate::error::RenderError;
use crate::page::Page;

use super::{region, require};

pub const NAME_REGION: &str = "name";
pub const TITLE_REGION: &str = "title";
pub const SUMMARY_REGION: &str = "summary";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let basic = require(&config.basic, "basic")?;
    let name = region(page, NAME_REGION)?;
    let title = region(page, TITLE_REGION)?;
    let summary = region(page, SUMMARY_REGION)?;
    page.set_text(name, &basic.name);
    page.set_text(title, &basic.title);
    page.set_text(summary, &basic.summary);
    Ok(())
}
