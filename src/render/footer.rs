// src/render/footer.rs
//! `footer` section: the copyright line, as plain text.

use crate::config::ResumeConfig;
use crate::error::RenderError;
use crate::page::Page;

use super::{region, require};

pub const REGION: &str = "footer-copyright";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let footer = require(&config.footer, "footer")?;
    let target = region(page, REGION)?;
    page.set_text(target, &footer.copyright);
    Ok(())
}
