// src/render/certificates.rs
//! `certificates` section: name and issuer per entry.

use crate::config::{Certificate, ResumeConfig};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::{region, require};

pub const REGION: &str = "certificates-container";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let certificates = require(&config.certificates, "certificates")?;
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(certificates));
    Ok(())
}

pub fn fragment(certificates: &[Certificate]) -> String {
    certificates
        .iter()
        .map(|c| {
            format!(
                r#"<div class="certificate-item"><h4>{}</h4><p>{}</p></div>"#,
                escape_text(&c.name),
                escape_text(&c.issuer),
            )
        })
        .collect()
}
