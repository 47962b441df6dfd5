// src/render/contact.rs
//! `contact` section: four icon-labeled items in a fixed order.

use crate::config::{Contact, ResumeConfig};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::{region, require};

pub const REGION: &str = "contact-info";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let contact = require(&config.contact, "contact")?;
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(contact));
    Ok(())
}

/// Builds the region's markup: email, phone, location, LinkedIn, each as a
/// `contact-item` with its icon class.
pub fn fragment(contact: &Contact) -> String {
    let items = [
        ("fas fa-envelope", contact.email.as_str()),
        ("fas fa-phone", contact.phone.as_str()),
        ("fas fa-map-marker-alt", contact.location.as_str()),
        ("fab fa-linkedin", contact.linkedin.as_str()),
    ];
    let mut out = String::new();
    for (icon, text) in items {
        out.push_str(&format!(
            r#"<div class="contact-item"><i class="{icon}"></i><span>{}</span></div>"#,
            escape_text(text)
        ));
    }
    out
}
