// src/render/additional_skills.rs
//! `additional_skills` section: office and design lists. Optional; an
//! absent sub-tree leaves the region untouched.

use crate::config::{AdditionalSkills, ResumeConfig};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::region;

pub const REGION: &str = "additional-skills";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let Some(extra) = &config.additional_skills else {
        return Ok(());
    };
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(extra));
    Ok(())
}

pub fn fragment(extra: &AdditionalSkills) -> String {
    [
        ("Office Skills", &extra.office),
        ("Design Skills", &extra.design),
    ]
    .into_iter()
    .map(|(label, entries)| category_fragment(label, entries))
    .collect()
}

fn category_fragment(label: &str, entries: &[String]) -> String {
    let items: String = entries
        .iter()
        .map(|s| format!("<li>{}</li>", escape_text(s)))
        .collect();
    format!(
        r#"<div class="additional-skill-category"><h4>{}</h4><ul class="skill-list">{items}</ul></div>"#,
        escape_text(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra() -> AdditionalSkills {
        serde_json::from_str(r#"{"office": ["Excel", "Word"], "design": ["Figma"]}"#).unwrap()
    }

    #[test]
    fn test_office_precedes_design() {
        let html = fragment(&extra());
        assert_eq!(html.matches("additional-skill-category").count(), 2);
        assert!(html.find("Office Skills").unwrap() < html.find("Design Skills").unwrap());
        assert!(html.contains("<li>Excel</li><li>Word</li>"));
    }

    #[test]
    fn test_absent_section_leaves_the_region_untouched() {
        let mut page = Page::parse(
            r#"<html><body><div id="additional-skills"><p class="keep">intact</p></div></body></html>"#,
        );
        render(&ResumeConfig::default(), &mut page).unwrap();
        assert_eq!(page.elements_with_class("keep").len(), 1);
    }

    #[test]
    fn test_present_section_with_missing_region_is_an_error() {
        let mut page = Page::parse(r#"<html><body></body></html>"#);
        let config = ResumeConfig {
            additional_skills: Some(extra()),
            ..Default::default()
        };
        let err = render(&config, &mut page).unwrap_err();
        assert!(matches!(err, RenderError::RegionMissing { region: "additional-skills" }));
    }

    #[test]
    fn test_render_fills_the_region_when_present() {
        let mut page =
            Page::parse(r#"<html><body><div id="additional-skills"></div></body></html>"#);
        let config = ResumeConfig {
            additional_skills: Some(extra()),
            ..Default::default()
        };
        render(&config, &mut page).unwrap();
        assert_eq!(page.elements_with_class("skill-list").len(), 2);
    }
}
