// src/render/projects.rs
//! `projects` section: name, description, tech tags and optional highlights
//! per project.

use crate::config::{Project, ResumeConfig};
use crate::error::RenderError;
use crate::page::{escape_text, Page};

use super::{region, require};

pub const REGION: &str = "projects-container";

pub fn render(config: &ResumeConfig, page: &mut Page) -> Result<(), RenderError> {
    let projects = require(&config.projects, "projects")?;
    let target = region(page, REGION)?;
    page.set_inner_html(target, &fragment(projects));
    Ok(())
}

pub fn fragment(projects: &[Project]) -> String {
    projects.iter().map(entry_fragment).collect()
}

fn entry_fragment(project: &Project) -> String {
    let tech: String = project
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, escape_text(t)))
        .collect();
    // `highlights: []` still renders the block, with an empty list; only an
    // absent field omits it.
    let highlights = match &project.highlights {
        Some(entries) => {
            let items: String = entries
                .iter()
                .map(|h| format!("<li>{}</li>", escape_text(h)))
                .collect();
            format!(r#"<div class="project-highlights"><h5>Highlights:</h5><ul>{items}</ul></div>"#)
        }
        None => String::new(),
    };
    format!(
        r#"<div class="project-item"><h4>{}</h4><p class="project-description">{}</p><div class="project-tech">{tech}</div>{highlights}</div>"#,
        escape_text(&project.name),
        escape_text(&project.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        serde_json::from_str(
            r#"[
                {"name": "Renderer", "description": "Fills regions.", "technologies": ["Rust"], "highlights": ["fast", "small"]},
                {"name": "Importer", "description": "Reads feeds.", "technologies": ["Rust", "SQL"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_projects_render_in_payload_order_with_tech_tags() {
        let html = fragment(&projects());
        assert_eq!(html.matches("project-item").count(), 2);
        assert!(html.find("Renderer").unwrap() < html.find("Importer").unwrap());
        assert_eq!(html.matches("tech-tag").count(), 3);
    }

    #[test]
    fn test_absent_highlights_omit_the_block() {
        let html = fragment(&projects());
        // Only the first project carries highlights.
        assert_eq!(html.matches("project-highlights").count(), 1);
        assert!(html.contains("<li>fast</li><li>small</li>"));
    }

    #[test]
    fn test_empty_highlights_render_an_empty_list() {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[{"name": "p", "description": "d", "technologies": [], "highlights": []}]"#,
        )
        .unwrap();
        let html = fragment(&projects);
        assert!(html.contains(r#"<div class="project-highlights"><h5>Highlights:</h5><ul></ul></div>"#));
    }

    #[test]
    fn test_render_fills_the_container() {
        let mut page =
            Page::parse(r#"<html><body><div id="projects-container">old</div></body></html>"#);
        let config = ResumeConfig {
            projects: Some(projects()),
            ..Default::default()
        };
        render(&config, &mut page).unwrap();
        assert_eq!(page.elements_with_class("project-item").len(), 2);
    }
}
