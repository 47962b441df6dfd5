// src/config.rs
//! Resume configuration schema and the embedded-payload loader.
//!
//! The page carries its data as a JSON document inside the element with id
//! [`CONFIG_ELEMENT_ID`]. Every top-level section is optional; a section
//! renderer that needs an absent one reports that itself. Field names inside
//! a present section are strict, so a typo surfaces as a parse error at load
//! time instead of a blank region later.

use serde::Deserialize;
use tracing::{error, info};

use crate::error::RenderError;
use crate::page::Page;

/// Id of the element whose text content carries the JSON payload.
pub const CONFIG_ELEMENT_ID: &str = "resume-config";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeConfig {
    pub basic: Option<Basic>,
    pub contact: Option<Contact>,
    pub experience: Option<Vec<Job>>,
    pub education: Option<Education>,
    pub skills: Option<Skills>,
    pub projects: Option<Vec<Project>>,
    pub additional_skills: Option<AdditionalSkills>,
    pub certificates: Option<Vec<Certificate>>,
    pub self_evaluation: Option<String>,
    pub footer: Option<Footer>,
}

impl ResumeConfig {
    /// Names of the sections this payload actually carries.
    pub fn present_sections(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.basic.is_some() {
            present.push("basic");
        }
        if self.contact.is_some() {
            present.push("contact");
        }
        if self.experience.is_some() {
            present.push("experience");
        }
        if self.education.is_some() {
            present.push("education");
        }
        if self.skills.is_some() {
            present.push("skills");
        }
        if self.projects.is_some() {
            present.push("projects");
        }
        if self.additional_skills.is_some() {
            present.push("additional_skills");
        }
        if self.certificates.is_some() {
            present.push("certificates");
        }
        if self.self_evaluation.is_some() {
            present.push("self_evaluation");
        }
        if self.footer.is_some() {
            present.push("footer");
        }
        present
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Basic {
    pub name: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub position: String,
    pub company: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub major: String,
    pub degree: String,
    pub school: String,
    pub period: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Optional; when absent the highlights block is omitted entirely.
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdditionalSkills {
    pub office: Vec<String>,
    pub design: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub copyright: String,
}

/// Reads and parses the JSON payload embedded in `page`.
pub fn load_embedded(page: &Page) -> Result<ResumeConfig, RenderError> {
    let Some(node) = page.element_by_id(CONFIG_ELEMENT_ID) else {
        error!("configuration element `#{CONFIG_ELEMENT_ID}` not found in page");
        return Err(RenderError::ConfigMissing(CONFIG_ELEMENT_ID));
    };
    let raw = page.text_content(node);
    match serde_json::from_str::<ResumeConfig>(raw.trim()) {
        Ok(config) => {
            info!(
                "resume configuration loaded: {}",
                config.present_sections().join(", ")
            );
            Ok(config)
        }
        Err(e) => {
            error!("embedded resume configuration did not parse: {e}");
            Err(RenderError::ConfigParse(e))
        }
    }
}
