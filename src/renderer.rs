// src/renderer.rs
//! Boot pipeline: load the embedded configuration, run every section
//! renderer, then attach the interaction behaviors.

use tracing::{error, info};

use crate::config::{self, ResumeConfig};
use crate::enhance::{self, Attachments};
use crate::error::RenderError;
use crate::page::Page;
use crate::render::{self, RenderReport};
use crate::runtime::Runtime;

/// What booting a page produced.
pub enum BootOutcome {
    /// The payload loaded. Regions are filled (minus any reported
    /// per-section failures) and the behaviors are attached.
    Rendered {
        config: ResumeConfig,
        report: RenderReport,
        attachments: Attachments,
    },
    /// The payload was missing or malformed. The body now shows the error
    /// panel; nothing was rendered and no behavior was attached.
    ConfigFailed(RenderError),
}

impl BootOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, BootOutcome::Rendered { .. })
    }
}

const ERROR_PANEL: &str = r#"<div class="config-error" style="text-align: center; padding: 50px; color: #666"><h2>Unable to load resume data</h2><p>Check the embedded resume configuration in the page.</p><p>The log output has the details.</p></div>"#;

/// Boots the page inside `rt`: configuration, sections, behaviors.
pub fn boot(rt: &mut Runtime) -> BootOutcome {
    let config = match config::load_embedded(&rt.page) {
        Ok(config) => config,
        Err(e) => {
            show_error_panel(&mut rt.page);
            return BootOutcome::ConfigFailed(e);
        }
    };

    let report = render::render_all(&config, &mut rt.page);
    if report.is_ok() {
        info!("{} sections rendered", report.outcomes.len());
    } else {
        error!(
            "{} of {} sections failed to render",
            report.failure_count(),
            report.outcomes.len()
        );
    }

    let attachments = enhance::attach_all(rt);
    BootOutcome::Rendered {
        config,
        report,
        attachments,
    }
}

/// Replaces the body content wholesale; a half-rendered page would be more
/// misleading than an explicit failure notice.
fn show_error_panel(page: &mut Page) {
    if let Some(body) = page.body() {
        page.set_inner_html(body, ERROR_PANEL);
    }
}
