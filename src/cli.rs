// src/cli.rs
//! Command-line interface: render, check and init.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use crate::config::CONFIG_ELEMENT_ID;
use crate::environment::EnvironmentConfig;
use crate::page::Page;
use crate::renderer::{self, BootOutcome};
use crate::runtime::Runtime;
use crate::template;

#[derive(Parser)]
#[command(name = "cvpage")]
#[command(about = "Render single-page HTML resumes from an embedded JSON payload")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fill a page's target regions from its embedded payload
    Render {
        /// Path to the resume page
        page: PathBuf,
        /// Output file (default: <output_path>/<stem>_<timestamp>.html)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Replace the embedded payload with this JSON file before rendering
        #[arg(long)]
        payload: Option<PathBuf>,
        /// Viewport width used for the initial print-button visibility
        #[arg(long)]
        viewport_width: Option<f64>,
    },
    /// Validate a page's payload and report every section's outcome
    Check {
        /// Path to the resume page
        page: PathBuf,
        /// Replace the embedded payload with this JSON file before checking
        #[arg(long)]
        payload: Option<PathBuf>,
    },
    /// Write a starter resume page into a directory
    Init {
        /// Destination directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Overwrite an existing page
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let env = EnvironmentConfig::load()?;
    match cli.command {
        Command::Render {
            page,
            output,
            payload,
            viewport_width,
        } => render_command(&env, &page, output, payload.as_deref(), viewport_width),
        Command::Check { page, payload } => check_command(&page, payload.as_deref()),
        Command::Init { dir, force } => {
            let dest = template::scaffold(&dir, &env.templates_path, force)?;
            info!("✓ Starter page ready: {}", dest.display());
            Ok(())
        }
    }
}

fn render_command(
    env: &EnvironmentConfig,
    page_path: &Path,
    output: Option<PathBuf>,
    payload: Option<&Path>,
    viewport_width: Option<f64>,
) -> Result<()> {
    let page = load_page(page_path, payload, viewport_width)?;
    let mut rt = Runtime::new(page);
    let outcome = renderer::boot(&mut rt);

    let out_path = output.unwrap_or_else(|| timestamped_output(&env.output_path, page_path));
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }
    // The document is written even on failure: an error panel or a partial
    // page is easier to diagnose than no file at all.
    fs::write(&out_path, rt.page.to_html())
        .with_context(|| format!("Failed to write: {}", out_path.display()))?;

    match outcome {
        BootOutcome::Rendered { report, .. } => {
            for (section, err) in report.failures() {
                error!("section `{section}`: {err}");
            }
            if report.is_ok() {
                info!("✓ Rendered {} -> {}", page_path.display(), out_path.display());
                Ok(())
            } else {
                anyhow::bail!(
                    "{} section(s) failed to render (partial page written to {})",
                    report.failure_count(),
                    out_path.display()
                )
            }
        }
        BootOutcome::ConfigFailed(e) => {
            anyhow::bail!("configuration failed to load: {e} (error panel written to {})", out_path.display())
        }
    }
}

fn check_command(page_path: &Path, payload: Option<&Path>) -> Result<()> {
    let page = load_page(page_path, payload, None)?;
    let mut rt = Runtime::new(page);
    match renderer::boot(&mut rt) {
        BootOutcome::Rendered { config, report, .. } => {
            info!("payload sections: {}", config.present_sections().join(", "));
            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok(()) => info!("✓ {}", outcome.section),
                    Err(e) => warn!("✗ {}: {e}", outcome.section),
                }
            }
            if report.is_ok() {
                info!("✓ {} checks out", page_path.display());
                Ok(())
            } else {
                anyhow::bail!("{} section(s) would fail to render", report.failure_count())
            }
        }
        BootOutcome::ConfigFailed(e) => anyhow::bail!("configuration failed to load: {e}"),
    }
}

/// Reads and parses the page, optionally swapping in an external payload and
/// a starting viewport width.
fn load_page(path: &Path, payload: Option<&Path>, viewport_width: Option<f64>) -> Result<Page> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;
    let mut page = Page::parse(&html);
    if let Some(width) = viewport_width {
        page.set_viewport_width(width);
    }
    if let Some(payload_path) = payload {
        let json = fs::read_to_string(payload_path)
            .with_context(|| format!("Failed to read payload: {}", payload_path.display()))?;
        let node = page.element_by_id(CONFIG_ELEMENT_ID).ok_or_else(|| {
            anyhow::anyhow!("page has no #{CONFIG_ELEMENT_ID} element to hold the payload")
        })?;
        page.set_text(node, json.trim());
        info!("payload replaced from {}", payload_path.display());
    }
    Ok(page)
}

fn timestamped_output(base: &Path, page_path: &Path) -> PathBuf {
    let stem = page_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    base.join(format!("{stem}_{timestamp}.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_name_carries_stem_and_timestamp() {
        let out = timestamped_output(Path::new("output"), Path::new("pages/alex.html"));
        let name = out.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("alex_"));
        assert!(name.ends_with(".html"));
        assert!(out.starts_with("output"));
    }

    #[test]
    fn test_load_page_swaps_in_an_external_payload() {
        let dir = std::env::temp_dir().join(format!("cvpage-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let page_path = dir.join("page.html");
        let payload_path = dir.join("payload.json");
        fs::write(
            &page_path,
            r#"<html><body><script id="resume-config">{"footer": {"copyright": "old"}}</script></body></html>"#,
        )
        .unwrap();
        fs::write(&payload_path, r#"{"footer": {"copyright": "new"}}"#).unwrap();

        let page = load_page(&page_path, Some(&payload_path), None).unwrap();
        let node = page.element_by_id(CONFIG_ELEMENT_ID).unwrap();
        assert!(page.text_content(node).contains("new"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_page_rejects_payload_without_config_element() {
        let dir = std::env::temp_dir().join(format!("cvpage-cli-noel-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let page_path = dir.join("page.html");
        let payload_path = dir.join("payload.json");
        fs::write(&page_path, "<html><body></body></html>").unwrap();
        fs::write(&payload_path, "{}").unwrap();

        assert!(load_page(&page_path, Some(&payload_path), None).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
