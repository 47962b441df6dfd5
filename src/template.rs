// src/template.rs
//! Bundled page template and `init` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Default single-page resume document, sample payload included. Compiled
/// into the binary so `init` works without any template directory.
pub const DEFAULT_PAGE: &str = include_str!("../templates/resume.html");

/// File name used both for template lookup and for scaffolded output.
pub const PAGE_FILE_NAME: &str = "resume.html";

/// Writes a starter page into `dir`, preferring `<templates_path>/resume.html`
/// over the bundled default when it exists.
pub fn scaffold(dir: &Path, templates_path: &Path, force: bool) -> Result<PathBuf> {
    let source = templates_path.join(PAGE_FILE_NAME);
    let content = if source.exists() {
        fs::read_to_string(&source)
            .with_context(|| format!("Failed to read template: {}", source.display()))?
    } else {
        DEFAULT_PAGE.to_string()
    };

    let dest = dir.join(PAGE_FILE_NAME);
    if dest.exists() && !force {
        anyhow::bail!("{} already exists (pass --force to overwrite)", dest.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&dest, content)
        .with_context(|| format!("Failed to write: {}", dest.display()))?;
    info!("wrote starter page: {}", dest.display());
    Ok(dest)
}
