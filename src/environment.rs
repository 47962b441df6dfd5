// src/environment.rs
//! Optional per-environment settings, read from `cvpage.yaml`.
//!
//! The file carries a `local` and a `production` block; `CVPAGE_ENV` (or the
//! broader `ENVIRONMENT`) selects one, defaulting to `local`. Without the
//! file the built-in defaults apply, so the CLI works out of the box.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

pub const ENV_FILE: &str = "cvpage.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    pub templates_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self> {
        let environment = Self::environment_name();
        let file = PathBuf::from(ENV_FILE);

        let selected = if file.exists() {
            info!("loading {ENV_FILE} (environment: {environment})");
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {ENV_FILE}"))?;
            let config: ConfigFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {ENV_FILE}"))?;
            match environment.as_str() {
                "production" => config.production,
                _ => config.local,
            }
        } else {
            info!("no {ENV_FILE} found, using built-in defaults");
            EnvironmentConfig {
                templates_path: PathBuf::from("templates"),
                output_path: PathBuf::from("output"),
            }
        };

        Ok(EnvironmentConfig {
            templates_path: Self::resolve_path(&selected.templates_path)?,
            output_path: Self::resolve_path(&selected.output_path)?,
        })
    }

    fn environment_name() -> String {
        std::env::var("CVPAGE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Ok(cwd.join(path))
    }
}
