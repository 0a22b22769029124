//! `load_config` module: builds the [`ImportConfig`] for a run.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults ([`ImportConfig::default`]).
//! 2. An optional YAML file passed with `--config`. Every key is optional.
//! 3. `CROSSWORD_IMPORT_OUTPUT_DIR` from the environment (or `.env`).
//!
//! The `--output-dir` flag is applied on top of the result by the CLI.
//!
//! # Errors
//! All errors use `anyhow::Error` and surface at the CLI boundary.
use anyhow::Result;
use crossword_import_core::ImportConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const OUTPUT_DIR_ENV: &str = "CROSSWORD_IMPORT_OUTPUT_DIR";

/// YAML-side shape of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub output_dir: Option<PathBuf>,
    pub title: Option<String>,
    pub puzzle_url_template: Option<String>,
    pub upload_url: Option<String>,
    pub view_url_base: Option<String>,
}

impl FileConfig {
    fn apply(self, config: &mut ImportConfig) {
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(template) = self.puzzle_url_template {
            config.puzzle_url_template = template;
        }
        if let Some(upload_url) = self.upload_url {
            config.upload_url = upload_url;
        }
        if let Some(view_url_base) = self.view_url_base {
            config.view_url_base = view_url_base;
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ImportConfig> {
    let mut config = ImportConfig::default();

    if let Some(path_ref) = path {
        info!(config_path = ?path_ref, "Loading configuration from file");

        let config_content = match fs::read_to_string(path_ref) {
            Ok(content) => content,
            Err(e) => {
                error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
                return Err(anyhow::anyhow!(
                    "Failed to read config file {:?}: {}",
                    path_ref,
                    e
                ));
            }
        };

        // An empty file deserializes to unit, not to a mapping.
        let file_config: FileConfig = if config_content.trim().is_empty() {
            FileConfig::default()
        } else {
            match serde_yaml::from_str(&config_content) {
                Ok(conf) => {
                    info!(config_path = ?path_ref, "Parsed config YAML successfully");
                    conf
                }
                Err(e) => {
                    error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
                    return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
                }
            }
        };
        file_config.apply(&mut config);
    }

    if let Ok(output_dir) = std::env::var(OUTPUT_DIR_ENV) {
        if !output_dir.trim().is_empty() {
            info!(output_dir = %output_dir, "Output directory taken from environment");
            config.output_dir = PathBuf::from(output_dir);
        }
    }

    Ok(config)
}
