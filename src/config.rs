use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, GenerateOptions};

pub const CONFIG_FILE_NAME: &str = ".binstubsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File to scan for blank imports, relative to the project root.
    #[serde(default = "default_input")]
    pub input: String,
    /// Directory binstubs are written to, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            bail!("'input' must not be empty");
        }
        if self.output_dir.trim().is_empty() {
            bail!("'outputDir' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in `config` are resolved against.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}

impl ConfigLoadResult {
    /// Build generation options, letting explicit overrides win over the file.
    pub fn into_generate_options(
        self,
        input: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> GenerateOptions {
        GenerateOptions {
            root: self.root,
            input: input.unwrap_or_else(|| PathBuf::from(self.config.input)),
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(self.config.output_dir)),
        }
    }
}
