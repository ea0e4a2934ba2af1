use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".vkexpandrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Substring identifying a factory invocation to expand.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Only files containing this substring are expanded. Empty disables
    /// the content filter.
    #[serde(default = "default_target_marker")]
    pub target_marker: String,
    /// Inserted before the extension when deriving the output file name.
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    /// Factory names skipped entirely during location.
    #[serde(default = "default_ignore_methods")]
    pub ignore_methods: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_marker() -> String {
    crate::locate::DEFAULT_MARKER.to_string()
}

fn default_target_marker() -> String {
    "public VulkanExampleBase".to_string()
}

fn default_output_suffix() -> String {
    "__expanded__".to_string()
}

fn default_ignore_methods() -> Vec<String> {
    vec!["pushConstantRange".to_string()]
}

fn default_source_extensions() -> Vec<String> {
    vec!["cpp".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            target_marker: default_target_marker(),
            output_suffix: default_output_suffix(),
            ignore_methods: default_ignore_methods(),
            ignores: Vec::new(),
            includes: Vec::new(),
            source_extensions: default_source_extensions(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are
    /// invalid, or if the marker is empty.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.marker.is_empty(), "'marker' must not be empty");

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Validate include patterns that contain glob wildcards (* or ?)
        // Patterns without wildcards are treated as literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Per-invocation flags threaded through the commands, separate from the
/// on-disk configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSettings {
    /// 0 = normal, 1+ = verbose.
    pub verbosity: u8,
    /// Abort on the first per-file failure instead of reporting it.
    pub debug: bool,
    /// Treat warnings as failures for the exit status.
    pub strict: bool,
}

impl RunSettings {
    pub fn verbose(&self) -> bool {
        self.verbosity > 0
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.marker, "vkTools::initializers::");
        assert_eq!(config.target_marker, "public VulkanExampleBase");
        assert_eq!(config.output_suffix, "__expanded__");
        assert_eq!(config.ignore_methods, vec!["pushConstantRange"]);
        assert!(config.ignores.is_empty());
        assert!(config.includes.is_empty());
        assert_eq!(config.source_extensions, vec!["cpp"]);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "ignores": ["**/build/**"],
              "includes": ["examples/**"],
              "sourceExtensions": ["cpp", "h"],
              "ignoreMethods": []
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.ignores, vec!["**/build/**"]);
        assert_eq!(config.includes, vec!["examples/**"]);
        assert_eq!(config.source_extensions, vec!["cpp", "h"]);
        assert!(config.ignore_methods.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "ignores": ["**/build/**"] }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.ignores, vec!["**/build/**"]);
        assert_eq!(config.marker, default_marker());
        assert_eq!(config.ignore_methods, default_ignore_methods());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("examples").join("triangle");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "marker": "vks::initializers::" }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.marker, "vks::initializers::");
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.marker, default_marker());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config {
            ignores: vec!["**/build/**".to_string()],
            includes: vec!["examples".to_string(), "src/**".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()], // unclosed bracket
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_invalid_include_pattern() {
        let config = Config {
            includes: vec!["src/**/[invalid".to_string()],
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("includes"));
    }

    #[test]
    fn test_validate_empty_marker() {
        let config = Config {
            marker: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "ignores": ["[invalid"] }"#).unwrap();

        let result = load_config(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("targetMarker"));
        assert!(json.contains("ignoreMethods"));
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.output_suffix, default_output_suffix());
    }
}
