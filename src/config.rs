// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Configuration loading
//!
//! Project defaults from `.packflow.yaml`. Every field is optional; a
//! missing file is the same as an empty one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::executors::DEFAULT_SDK;
use crate::pipeline::PipelineOptions;
use crate::sdk::{DEFAULT_PACKS_DIR, DEFAULT_TEMPLATE};
use crate::PackflowError;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".packflow.yaml";

/// Configuration from .packflow.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackflowConfig {
    /// SDK binary
    #[serde(default = "default_sdk")]
    pub sdk: String,

    /// Defaults for init-* commands
    #[serde(default)]
    pub init: InitConfig,

    /// Defaults for lint
    #[serde(default)]
    pub lint: LintConfig,

    /// Defaults for validate
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Which optional pipeline steps run
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

fn default_sdk() -> String {
    DEFAULT_SDK.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PackflowConfig {
    fn default() -> Self {
        Self {
            sdk: default_sdk(),
            init: InitConfig::default(),
            lint: LintConfig::default(),
            validate: ValidateConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

/// init-* defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitConfig {
    /// Where new packs are created
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Integration template
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_output_dir() -> String {
    DEFAULT_PACKS_DIR.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            template: default_template(),
        }
    }
}

/// lint defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default = "default_true")]
    pub docker: bool,

    #[serde(default = "default_true")]
    pub test: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            docker: true,
            test: true,
        }
    }
}

/// validate defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateConfig {
    #[serde(default)]
    pub use_git: bool,

    #[serde(default)]
    pub no_backward_comp: bool,
}

/// pipeline step toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_true")]
    pub lint: bool,

    #[serde(default = "default_true")]
    pub docs: bool,

    #[serde(default)]
    pub upload: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lint: true,
            docs: true,
            upload: false,
        }
    }
}

impl PackflowConfig {
    /// Load from file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, PackflowError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| PackflowError::ConfigRead {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_yaml(&content)
    }

    /// Load from a project directory (looks for .packflow.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self, PackflowError> {
        Self::load(&project_root.join(CONFIG_FILE))
    }

    /// Parse from YAML; an empty document means defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, PackflowError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Pipeline options before command-line overrides
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            lint: self.pipeline.lint,
            docs: self.pipeline.docs,
            upload: self.pipeline.upload,
            lint_docker: self.lint.docker,
            lint_test: self.lint.test,
            use_git: self.validate.use_git,
            no_backward_comp: self.validate.no_backward_comp,
            insecure: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_default() {
        let temp = TempDir::new().unwrap();
        let config = PackflowConfig::load_from_project(temp.path()).unwrap();

        assert_eq!(config, PackflowConfig::default());
        assert_eq!(config.sdk, "demisto-sdk");
        assert_eq!(config.init.output_dir, "Packs");
        assert_eq!(config.init.template, "HelloWorld");
    }

    #[test]
    fn test_default_pipeline_options_match_workflow_defaults() {
        assert_eq!(
            PackflowConfig::default().pipeline_options(),
            PipelineOptions::default()
        );
    }

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();

        std::fs::write(
            temp.path().join(".packflow.yaml"),
            r#"
sdk: /opt/sdk/bin/demisto-sdk
init:
  template: BaseIntegration
lint:
  docker: false
pipeline:
  docs: false
  upload: true
"#,
        )
        .unwrap();

        let config = PackflowConfig::load_from_project(temp.path()).unwrap();

        assert_eq!(config.sdk, "/opt/sdk/bin/demisto-sdk");
        assert_eq!(config.init.template, "BaseIntegration");
        assert_eq!(config.init.output_dir, "Packs");
        assert!(!config.lint.docker);
        assert!(config.lint.test);

        let options = config.pipeline_options();
        assert!(options.lint);
        assert!(!options.docs);
        assert!(options.upload);
        assert!(!options.lint_docker);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(
            PackflowConfig::from_yaml("\n").unwrap(),
            PackflowConfig::default()
        );
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = PackflowConfig::from_yaml("pipeline: [").unwrap_err();
        assert!(matches!(err, PackflowError::Yaml { .. }));
    }
}
