// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Argument builders
//!
//! One options struct per SDK subcommand. Each turns its fields into the
//! SDK's flag syntax; the first element of every argument list is the
//! subcommand itself. Nothing is validated here: a bad name or path is
//! reported by the SDK.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory for new packs
pub const DEFAULT_PACKS_DIR: &str = "Packs";

/// Default integration template
pub const DEFAULT_TEMPLATE: &str = "HelloWorld";

/// Kinds of content the SDK manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Pack,
    Integration,
    Script,
    Playbook,
}

impl ContentType {
    /// Flag selecting this content type for `init`
    pub fn init_flag(self) -> &'static str {
        match self {
            Self::Pack => "--pack",
            Self::Integration => "--integration",
            Self::Script => "--script",
            Self::Playbook => "--playbook",
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn init_args(kind: ContentType, name: &str, output: &Path) -> Vec<String> {
    vec![
        "init".into(),
        kind.init_flag().into(),
        "-n".into(),
        name.into(),
        "-o".into(),
        path_arg(output),
    ]
}

/// `init --pack`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPackOptions {
    /// Pack name (PascalCase)
    pub name: String,
    /// Parent directory, `Packs` by default
    pub output_dir: PathBuf,
}

impl InitPackOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_dir: PathBuf::from(DEFAULT_PACKS_DIR),
        }
    }

    pub fn args(&self) -> Vec<String> {
        init_args(ContentType::Pack, &self.name, &self.output_dir)
    }
}

/// `init --integration`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitIntegrationOptions {
    /// Integration name (PascalCase)
    pub name: String,
    /// Pack the integration is created in
    pub pack_path: PathBuf,
    /// Template, `HelloWorld` by default. `None` or empty lets the SDK choose.
    pub template: Option<String>,
}

impl InitIntegrationOptions {
    pub fn new(name: impl Into<String>, pack_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            pack_path: pack_path.into(),
            template: Some(DEFAULT_TEMPLATE.to_string()),
        }
    }

    pub fn args(&self) -> Vec<String> {
        let output = self.pack_path.join("Integrations");
        let mut args = init_args(ContentType::Integration, &self.name, &output);

        if let Some(template) = self.template.as_deref().filter(|t| !t.is_empty()) {
            args.push("-t".into());
            args.push(template.into());
        }

        args
    }
}

/// `init --script`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitScriptOptions {
    /// Script name (PascalCase)
    pub name: String,
    /// Pack the script is created in
    pub pack_path: PathBuf,
}

impl InitScriptOptions {
    pub fn new(name: impl Into<String>, pack_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            pack_path: pack_path.into(),
        }
    }

    pub fn args(&self) -> Vec<String> {
        let output = self.pack_path.join("Scripts");
        init_args(ContentType::Script, &self.name, &output)
    }
}

/// `format`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub path: PathBuf,
    /// Bump the docker image to the latest tag
    pub update_docker: bool,
}

impl FormatOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            update_docker: false,
        }
    }

    pub fn args(&self) -> Vec<String> {
        // -y answers the SDK's interactive prompts
        let mut args = vec!["format".into(), "-i".into(), path_arg(&self.path), "-y".into()];
        if self.update_docker {
            args.push("-ud".into());
        }
        args
    }
}

/// `validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    pub path: PathBuf,
    /// Only validate files changed according to git
    pub use_git: bool,
    /// Skip backward compatibility checks
    pub no_backward_comp: bool,
}

impl ValidateOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_git: false,
            no_backward_comp: false,
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["validate".into(), "-i".into(), path_arg(&self.path)];
        if self.use_git {
            args.push("-g".into());
        }
        if self.no_backward_comp {
            args.push("--no-backward-comp".into());
        }
        args
    }
}

/// `lint`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    pub path: PathBuf,
    /// Run inside docker (default on)
    pub docker: bool,
    /// Run unit tests (default on)
    pub test: bool,
}

impl LintOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            docker: true,
            test: true,
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["lint".into(), "-i".into(), path_arg(&self.path)];
        if !self.docker {
            args.push("--no-docker".into());
        }
        if !self.test {
            args.push("--no-test".into());
        }
        args
    }
}

/// `generate-docs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDocsOptions {
    /// Descriptor (YAML) file
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
}

impl GenerateDocsOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
        }
    }

    pub fn args(&self) -> Vec<String> {
        // -f overwrites an existing README
        let mut args = vec!["generate-docs".into(), "-i".into(), path_arg(&self.input), "-f".into()];
        if let Some(ref dir) = self.output_dir {
            args.push("-o".into());
            args.push(path_arg(dir));
        }
        args
    }
}

/// `generate-unit-tests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateUnitTestsOptions {
    /// Descriptor (YAML) file
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
}

impl GenerateUnitTestsOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["generate-unit-tests".into(), "-i".into(), path_arg(&self.input)];
        if let Some(ref dir) = self.output_dir {
            args.push("-o".into());
            args.push(path_arg(dir));
        }
        args
    }
}

/// `upload`
///
/// The SDK reads `DEMISTO_BASE_URL` and `DEMISTO_API_KEY` from its own
/// environment; they are inherited, never passed as arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub path: PathBuf,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl UploadOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            insecure: false,
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["upload".into(), "-i".into(), path_arg(&self.path)];
        if self.insecure {
            args.push("--insecure".into());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(args: &[String]) -> Vec<&str> {
        args.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_init_pack_defaults_to_packs_dir() {
        let args = InitPackOptions::new("MyPack").args();
        assert_eq!(strs(&args), ["init", "--pack", "-n", "MyPack", "-o", "Packs"]);
    }

    #[test]
    fn test_init_integration_under_pack() {
        let args = InitIntegrationOptions::new("MyInt", "Packs/MyPack").args();
        assert_eq!(
            strs(&args),
            [
                "init",
                "--integration",
                "-n",
                "MyInt",
                "-o",
                "Packs/MyPack/Integrations",
                "-t",
                "HelloWorld"
            ]
        );
    }

    #[test]
    fn test_init_integration_without_template() {
        let mut opts = InitIntegrationOptions::new("MyInt", "Packs/MyPack");
        opts.template = None;
        assert!(!opts.args().contains(&"-t".to_string()));

        opts.template = Some(String::new());
        assert!(!opts.args().contains(&"-t".to_string()));
    }

    #[test]
    fn test_init_script_under_pack() {
        let args = InitScriptOptions::new("MyScript", "Packs/MyPack").args();
        assert_eq!(
            strs(&args),
            ["init", "--script", "-n", "MyScript", "-o", "Packs/MyPack/Scripts"]
        );
    }

    #[test]
    fn test_format_flags() {
        let mut opts = FormatOptions::new("Packs/MyPack");
        assert_eq!(strs(&opts.args()), ["format", "-i", "Packs/MyPack", "-y"]);

        opts.update_docker = true;
        let args = opts.args();
        assert_eq!(args[0], "format");
        assert!(args.contains(&"-ud".to_string()));
    }

    #[test]
    fn test_validate_flags() {
        let mut opts = ValidateOptions::new("Packs/MyPack");
        assert_eq!(strs(&opts.args()), ["validate", "-i", "Packs/MyPack"]);

        opts.use_git = true;
        opts.no_backward_comp = true;
        assert_eq!(
            strs(&opts.args()),
            ["validate", "-i", "Packs/MyPack", "-g", "--no-backward-comp"]
        );
    }

    #[test]
    fn test_lint_disables_docker_and_tests() {
        let mut opts = LintOptions::new("Packs/MyPack/Integrations/MyInt");
        assert_eq!(opts.args().len(), 3);

        opts.docker = false;
        opts.test = false;
        let args = opts.args();
        assert_eq!(args[0], "lint");
        assert!(args.contains(&"--no-docker".to_string()));
        assert!(args.contains(&"--no-test".to_string()));
    }

    #[test]
    fn test_generate_docs_output_dir() {
        let mut opts = GenerateDocsOptions::new("a/MyInt.yml");
        assert_eq!(strs(&opts.args()), ["generate-docs", "-i", "a/MyInt.yml", "-f"]);

        opts.output_dir = Some("docs".into());
        assert_eq!(
            strs(&opts.args()),
            ["generate-docs", "-i", "a/MyInt.yml", "-f", "-o", "docs"]
        );
    }

    #[test]
    fn test_generate_unit_tests_output_dir() {
        let mut opts = GenerateUnitTestsOptions::new("a/MyInt.yml");
        assert_eq!(strs(&opts.args()), ["generate-unit-tests", "-i", "a/MyInt.yml"]);

        opts.output_dir = Some("tests".into());
        assert_eq!(&opts.args()[3..], ["-o", "tests"]);
    }

    #[test]
    fn test_upload_insecure() {
        let mut opts = UploadOptions::new("Packs/MyPack");
        assert_eq!(strs(&opts.args()), ["upload", "-i", "Packs/MyPack"]);

        opts.insecure = true;
        assert!(opts.args().contains(&"--insecure".to_string()));
    }

    #[test]
    fn test_content_type_serializes_lowercase() {
        let json = serde_json::to_string(&ContentType::Playbook).unwrap();
        assert_eq!(json, "\"playbook\"");
        assert_eq!(ContentType::Pack.init_flag(), "--pack");
    }
}
