//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// A project directory plus one plugin directory
pub struct TestContext {
    pub project: TempDir,
    pub plugin: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            project: tempdir().expect("Failed to create project dir"),
            plugin: tempdir().expect("Failed to create plugin dir"),
        }
    }

    /// Add a file beneath the plugin's `fileTemplates` directory
    pub fn with_bundled(self, relative: &str, body: &str) -> Self {
        write(&self.plugin.path().join("fileTemplates"), relative, body);
        self
    }

    /// Add a user override beneath `.stencil/fileTemplates`
    pub fn with_customized(self, relative: &str, body: &str) -> Self {
        write(&self.project.path().join(".stencil/fileTemplates"), relative, body);
        self
    }

    /// Write `.stencil/config.yaml`
    pub fn with_config(self, yaml: &str) -> Self {
        write(self.project.path(), ".stencil/config.yaml", yaml);
        self
    }

    pub fn plugin_path(&self) -> &Path {
        self.plugin.path()
    }

    pub fn template_root(&self) -> PathBuf {
        self.plugin.path().join("fileTemplates")
    }

    /// A command run in the project with the plugin registered
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--plugin-dir").arg(self.plugin.path());
        cmd
    }

    /// A command run in the project with no plugin registered
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("stencil").expect("Binary not found");
        cmd.current_dir(self.project.path())
            .env_remove("STENCIL_CONFIG")
            .env_remove("STENCIL_PROJECT_DIR")
            .env_remove("RUST_LOG")
            .env("STENCIL_LOCALE", "en_US")
            .arg("--project")
            .arg(self.project.path());
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("Failed to create dir");
    fs::write(path, body).expect("Failed to write file");
}
