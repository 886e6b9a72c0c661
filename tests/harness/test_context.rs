//! Shared testing harness for `nodecfg` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::templates;

/// Testing harness providing an isolated work directory with templates.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with the full template set in `work/templates`.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        ctx.write_template("config-logging.properties", templates::LOGGING);
        ctx.write_template("config-extensions.properties", &templates::extensions());
        ctx.write_template("config-node.properties", templates::NODE);
        for name in templates::SIMPLE_NAMES {
            ctx.write_template(&format!("config-{name}.properties"), &templates::simple(name));
        }
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn template_dir(&self) -> PathBuf {
        self.work_dir.join("templates")
    }

    pub(crate) fn build_dir(&self) -> PathBuf {
        self.work_dir.join("_build")
    }

    /// Build a command for invoking the compiled `nodecfg` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nodecfg").expect("Failed to locate nodecfg binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    pub(crate) fn write_template(&self, name: &str, content: &str) {
        let dir = self.template_dir();
        fs::create_dir_all(&dir).expect("Failed to create template directory");
        fs::write(dir.join(name), content).expect("Failed to write template");
    }

    pub(crate) fn remove_template(&self, name: &str) {
        fs::remove_file(self.template_dir().join(name)).expect("Failed to remove template");
    }

    /// Read a generated file from `_build/<topology>/<name>`.
    pub(crate) fn read_output(&self, topology: &str, name: &str) -> String {
        let path = self.build_dir().join(topology).join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err))
    }

    pub(crate) fn output_exists(&self, topology: &str, name: &str) -> bool {
        self.build_dir().join(topology).join(name).exists()
    }

    /// Sorted file names under `_build/<topology>`.
    pub(crate) fn output_names(&self, topology: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.build_dir().join(topology))
            .expect("Failed to list topology directory")
            .map(|entry| entry.expect("bad dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Value of the first `key = value` line in a generated file.
    pub(crate) fn property(&self, topology: &str, name: &str, key: &str) -> Option<String> {
        let prefix = format!("{key} = ");
        self.read_output(topology, name)
            .lines()
            .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }

    pub(crate) fn assert_build_tree_exists(&self) {
        for topology in ["peer", "api", "dual"] {
            assert!(
                self.build_dir().join(topology).is_dir(),
                "{topology} directory should exist"
            );
        }
    }
}
