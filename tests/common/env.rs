//! Isolated environment for running the petfriends binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a petfriends CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Temp working directory with its own user config location.
///
/// Every run gets a clean `PETFRIENDS_*` environment so a developer's own
/// settings never leak into the tests.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_petfriends")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run with no stdin.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run with extra environment variables and no stdin.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.root.path(), args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.stdin(Stdio::null()).output().expect("Failed to execute petfriends"))
    }

    /// Run with `input` piped to stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(self.root.path(), args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute petfriends");

        // The process may exit before reading everything.
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(input.as_bytes());
        }

        to_result(child.wait_with_output().expect("Failed to wait for petfriends"))
    }

    fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.path(".config"))
            .env_remove("RUST_LOG")
            .env_remove("PETFRIENDS_BACKEND")
            .env_remove("PETFRIENDS_DATA_PATH")
            .env_remove("PETFRIENDS_LOG_LEVEL")
            .env_remove("PETFRIENDS_SEED");
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
