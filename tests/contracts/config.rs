//! Configuration sources are honored in order: file, env, flags.

use crate::common::*;

/// CONTRACT: A project config file picks the backend and data path.
#[test]
fn contract_project_config_selects_backend() {
    let env = TestEnv::new();
    env.write_file(
        "petfriends.toml",
        "[storage]\nbackend = \"sqlite\"\npath = \"data/shelter.db\"\n",
    );

    let result = env.run(&["list"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("ID: d1"));
    assert!(env.path("data/shelter.db").is_file());
    assert!(!env.path("animals.json").exists());
}

/// CONTRACT: Command-line flags beat the config file.
#[test]
fn contract_flags_override_config_file() {
    let env = TestEnv::new();
    env.write_file("petfriends.toml", "[storage]\nbackend = \"sqlite\"\n");

    let result = env.run(&["--backend", "json", "--data", "flagged.json", "list"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(env.path("flagged.json").is_file());
    assert!(!env.path("animals.db").exists());
}

/// CONTRACT: An unknown backend in the environment is an error, not a fallback.
#[test]
fn contract_invalid_env_backend_fails() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["list"], &[("PETFRIENDS_BACKEND", "floppy")]);

    assert!(!result.success);
    assert!(result.stderr.contains("PETFRIENDS_BACKEND"));
}

/// CONTRACT: Unknown config keys warn but do not stop the program.
#[test]
fn contract_unknown_key_warns() {
    let env = TestEnv::new();
    env.write_file("petfriends.toml", "[storage]\nbakend = \"sqlite\"\n");

    let result = env.run(&["list"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("bakend"));
    assert!(result.stderr.contains("did you mean 'backend'"));
}
