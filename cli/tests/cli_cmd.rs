use std::process::Command;

fn run_explainer(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_explainer"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FILE")
        .output()
        .expect("failed to run explainer binary")
}

#[test]
fn cli_help_lists_subcommands() {
    let out = run_explainer(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("explain"));
}

#[test]
fn cli_explain_blank_input_fails_locally() {
    // Port 1 is never listening; validation must stop before any request.
    let out = run_explainer(&["explain", "--url", "http://127.0.0.1:1", "   "]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Please paste some text first."), "stderr: {}", stderr);
}

#[test]
fn cli_explain_unreachable_server_shows_generic_error() {
    let out = run_explainer(&["explain", "--url", "http://127.0.0.1:1", "Hello", "world"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Something went wrong. Please try again."), "stderr: {}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn cli_warns_when_xdg_config_is_broken() {
    let xdg = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(xdg.path().join("explainer")).unwrap();
    std::fs::write(xdg.path().join("explainer").join("config.toml"), "[env\nbroken = ").unwrap();
    let project = tempfile::tempdir().unwrap();
    std::fs::write(project.path().join(".env"), "EXPLAINER_URL=http://127.0.0.1:1\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_explainer"))
        .args(["explain", "   "])
        .current_dir(project.path())
        .env("XDG_CONFIG_HOME", xdg.path())
        .env_remove("EXPLAINER_URL")
        .env_remove("RUST_LOG")
        .env_remove("LOG_FILE")
        .output()
        .expect("failed to run explainer binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("configuration only partly loaded"), "stderr: {}", stderr);
    assert!(stderr.contains("parse xdg toml"), "stderr: {}", stderr);
    assert!(stderr.contains("Please paste some text first."), "stderr: {}", stderr);
}
