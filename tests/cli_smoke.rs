use std::{path::Path, process::Command};

fn run(exe: &str, root: &Path, extra: &[&str]) -> std::process::Output {
    Command::new(exe)
        .arg("--root")
        .arg(root)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn audio_binary_writes_effects() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(env!("CARGO_BIN_EXE_make_test_audio"), dir.path(), &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Created assets/audio/swap.wav, match.wav, ambient.wav"));
    assert!(dir.path().join("assets/audio/ambient.wav").is_file());
}

#[test]
fn audio_binary_dumps_params_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(
        env!("CARGO_BIN_EXE_make_test_audio"),
        dir.path(),
        &["--dump-params"],
    );

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"file_name\": \"swap.wav\""), "{stdout}");
}

#[test]
fn fishing_binary_reports_failure_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(env!("CARGO_BIN_EXE_make_fishing_icon"), dir.path(), &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Error creating icon:"), "{stdout}");
    assert!(!dir.path().join("assets/images/fishing_app_icon.png").exists());
}

#[test]
fn app_binary_fails_on_missing_sprites() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(env!("CARGO_BIN_EXE_make_app_icon"), dir.path(), &[]);

    assert!(!out.status.success());
    assert!(!dir.path().join("assets/images/app_icon.png").exists());
}
