use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Stdio;
use tempfile::tempdir;

/// A command isolated from the host's CI variables and user settings.
fn spellconf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spellconf").unwrap();
    cmd.current_dir(dir)
        .env_remove("GITHUB_WORKSPACE")
        .env_remove("CI_PROJECT_DIR")
        .env_remove("SPELLCONF_PRESET")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

#[test]
fn resolves_github_workspace() {
    let dir = tempdir().unwrap();
    spellconf(dir.path())
        .env("GITHUB_WORKSPACE", "/home/runner/work/repo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"path\": \"/home/runner/work/repo/.github/etc/dictionary.txt\"",
        ));
}

#[test]
fn local_preset_falls_back_to_current_directory() {
    let dir = tempdir().unwrap();
    let output = spellconf(dir.path())
        .arg("resolve")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["dictionaryDefinitions"][0]["path"],
        "./.github/etc/dictionary.txt"
    );
    assert_eq!(json["minWordLength"], 4);
}

#[test]
fn multi_ci_uses_gitlab_then_fallback() {
    let dir = tempdir().unwrap();
    spellconf(dir.path())
        .args(["--preset", "multi-ci", "resolve", "--format", "text"])
        .env("CI_PROJECT_DIR", "/builds/group/repo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "per-repository dictionary -> /builds/group/repo/.github/etc/dictionary.txt",
        ))
        .stdout(predicate::str::contains("/--ssid-whitelist/"));

    spellconf(dir.path())
        .args(["resolve", "--format", "text"])
        .env("SPELLCONF_PRESET", "multi-ci")
        .assert()
        .success()
        .stdout(predicate::str::contains("/goat/.github/etc/dictionary.txt"));
}

#[test]
fn local_settings_file_extends_preset() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".spellconf.toml"),
        "preset = \"container\"\nflag_words = [\"sanity\"]\n",
    )
    .unwrap();

    spellconf(dir.path())
        .args(["resolve", "-o", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/goat/.github/etc/dictionary.txt"))
        .stdout(predicate::str::contains("whitelisting, sanity"));
}

#[test]
fn writes_output_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("cspell.json");

    spellconf(dir.path())
        .args(["resolve", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\"flagWords\""));
}

#[test]
fn verify_fails_on_missing_dictionaries() {
    let dir = tempdir().unwrap();
    spellconf(dir.path())
        .args(["--no-color", "verify"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error per-repository dictionary"));

    spellconf(dir.path())
        .args(["verify", "--no-fail"])
        .assert()
        .success();
}

#[test]
fn verify_passes_with_dictionaries_present() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".github/etc")).unwrap();
    fs::write(dir.path().join(".github/etc/dictionary.txt"), "spellconf\n").unwrap();
    fs::write(dir.path().join("seiso_global_dictionary.txt"), "seiso\n").unwrap();

    spellconf(dir.path())
        .args(["--no-color", "verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration verified"));
}

#[test]
fn bad_settings_file_is_reported() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("broken.toml");
    fs::write(&settings, "min_word_length = \"four\"\n").unwrap();

    spellconf(dir.path())
        .arg("--config")
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn lists_presets() {
    let dir = tempdir().unwrap();
    spellconf(dir.path())
        .args(["--no-color", "presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local"))
        .stdout(predicate::str::contains("$GITHUB_WORKSPACE → $CI_PROJECT_DIR → /goat"));
}

#[test]
fn closed_stdout_is_not_a_panic() {
    let dir = tempdir().unwrap();
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("spellconf"))
        .current_dir(dir.path())
        .env_remove("GITHUB_WORKSPACE")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{}", stderr);
    assert!(!stderr.contains("panicked"), "{}", stderr);
}
