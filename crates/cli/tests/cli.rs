use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_file(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, body).expect("write file");
}

fn write_catalog(dir: &Path) {
    write_file(
        &dir.join("summaries/gpt.json"),
        r#"{"episode_id": "adam-frank", "abstract": "Alien **civilizations**.", "keywords": ["aliens", "SETI"]}"#,
    );
    write_file(
        &dir.join("summaries/llama.json"),
        r#"{"episode_id": "adam-frank", "abstract": "Life in the universe.", "keywords": ["aliens", "biosignatures"]}"#,
    );
    write_file(&dir.join("transcripts/adam.txt"), "Lex: Welcome back.");
    write_file(
        &dir.join("catalog.toml"),
        r#"
[[episode]]
title = "Adam Frank: Alien Civilizations"
host = "Lex Fridman"
date = "2024-12-23"
duration = "3h 26m"
transcript = "transcripts/adam.txt"

[[episode.summary]]
model = "GPT-3.5"
file = "summaries/gpt.json"

[[episode.summary]]
model = "Llama3-8B"
file = "summaries/llama.json"

[[episode]]
id = "notes-only"
title = "Hand notes"

[[episode.summary]]
model = "Notes"
text = "Plain summary."
"#,
    );
}

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_podview"))
        .args(args)
        .env("HOME", home)
        .env_remove("PODVIEW_LOG")
        .output()
        .expect("run podview")
}

#[test]
fn help_lists_subcommands() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = run(home.path(), &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["tui", "list", "show", "--catalog", "--config"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn list_prints_episodes_in_manifest_order() {
    let home = tempfile::tempdir().expect("tempdir");
    write_catalog(home.path());
    let catalog = home.path().join("catalog.toml");
    let output = run(home.path(), &["--catalog", catalog.to_str().unwrap(), "list", "--json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let rows: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(rows[0]["id"], "adam-frank");
    assert_eq!(rows[0]["tags"], serde_json::json!(["aliens", "SETI", "biosignatures"]));
    assert_eq!(rows[1]["id"], "notes-only");
    assert_eq!(rows[1]["models"], serde_json::json!(["Notes"]));
}

#[test]
fn show_renders_selected_model_and_transcript() {
    let home = tempfile::tempdir().expect("tempdir");
    write_catalog(home.path());
    let catalog = home.path().join("catalog.toml");
    let output = run(
        home.path(),
        &[
            "show",
            "adam-frank",
            "--catalog",
            catalog.to_str().unwrap(),
            "--model",
            "Llama3-8B",
            "--transcript",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Date: 2024-12-23  Duration: 3h 26m"));
    assert!(stdout.contains("Models: GPT-3.5 [Llama3-8B]"));
    assert!(stdout.contains("Life in the universe."));
    assert!(stdout.contains("#biosignatures"));
    assert!(stdout.contains("TRANSCRIPT\nLex: Welcome back."));
}

#[test]
fn catalog_path_comes_from_config() {
    let home = tempfile::tempdir().expect("tempdir");
    write_catalog(home.path());
    let catalog = home.path().join("catalog.toml");
    write_file(
        &home.path().join(".config/podview/podview.toml"),
        &format!("[catalog]\npath = {:?}\n", catalog.to_str().unwrap()),
    );
    let output = run(home.path(), &["show", "notes-only"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Plain summary."));
}

#[test]
fn missing_catalog_exits_with_error() {
    let home = tempfile::tempdir().expect("tempdir");
    let missing = home.path().join("absent.toml");
    let output = run(home.path(), &["--catalog", missing.to_str().unwrap(), "list"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: loading catalog"));
}

#[test]
fn unknown_episode_exits_with_error() {
    let home = tempfile::tempdir().expect("tempdir");
    write_catalog(home.path());
    let catalog = home.path().join("catalog.toml");
    let output = run(home.path(), &["--catalog", catalog.to_str().unwrap(), "show", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("episode 'ghost' not found"));
}

#[test]
fn broken_default_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().expect("tempdir");
    write_catalog(home.path());
    write_file(
        &home.path().join(".config/podview/podview.toml"),
        "[display\nkeyword_limit = ",
    );
    let catalog = home.path().join("catalog.toml");
    let output = run(home.path(), &["--catalog", catalog.to_str().unwrap(), "list"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("adam-frank"));
}
