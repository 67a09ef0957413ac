use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cosmo-scenes"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cosmology talks"));
}

#[test]
fn test_cli_lists_templates() {
    cli()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("cosmic_dawn"))
        .stdout(predicate::str::contains("default_template (fallback)"));
}

#[test]
fn test_cli_unknown_template_falls_back() {
    cli()
        .arg("template")
        .arg("no_such_palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: default_template"))
        .stderr(predicate::str::contains("unknown template"))
        .stderr(predicate::str::contains("no_such_palette"));
}

#[test]
fn test_cli_user_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("night_sky.toml");
    fs::write(
        &path,
        "background = \"#000000\"\n\n[brane]\nbrane_color = \"#FFD700\"\n",
    )
    .unwrap();

    cli()
        .arg("template")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: night_sky"))
        .stdout(predicate::str::contains("#FFD700"));
}

#[test]
fn test_cli_build_with_override() {
    cli()
        .args(["build", "bubble", "empty", "--set", "brane_color=GREEN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"bubble\""))
        .stdout(predicate::str::contains("#83C167"));
}

#[test]
fn test_cli_build_unknown_kind_fails() {
    cli()
        .args(["build", "wormhole", "empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown component kind 'wormhole'"));
}

#[test]
fn test_cli_animate_chains_actions() {
    cli()
        .args([
            "animate",
            "bubble",
            "energy_discussion",
            "fade_in_bulk",
            "fail_creation",
            "create",
            "expand",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"fail_creation\""))
        .stdout(predicate::str::contains("\"timeline\""))
        .stdout(predicate::str::contains("\"value\": 4.5"));
}

#[test]
fn test_cli_animate_rejects_wrong_variant() {
    cli()
        .args(["animate", "brane_pair", "DB", "show_symmetry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not available"));
}

#[test]
fn test_cli_gallery() {
    cli()
        .arg("gallery")
        .arg("--template")
        .arg("dark_energy")
        .assert()
        .success()
        .stdout(predicate::str::contains("bubble 'GW'"))
        .stdout(predicate::str::contains("plot_tension 'plain'"))
        .stdout(predicate::str::contains("1 assets loaded"));
}
