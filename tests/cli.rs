use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const NAV: &str = r#"
[[entry]]
label = "Dashboard"
url = "/admin"

[[entry]]
kind = "section"
label = "Shop"
collapsible = true
collapsed = true

  [[entry.items]]
  label = "Orders"
  url = "/admin/orders"

[[user_menu]]
label = "Profile"
url = "/admin/profile"
"#;

fn run_admin_nav(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_admin-nav"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("failed to execute admin-nav")
}

fn run_ok(args: &[&str]) -> String {
    let output = run_admin_nav(args);
    assert!(
        output.status.success(),
        "admin-nav {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn run_err(args: &[&str]) -> String {
    let output = run_admin_nav(args);
    assert!(
        !output.status.success(),
        "admin-nav {:?} unexpectedly succeeded: {}",
        args,
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_nav(dir: &Path) -> String {
    let path = dir.join("nav.toml");
    fs::write(&path, NAV).expect("write nav.toml");
    path.to_string_lossy().to_string()
}

#[test]
fn state_id_prints_derived_identifier() {
    let out = run_ok(&["state-id", "Tëst Ünïcödé"]);
    assert_eq!(out.trim(), "menu_section_test_unicode");

    let out = run_ok(&["state-id", "Tëst Ünïcödé", "--kind", "group"]);
    assert_eq!(out.trim(), "menu_group_test_unicode");
}

#[test]
fn render_json_includes_menu_and_user_menu() {
    let tmp = tempdir().expect("tempdir");
    let file = write_nav(tmp.path());

    let out = run_ok(&["render", &file, "--user-menu", "--path", "/admin"]);
    let payload: serde_json::Value = serde_json::from_str(&out).expect("json output");
    assert_eq!(payload["menu"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["menu"][1]["stateId"], "menu_section_shop");
    assert_eq!(payload["menu"][1]["collapsed"], true);
    assert_eq!(payload["userMenu"][0]["label"], "Sign out");
    assert_eq!(payload["userMenu"][1]["label"], "Profile");

    let out = run_ok(&["render", &file]);
    let payload: serde_json::Value = serde_json::from_str(&out).expect("json output");
    assert!(payload["userMenu"].is_null());
}

#[test]
fn render_text_prints_tree() {
    let tmp = tempdir().expect("tempdir");
    let file = write_nav(tmp.path());

    let out = run_ok(&["render", &file, "--format", "text", "--user-menu"]);
    assert!(out.contains("• Dashboard /admin"));
    assert!(out.contains("▸ Shop (menu_section_shop)"));
    assert!(out.contains("  • Orders /admin/orders"));
    assert!(out.contains("User menu"));
    assert!(out.contains("• Sign out /logout"));
}

#[test]
fn render_filters_hidden_entries_unless_all() {
    let tmp = tempdir().expect("tempdir");
    let file = write_nav(tmp.path());

    // every entry is visible, so --all changes nothing here
    let filtered = run_ok(&["render", &file, "--attr", "admin=true"]);
    let all = run_ok(&["render", &file, "--attr", "admin=true", "--all"]);
    assert_eq!(filtered, all);
}

#[test]
fn unknown_format_is_invalid_argument() {
    let tmp = tempdir().expect("tempdir");
    let file = write_nav(tmp.path());

    let err = run_err(&["render", &file, "--format", "yaml"]);
    assert!(err.contains("Invalid argument"), "stderr: {err}");
    assert!(err.contains("unknown format 'yaml'"), "stderr: {err}");
}

#[test]
fn malformed_attr_is_invalid_argument() {
    let tmp = tempdir().expect("tempdir");
    let file = write_nav(tmp.path());

    let err = run_err(&["render", &file, "--attr", "oops"]);
    assert!(err.contains("Invalid argument"), "stderr: {err}");
    assert!(err.contains("invalid --attr 'oops': expected key=value"), "stderr: {err}");
}

#[test]
fn missing_file_is_not_found() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("absent.toml");

    let err = run_err(&["render", &missing.to_string_lossy()]);
    assert!(err.contains("Not found"), "stderr: {err}");
}
