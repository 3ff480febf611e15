//! End-to-end tests for the shortcut listing.

mod common;

use common::shortcuts_cmd;
use predicates::prelude::*;

fn table_row(shortcut: &str, application: &str, action: &str) -> String {
    format!("{:<28} {:<28} {}", shortcut, application, action)
}

#[test]
fn test_empty_dump_prints_static_table() {
    let output = shortcuts_cmd()
        .args(["--layout", "pc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    let separator = "─".repeat(100);
    assert_eq!(
        lines,
        vec![
            separator.as_str(),
            table_row("Shortcut", "Application", "Action").as_str(),
            separator.as_str(),
            table_row("Win", "Window Manager", "Show Activities / Search").as_str(),
            table_row("Win + Left", "Window Manager", "Tile Window Left").as_str(),
            table_row("Win + Right", "Window Manager", "Tile Window Right").as_str(),
            table_row("Win + Up", "Window Manager", "Maximise Window").as_str(),
            table_row("Win + Down", "Window Manager", "Restore / Minimise Window").as_str(),
            separator.as_str(),
        ]
    );
}

#[test]
fn test_layout_from_environment() {
    shortcuts_cmd()
        .env("KEY_LAYOUT", "mac")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command + Left"))
        .stdout(predicate::str::contains("Win +").not());
}

#[test]
fn test_flag_overrides_environment_layout() {
    shortcuts_cmd()
        .env("KEY_LAYOUT", "apple")
        .args(["--layout", "chrome"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search + Up"));
}

#[test]
fn test_json_output() {
    let output = shortcuts_cmd()
        .args(["--layout", "pc", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = parsed.as_array().unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["accelerator"], "Win");
    assert_eq!(records[0]["origin"], "static");
    assert_eq!(records[4]["action"], "Restore / Minimise Window");
}

#[test]
fn test_logs_stay_off_stdout() {
    shortcuts_cmd()
        .env("RUST_LOG", "debug")
        .args(["--layout", "pc", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("settings dump unavailable"));
}

#[cfg(unix)]
#[test]
fn test_dump_and_schemas_drive_the_table() {
    let dir = tempfile::TempDir::new().unwrap();
    let dump = "\
org.gnome.desktop.wm.keybindings minimize ['<Super>h']
org.gnome.desktop.wm.keybindings close ['<Alt>F4']
org.gnome.desktop.wm.keybindings unmaximize ['<Super>Down']
org.gnome.shell.keybindings toggle-overview ['<Super>s']
org.gnome.settings-daemon.plugins.media-keys play ['XF86AudioPlay']
org.example.editor.keybindings quit ['<Primary>q', '<Super>h']
org.gnome.settings-daemon.plugins.media-keys.custom-keybinding:/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/custom0/ binding '<Super>Return'
org.gnome.settings-daemon.plugins.media-keys.custom-keybinding:/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/custom0/ command 'gnome-terminal --wait'
org.gnome.settings-daemon.plugins.media-keys.custom-keybinding:/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/custom0/ name 'open_terminal'
";
    let script = common::fake_gsettings(dir.path(), dump);

    let schemas = dir.path().join("schemas");
    std::fs::create_dir(&schemas).unwrap();
    std::fs::write(
        schemas.join("org.gnome.desktop.wm.keybindings.gschema.xml"),
        r#"<schemalist>
  <schema id="org.gnome.desktop.wm.keybindings">
    <key name="close" type="as"/>
    <key name="minimize" type="as"/>
    <key name="unmaximize" type="as"/>
  </schema>
</schemalist>
"#,
    )
    .unwrap();

    let output = shortcuts_cmd()
        .env("SHORTCUTS_GSETTINGS_BIN", &script)
        .args(["--layout", "pc", "--schema-dir"])
        .arg(&schemas)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let rows: Vec<&str> = stdout.lines().skip(3).collect();

    assert_eq!(
        rows,
        vec![
            table_row("Win", "Window Manager", "Show Activities / Search").as_str(),
            table_row("Win + Left", "Window Manager", "Tile Window Left").as_str(),
            table_row("Win + Right", "Window Manager", "Tile Window Right").as_str(),
            table_row("Win + Up", "Window Manager", "Maximise Window").as_str(),
            table_row("Win + Down", "Window Manager", "Restore / Minimise Window").as_str(),
            table_row("Alt + F4", "Window Manager", "Close").as_str(),
            table_row("Win + H", "Window Manager", "Minimize").as_str(),
            table_row("Win + S", "GNOME Shell", "Toggle Overview").as_str(),
            table_row("Ctrl + Q", "Editor", "Quit").as_str(),
            table_row("Win + Return", "Gnome Terminal", "Open Terminal").as_str(),
            "─".repeat(100).as_str(),
        ]
    );
}
