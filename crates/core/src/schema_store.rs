//! Filesystem-backed schema definition store.
//!
//! Responsibilities:
//! - Search an ordered list of directories for `*.gschema.xml` files.
//! - Extract the ordered `<key name="...">` list of a `<schema id="...">`.
//!
//! Does NOT handle:
//! - Full XML parsing. Schema files are scanned with patterns; anything the
//!   patterns do not recognize is skipped.
//!
//! Invariants:
//! - Directories are searched in order and files within a directory in
//!   lexical order; the first file declaring the schema wins.
//! - Only regular files (or symlinks to them) are read, so FIFOs and device
//!   nodes named `*.gschema.xml` cannot stall a lookup.
//! - Every I/O failure degrades to "not found" and is only logged at debug.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use shortcuts_config::constants::SCHEMA_FILE_SUFFIX;

use crate::order_index::SchemaDefinitionStore;

static SCHEMA_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<schema(\s[^>]*)>").expect("valid schema regex"));

static KEY_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<key(\s[^>]*)>").expect("valid key regex"));

static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)id\s*=\s*["']([^"']*)["']"#).expect("valid id regex")
});

static NAME_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)name\s*=\s*["']([^"']*)["']"#).expect("valid name regex")
});

const SCHEMA_CLOSE: &str = "</schema>";

/// Reads schema definitions from `*.gschema.xml` files on disk.
#[derive(Debug, Clone, Default)]
pub struct FsSchemaStore {
    dirs: Vec<PathBuf>,
}

impl FsSchemaStore {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl SchemaDefinitionStore for FsSchemaStore {
    fn declared_keys(&self, schema_id: &str) -> Vec<String> {
        for dir in &self.dirs {
            for file in schema_files(dir) {
                let text = match fs::read_to_string(&file) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::debug!(path = %file.display(), error = %e, "skipping unreadable schema file");
                        continue;
                    }
                };
                if let Some(keys) = keys_for_schema(&text, schema_id) {
                    tracing::debug!(schema = schema_id, path = %file.display(), "found schema definition");
                    return keys;
                }
            }
        }
        tracing::debug!(schema = schema_id, "no schema definition found");
        Vec::new()
    }
}

/// Regular schema files directly inside `dir`, sorted by file name.
fn schema_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "skipping schema directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(SCHEMA_FILE_SUFFIX))
        })
        .filter(|path| fs::metadata(path).is_ok_and(|meta| meta.is_file()))
        .collect();
    files.sort();
    files
}

/// Ordered key names of `schema_id` in `xml`, or `None` if the document does
/// not declare that schema.
pub(crate) fn keys_for_schema(xml: &str, schema_id: &str) -> Option<Vec<String>> {
    for open in SCHEMA_OPEN_RE.captures_iter(xml) {
        let (Some(tag), Some(attrs)) = (open.get(0), open.get(1)) else {
            continue;
        };
        let declared = ID_ATTR_RE
            .captures(attrs.as_str())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        if declared != Some(schema_id) {
            continue;
        }
        if attrs.as_str().trim_end().ends_with('/') {
            return Some(Vec::new());
        }

        let body_start = tag.end();
        let body_end = xml[body_start..]
            .find(SCHEMA_CLOSE)
            .map_or(xml.len(), |offset| body_start + offset);
        let body = &xml[body_start..body_end];

        let keys = KEY_OPEN_RE
            .captures_iter(body)
            .filter_map(|key| {
                let attrs = key.get(1)?.as_str();
                NAME_ATTR_RE
                    .captures(attrs)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
            })
            .collect();
        return Some(keys);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SHELL_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<schemalist gettext-domain="gnome-shell">
  <schema id="org.gnome.shell.keybindings" path="/org/gnome/shell/keybindings/">
    <key name="focus-active-notification" type="as">
      <default>["&lt;Super&gt;n"]</default>
    </key>
    <key type="as" name="toggle-overview">
      <default>[]</default>
    </key>
    <key name='switch-input-source' type="as">
      <default>["&lt;Super&gt;space"]</default>
    </key>
  </schema>
  <schema id="org.gnome.shell.other">
    <key name="unrelated" type="b"><default>false</default></key>
  </schema>
</schemalist>
"#;

    #[test]
    fn test_keys_in_declaration_order() {
        let keys = keys_for_schema(SHELL_SCHEMA, "org.gnome.shell.keybindings").unwrap();
        assert_eq!(
            keys,
            vec![
                "focus-active-notification",
                "toggle-overview",
                "switch-input-source"
            ]
        );
    }

    #[test]
    fn test_keys_stop_at_schema_close() {
        let keys = keys_for_schema(SHELL_SCHEMA, "org.gnome.shell.other").unwrap();
        assert_eq!(keys, vec!["unrelated"]);
    }

    #[test]
    fn test_undeclared_schema() {
        assert_eq!(keys_for_schema(SHELL_SCHEMA, "org.gnome.shell"), None);
        assert_eq!(keys_for_schema("not xml at all", "org.gnome.shell"), None);
    }

    #[test]
    fn test_truncated_document_reads_to_end() {
        let xml = r#"<schema id="a.b"><key name="one"/><key name="two">"#;
        assert_eq!(keys_for_schema(xml, "a.b").unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(
            first.path().join("a.gschema.xml"),
            r#"<schema id="x.y"><key name="from-first"/></schema>"#,
        )
        .unwrap();
        fs::write(
            second.path().join("a.gschema.xml"),
            r#"<schema id="x.y"><key name="from-second"/></schema>"#,
        )
        .unwrap();

        let store = FsSchemaStore::new(vec![first.path().into(), second.path().into()]);
        assert_eq!(store.declared_keys("x.y"), vec!["from-first"]);
    }

    #[test]
    fn test_ignores_other_files_and_missing_dirs() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("x.y.xml"),
            r#"<schema id="x.y"><key name="wrong-suffix"/></schema>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("z.gschema.xml"),
            r#"<schema id="x.y"><key name="right"/></schema>"#,
        )
        .unwrap();

        let store = FsSchemaStore::new(vec![
            PathBuf::from("/nonexistent/schemas"),
            dir.path().into(),
        ]);
        assert_eq!(store.declared_keys("x.y"), vec!["right"]);
        assert!(store.declared_keys("missing").is_empty());
    }

    #[test]
    fn test_directories_named_like_schemas_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a.gschema.xml")).unwrap();
        fs::write(
            dir.path().join("b.gschema.xml"),
            r#"<schema id="x.y"><key name="real"/></schema>"#,
        )
        .unwrap();

        let store = FsSchemaStore::new(vec![dir.path().into()]);
        assert_eq!(store.declared_keys("x.y"), vec!["real"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_schema_file_does_not_block_lookup() {
        use std::sync::mpsc;
        use std::time::Duration;

        let dir = TempDir::new().unwrap();
        let fifo = dir.path().join("a-stalled.gschema.xml");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());
        fs::write(
            dir.path().join("b-real.gschema.xml"),
            r#"<schema id="x.y"><key name="after-fifo"/></schema>"#,
        )
        .unwrap();

        let store = FsSchemaStore::new(vec![dir.path().into()]);
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(store.declared_keys("x.y"));
        });

        let keys = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("lookup blocked on a FIFO");
        assert_eq!(keys, vec!["after-fifo"]);
    }
}
