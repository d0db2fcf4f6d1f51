use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HEADER: &str = "msgid \"\"\n\
    msgstr \"\"\n\
    \"Language: fr\\n\"\n\
    \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
    \"Plural-Forms: nplurals=2; plural=(n > 1);\\n\"\n\n";

/// Copy a fixture into a fresh temp directory so tests can overwrite it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn scratch_copy(fixture: &str, file_name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    std::fs::copy(Path::new("tests/fixtures").join(fixture), &path).unwrap();
    (dir, path)
}

/// Write `body` after a French header as `strings.po` in a fresh temp directory.
pub fn scratch_catalog(body: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strings.po");
    std::fs::write(&path, format!("{HEADER}{body}")).unwrap();
    (dir, path)
}

pub fn fixture_bytes(relative: &str) -> Vec<u8> {
    std::fs::read(Path::new("tests/fixtures").join(relative)).unwrap()
}
