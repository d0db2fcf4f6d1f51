use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog;
use crate::error::FixError;
use crate::newlines::process_entries;

const BACKUP_SUFFIX: &str = ".bak";

/// Options controlling whether and how a fixed catalog is written.
#[derive(Debug, Clone)]
pub struct FixOptions {
    /// Count changes without writing anything.
    pub dry_run: bool,
    /// Copy the original file to [`backup_path`] before overwriting it.
    pub backup: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            backup: true,
        }
    }
}

/// Outcome of [`process_file`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Number of translated strings that were (or would be) changed.
    pub changed: usize,
    /// Whether the catalog was written back.
    pub written: bool,
    /// Where the original was copied, if a backup was made.
    pub backup: Option<PathBuf>,
}

/// `strings.po` -> `strings.po.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Align the newline padding of every translation in the catalog at `path`.
///
/// Nothing is written unless at least one string changed and `dry_run` is off.
/// The backup is copied before the catalog is overwritten.
pub fn process_file(path: impl AsRef<Path>, options: &FixOptions) -> Result<FixReport, FixError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FixError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut catalog = catalog::load(path)?;
    info!(path = %path.display(), entries = catalog.entries.len(), "loaded catalog");

    let changed = process_entries(&mut catalog.entries);
    let mut report = FixReport {
        changed,
        ..Default::default()
    };

    if changed == 0 || options.dry_run {
        info!(changed, dry_run = options.dry_run, "catalog left untouched");
        return Ok(report);
    }

    if options.backup {
        let backup = backup_path(path);
        std::fs::copy(path, &backup)?;
        info!(backup = %backup.display(), "backed up original");
        report.backup = Some(backup);
    }

    catalog::save(&mut catalog, path)?;
    info!(path = %path.display(), changed, "saved catalog");
    report.written = true;

    Ok(report)
}
