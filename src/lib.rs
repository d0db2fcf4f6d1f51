pub mod catalog;
pub mod error;
pub mod fix;
pub mod newlines;

pub use catalog::{Catalog, Entry};
pub use error::FixError;
pub use fix::{FixOptions, FixReport, backup_path, process_file};
pub use newlines::{
    Change, StringKind, adjust_newlines, count_leading, count_trailing, fix_one, process_entries,
    process_entries_with,
};
