//! Gettext PO catalogs, read and written with `polib`.
//!
//! [`load`] maps every `polib` message to an [`Entry`] the normalizer can
//! edit; [`save`] copies the edited translations back into the `polib`
//! catalog by position and writes it. Obsolete `#~` paragraphs never reach
//! `polib`: they are set aside on load and appended unchanged on save.

mod obsolete;

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::Path;

use polib::catalog::Catalog as PoCatalog;
use polib::message::{MessageMutView, MessageView};
use polib::po_file;

use crate::error::FixError;

/// One message of a catalog with its translation(s).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub msgctxt: Option<String>,
    /// Source text.
    pub msgid: String,
    pub msgid_plural: Option<String>,
    /// Singular translation. `None` for plural messages.
    pub msgstr: Option<String>,
    /// Plural translations by index (`msgstr[N]`).
    pub msgstr_plural: BTreeMap<u32, String>,
    /// Entry was commented out with `#~`.
    pub obsolete: bool,
}

impl Entry {
    pub fn new(msgid: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            ..Default::default()
        }
    }

    /// The header entry carries catalog metadata in its `msgstr`.
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty() && self.msgctxt.is_none()
    }
}

/// A loaded catalog: the editable entries plus what is needed to write it back.
pub struct Catalog {
    /// Live messages, in file order.
    pub entries: Vec<Entry>,
    inner: PoCatalog,
    obsolete: Vec<String>,
}

impl Catalog {
    /// Obsolete paragraphs, verbatim, in file order.
    pub fn obsolete_blocks(&self) -> &[String] {
        &self.obsolete
    }

    /// Copy the entries' translations into the `polib` catalog.
    fn sync(&mut self) -> Result<(), FixError> {
        let live = self.entries.iter().filter(|e| !e.obsolete);
        for (mut message, entry) in self.inner.messages_mut().zip(live) {
            let stored = if message.is_plural() {
                let forms: Vec<String> = entry.msgstr_plural.values().cloned().collect();
                message.msgstr_plural_mut().map(|slot| *slot = forms).is_ok()
            } else {
                match &entry.msgstr {
                    Some(msgstr) => message.set_msgstr(msgstr.clone()).is_ok(),
                    None => true,
                }
            };
            if !stored {
                return Err(FixError::FormMismatch {
                    msgid: entry.msgid.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries)
            .field("obsolete", &self.obsolete)
            .finish_non_exhaustive()
    }
}

/// Read and parse the catalog at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, FixError> {
    let path = path.as_ref();
    let text = String::from_utf8(std::fs::read(path)?)?;
    let (live, obsolete) = obsolete::split_obsolete(&text);

    let inner = if obsolete.is_empty() {
        parse_po(path)?
    } else {
        let scratch = tempfile::Builder::new().suffix(".po").tempfile()?;
        std::fs::write(scratch.path(), live)?;
        parse_po(scratch.path())?
    };

    let entries = inner
        .messages()
        .map(|message| {
            let msgctxt = Some(message.msgctxt())
                .filter(|ctx| !ctx.is_empty())
                .map(str::to_string);
            if message.is_plural() {
                let msgstr_plural: BTreeMap<u32, String> = message
                    .msgstr_plural()
                    .map(|forms| {
                        forms
                            .iter()
                            .enumerate()
                            .map(|(i, form)| (i as u32, form.clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                Entry {
                    msgctxt,
                    msgid: message.msgid().to_string(),
                    msgid_plural: message.msgid_plural().ok().map(str::to_string),
                    msgstr_plural,
                    ..Default::default()
                }
            } else {
                Entry {
                    msgctxt,
                    msgid: message.msgid().to_string(),
                    msgstr: message.msgstr().ok().map(str::to_string),
                    ..Default::default()
                }
            }
        })
        .collect();

    Ok(Catalog {
        entries,
        inner,
        obsolete,
    })
}

fn parse_po(path: &Path) -> Result<PoCatalog, FixError> {
    po_file::parse(path).map_err(|e| FixError::MalformedCatalog {
        reason: e.to_string(),
    })
}

/// Write `catalog` to `path`, replacing the file.
pub fn save(catalog: &mut Catalog, path: impl AsRef<Path>) -> Result<(), FixError> {
    let path = path.as_ref();
    catalog.sync()?;
    po_file::write(&catalog.inner, path)?;

    if !catalog.obsolete.is_empty() {
        let mut file = std::fs::OpenOptions::new().append(true).open(path)?;
        for block in &catalog.obsolete {
            file.write_all(b"\n")?;
            file.write_all(block.as_bytes())?;
        }
    }
    Ok(())
}
