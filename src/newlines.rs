//! Newline padding normalization.
//!
//! A translation is "aligned" when its run of leading `\n` and its run of
//! trailing `\n` have the same lengths as in the entry's `msgid`. Only the
//! edges are touched; interior newlines are content.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::catalog::Entry;

const NEWLINE: char = '\n';

/// Number of consecutive `\n` at the start of `s`.
pub fn count_leading(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b'\n').count()
}

/// Number of consecutive `\n` at the end of `s`.
///
/// For a string made only of newlines this is its full length, the same as
/// [`count_leading`].
pub fn count_trailing(s: &str) -> usize {
    s.bytes().rev().take_while(|&b| b == b'\n').count()
}

/// Strip every leading and trailing `\n` from `text`, then pad it with
/// exactly `lead` and `trail` newlines.
pub fn adjust_newlines(text: &str, lead: usize, trail: usize) -> String {
    let core = text.trim_matches(NEWLINE);
    let mut out = String::with_capacity(lead + core.len() + trail);
    out.extend(std::iter::repeat_n(NEWLINE, lead));
    out.push_str(core);
    out.extend(std::iter::repeat_n(NEWLINE, trail));
    out
}

/// Align `candidate` to the reference counts.
///
/// Absent stays absent. A candidate that already has the reference counts is
/// returned borrowed.
pub fn fix_one(
    candidate: Option<&str>,
    lead_ref: usize,
    trail_ref: usize,
) -> Option<Cow<'_, str>> {
    let candidate = candidate?;
    if count_leading(candidate) == lead_ref && count_trailing(candidate) == trail_ref {
        return Some(Cow::Borrowed(candidate));
    }
    Some(Cow::Owned(adjust_newlines(candidate, lead_ref, trail_ref)))
}

/// Which translated string of an entry was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    Singular,
    Plural(u32),
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringKind::Singular => f.write_str("msgstr"),
            StringKind::Plural(index) => write!(f, "msgstr[{index}]"),
        }
    }
}

/// A single translated string replaced by [`process_entries_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<'a> {
    pub msgid: &'a str,
    pub kind: StringKind,
    pub before: &'a str,
    pub after: &'a str,
}

/// Align every translation of every live entry; returns how many strings changed.
pub fn process_entries(entries: &mut [Entry]) -> usize {
    process_entries_with(entries, |_| {})
}

/// Like [`process_entries`], calling `on_change` for each replaced string
/// before it is replaced.
///
/// Obsolete entries and the header are skipped. An empty singular `msgstr`
/// is untranslated and left alone; every plural form is aligned.
pub fn process_entries_with<F>(entries: &mut [Entry], mut on_change: F) -> usize
where
    F: FnMut(&Change<'_>),
{
    let mut changed = 0;

    for entry in entries.iter_mut() {
        if entry.obsolete || entry.is_header() {
            continue;
        }

        let lead_ref = count_leading(&entry.msgid);
        let trail_ref = count_trailing(&entry.msgid);
        let msgid = entry.msgid.as_str();

        if let Some(msgstr) = entry.msgstr.as_mut().filter(|s| !s.is_empty())
            && let Some(fixed) = replacement(msgstr, lead_ref, trail_ref)
        {
            let change = Change {
                msgid,
                kind: StringKind::Singular,
                before: msgstr.as_str(),
                after: &fixed,
            };
            debug!(
                msgid,
                kind = %change.kind,
                before = ?change.before,
                after = ?change.after,
                "aligned newlines"
            );
            on_change(&change);
            *msgstr = fixed;
            changed += 1;
        }

        for (&index, text) in entry.msgstr_plural.iter_mut() {
            let Some(fixed) = replacement(text, lead_ref, trail_ref) else {
                continue;
            };
            let change = Change {
                msgid,
                kind: StringKind::Plural(index),
                before: text.as_str(),
                after: &fixed,
            };
            debug!(
                msgid,
                kind = %change.kind,
                before = ?change.before,
                after = ?change.after,
                "aligned newlines"
            );
            on_change(&change);
            *text = fixed;
            changed += 1;
        }
    }

    changed
}

/// The aligned string, or `None` when alignment leaves `current` as it is.
fn replacement(current: &str, lead_ref: usize, trail_ref: usize) -> Option<String> {
    match fix_one(Some(current), lead_ref, trail_ref)? {
        Cow::Borrowed(_) => None,
        Cow::Owned(fixed) if fixed == current => None,
        Cow::Owned(fixed) => Some(fixed),
    }
}
