//! Obsolete (`#~`) entries.
//!
//! These are kept out of the live catalog and carried through a save
//! verbatim, so a fix never touches or drops them.

/// Split PO text into the live part and its obsolete paragraphs.
///
/// A paragraph is a run of non-blank lines. It is obsolete when every line is
/// a comment and at least one starts with `#~`. Each returned paragraph ends
/// with a newline.
pub(crate) fn split_obsolete(text: &str) -> (String, Vec<String>) {
    let mut live = String::with_capacity(text.len());
    let mut obsolete = Vec::new();
    let mut paragraph = String::new();

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            flush(&mut paragraph, &mut live, &mut obsolete);
            live.push_str(line);
        } else {
            paragraph.push_str(line);
        }
    }
    flush(&mut paragraph, &mut live, &mut obsolete);

    (live, obsolete)
}

fn flush(paragraph: &mut String, live: &mut String, obsolete: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    let mut block = std::mem::take(paragraph);
    if is_obsolete(&block) {
        if !block.ends_with('\n') {
            block.push('\n');
        }
        obsolete.push(block);
    } else {
        live.push_str(&block);
    }
}

fn is_obsolete(block: &str) -> bool {
    let mut seen = false;
    for line in block.lines() {
        let line = line.trim_start();
        if !line.starts_with('#') {
            return false;
        }
        seen |= line.starts_with("#~");
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_obsolete_paragraphs() {
        let text = "msgid \"a\"\nmsgstr \"A\"\n";
        let (live, obsolete) = split_obsolete(text);
        assert_eq!(live, text);
        assert!(obsolete.is_empty());
    }

    #[test]
    fn test_obsolete_paragraph_moved_out() {
        let text = "msgid \"a\"\nmsgstr \"A\"\n\n# old one\n#~ msgid \"b\"\n#~ msgstr \"B\"\n";
        let (live, obsolete) = split_obsolete(text);
        assert_eq!(live, "msgid \"a\"\nmsgstr \"A\"\n\n");
        assert_eq!(obsolete, vec!["# old one\n#~ msgid \"b\"\n#~ msgstr \"B\"\n"]);
    }

    #[test]
    fn test_comment_only_paragraph_stays_live() {
        let text = "# Copyright\n\nmsgid \"a\"\nmsgstr \"A\"\n";
        let (live, obsolete) = split_obsolete(text);
        assert_eq!(live, text);
        assert!(obsolete.is_empty());
    }

    #[test]
    fn test_last_obsolete_paragraph_without_final_newline() {
        let (live, obsolete) = split_obsolete("msgid \"a\"\nmsgstr \"A\"\n\n#~ msgid \"b\"");
        assert_eq!(live, "msgid \"a\"\nmsgstr \"A\"\n\n");
        assert_eq!(obsolete, vec!["#~ msgid \"b\"\n"]);
    }

    #[test]
    fn test_crlf_blank_lines_separate_paragraphs() {
        let (live, obsolete) = split_obsolete("msgid \"a\"\r\nmsgstr \"A\"\r\n\r\n#~ msgid \"b\"\r\n");
        assert_eq!(live, "msgid \"a\"\r\nmsgstr \"A\"\r\n\r\n");
        assert_eq!(obsolete, vec!["#~ msgid \"b\"\r\n"]);
    }
}
