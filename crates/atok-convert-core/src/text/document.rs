use std::fmt;

use super::line::convert_first_field;

/// Separator used to join converted lines and diff entries.
pub const LINE_SEPARATOR: &str = "\n";

/// One line whose first field was rewritten.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineChange {
    /// 1-based line number in the source document.
    pub index: usize,
    pub original: String,
    pub converted: String,
}

impl fmt::Display for LineChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}  ⇒  {}", self.index, self.original, self.converted)
    }
}

/// Output of [`convert_document`].
///
/// `changed_lines`, `changes.len()` and the number of entries in
/// `diff_report` are always equal.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConversionResult {
    /// Converted lines joined with [`LINE_SEPARATOR`].
    pub text: String,
    pub changed_lines: usize,
    /// Number of lines in the source document.
    pub total_lines: usize,
    /// One `[index] original  ⇒  converted` entry per changed line.
    pub diff_report: String,
    pub changes: Vec<LineChange>,
}

const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` into lines without their terminators.
///
/// `\r\n` counts as a single break. A break at the very end of the text does
/// not open a new empty line, so `"a\nb\n"` has two lines and `""` has none.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..i]);

        let mut end = i + ch.len_utf8();
        if ch == '\r'
            && let Some(&(_, '\n')) = chars.peek()
        {
            chars.next();
            end += 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Converts every line of a document and collects a diff of the changed ones.
///
/// Lines are compared after conversion; only lines whose first TSV field
/// actually changed show up in the report, in ascending line order.
#[must_use]
pub fn convert_document(text: &str) -> ConversionResult {
    let lines = split_lines(text);

    let mut converted_lines = Vec::with_capacity(lines.len());
    let mut changes = Vec::new();
    for (i, &line) in lines.iter().enumerate() {
        let converted = convert_first_field(line);
        if converted != line {
            changes.push(LineChange {
                index: i + 1,
                original: line.to_owned(),
                converted: converted.clone(),
            });
        }
        converted_lines.push(converted);
    }

    let diff_report = changes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR);

    ConversionResult {
        text: converted_lines.join(LINE_SEPARATOR),
        changed_lines: changes.len(),
        total_lines: lines.len(),
        diff_report,
        changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_example() {
        let result = convert_document("kitte\tfoo\nbar\n");
        assert_eq!(result.text, "kiっte\tfoo\nbar");
        assert_eq!(result.changed_lines, 1);
        assert_eq!(result.total_lines, 2);
        assert_eq!(result.diff_report, "[1] kitte\tfoo  ⇒  kiっte\tfoo");
    }

    #[test]
    fn empty_document() {
        let result = convert_document("");
        assert_eq!(result.text, "");
        assert_eq!(result.changed_lines, 0);
        assert_eq!(result.total_lines, 0);
        assert_eq!(result.diff_report, "");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn split_lines_recognises_all_breaks() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\u{2028}b\u{85}c\u{0C}d"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("\r\n\r\n"), vec!["", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn crlf_input_is_rejoined_with_lf() {
        let result = convert_document("motto\tもっと\r\nkitte\t切手\r\n");
        assert_eq!(result.text, "moっto\tもっと\nkiっte\t切手");
        assert_eq!(result.changed_lines, 2);
    }

    #[test]
    fn diff_entries_follow_line_order() {
        let doc = "a\tx\nkitte\tx\nplain\nzasshi\tx\nnn\tx";
        let result = convert_document(doc);

        assert_eq!(result.changed_lines, 2);
        assert_eq!(
            result.changes.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(
            result.diff_report,
            "[2] kitte\tx  ⇒  kiっte\tx\n[4] zasshi\tx  ⇒  zaっshi\tx"
        );
    }

    #[test]
    fn unchanged_document_has_empty_report() {
        let result = convert_document("kitte\nこんにちは\tkonnnichiha\n");
        assert_eq!(result.changed_lines, 0);
        assert_eq!(result.diff_report, "");
        assert_eq!(result.text, "kitte\nこんにちは\tkonnnichiha");
    }
}
