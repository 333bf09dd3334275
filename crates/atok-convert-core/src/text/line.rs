use std::ops::Range;

use super::{
    classify::{Width, is_fullwidth_run_char, is_halfwidth_run_char},
    run::rewrite_run,
};

/// Iterator over maximal Latin-letter runs of a string.
///
/// Half-width (`[A-Za-z']`) and full-width (`[Ａ-Ｚａ-ｚ＇]`) alphabets are
/// matched independently, so a run never straddles both widths. Each item is
/// the byte range of the run and the alphabet it was matched in.
#[derive(Clone, Debug)]
pub struct LatinRuns<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for LatinRuns<'_> {
    type Item = (Range<usize>, Width);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let (offset, first) = rest
            .char_indices()
            .find(|&(_, ch)| is_halfwidth_run_char(ch) || is_fullwidth_run_char(ch))?;

        let (width, accepts): (Width, fn(char) -> bool) = if is_halfwidth_run_char(first) {
            (Width::Half, is_halfwidth_run_char)
        } else {
            (Width::Full, is_fullwidth_run_char)
        };

        let start = self.pos + offset;
        let len: usize = self.text[start..]
            .chars()
            .take_while(|&ch| accepts(ch))
            .map(char::len_utf8)
            .sum();
        let end = start + len;

        self.pos = end;
        Some((start..end, width))
    }
}

/// Returns the Latin-letter runs of `text`, left to right.
#[must_use]
pub fn latin_runs(text: &str) -> LatinRuns<'_> {
    LatinRuns { text, pos: 0 }
}

/// Converts the first tab-separated field of a line and keeps the rest verbatim.
///
/// Lines without a tab are not dictionary entries and are returned unchanged.
/// Inside the first field only Latin runs are rewritten; kana, kanji, digits
/// and punctuation between runs are copied as is.
#[must_use]
pub fn convert_first_field(line: &str) -> String {
    let Some((first, rest)) = line.split_once('\t') else {
        return line.to_owned();
    };

    let mut out = String::with_capacity(line.len() + 8);
    let mut copied = 0usize;
    for (range, _) in latin_runs(first) {
        out.push_str(&first[copied..range.start]);
        out.push_str(&rewrite_run(&first[range.clone()]));
        copied = range.end;
    }
    out.push_str(&first[copied..]);

    out.push('\t');
    out.push_str(rest);
    out
}
