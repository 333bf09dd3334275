use unicode_normalization::UnicodeNormalization;

use super::classify::{Width, classify_width, is_target_consonant, to_fullwidth};

/// Hiragana small tsu, the ATOK gemination marker.
pub const SMALL_TSU: char = 'っ';

/// Length of the case-insensitive repeat of `chars[0]` at the start of `chars`.
fn repeat_len(chars: &[char]) -> usize {
    let Some(first) = chars.first() else {
        return 0;
    };
    chars
        .iter()
        .take_while(|ch| ch.eq_ignore_ascii_case(first))
        .count()
}

/// Rewrites one run of Latin letters into ATOK gemination spelling.
///
/// The run is NFKC-normalized first so that full-width letters compare like
/// their ASCII forms. Every repeat of a target consonant with length `L >= 2`
/// becomes `L - 1` small tsu followed by the last letter of the repeat, which
/// keeps its case. A run that was entirely full-width has its letters widened
/// again afterwards.
///
/// `"kitte"` becomes `"kiっte"`, `"kippp"` becomes `"kiっっp"`.
#[must_use]
pub fn rewrite_run(run: &str) -> String {
    let was_full = classify_width(run) == Width::Full;
    let normalized: Vec<char> = run.nfkc().collect();

    let mut out = String::with_capacity(run.len() + 4);
    let mut i = 0usize;
    while i < normalized.len() {
        let ch = normalized[i];
        if !is_target_consonant(ch) {
            out.push(ch);
            i += 1;
            continue;
        }

        let len = repeat_len(&normalized[i..]);
        if len >= 2 {
            out.extend(std::iter::repeat_n(SMALL_TSU, len - 1));
            out.push(normalized[i + len - 1]);
        } else {
            out.push(ch);
        }
        i += len;
    }

    if was_full { to_fullwidth(&out) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_consonant_becomes_small_tsu() {
        assert_eq!(rewrite_run("kitte"), "kiっte");
        assert_eq!(rewrite_run("gakkou"), "gaっkou");
        assert_eq!(rewrite_run("matcha"), "matcha");
    }

    #[test]
    fn longer_repeats_emit_one_marker_per_extra_letter() {
        assert_eq!(rewrite_run("kippp"), "kiっっp");
        assert_eq!(rewrite_run("ssss"), "っっっs");
    }

    #[test]
    fn repeats_compare_case_insensitively_and_keep_last_case() {
        assert_eq!(rewrite_run("kiTt"), "kiっt");
        assert_eq!(rewrite_run("KITTE"), "KIっTE");
        assert_eq!(rewrite_run("tT"), "っT");
    }

    #[test]
    fn vowels_v_and_n_repeats_pass_through() {
        for run in ["aa", "ii", "uu", "ee", "oo", "vv", "nn", "konnnichiha", "NN"] {
            assert_eq!(rewrite_run(run), run);
        }
    }

    #[test]
    fn apostrophe_breaks_a_repeat() {
        assert_eq!(rewrite_run("t't"), "t't");
        assert_eq!(rewrite_run("it's"), "it's");
    }

    #[test]
    fn full_width_run_keeps_full_width_letters() {
        assert_eq!(rewrite_run("ｋｉｔｔｅ"), "ｋｉっｔｅ");
        assert_eq!(rewrite_run("ＫＩＰＰＰ"), "ＫＩっっＰ");
    }

    #[test]
    fn full_width_apostrophe_is_normalized_to_ascii() {
        assert_eq!(rewrite_run("ｉｔ＇ｓ"), "ｉｔ'ｓ");
        assert_eq!(rewrite_run("＇"), "'");
    }

    #[test]
    fn mixed_width_input_is_treated_as_half_width() {
        assert_eq!(rewrite_run("ｋitte"), "kiっte");
        assert_eq!(rewrite_run("ｔt"), "っt");
    }

    #[test]
    fn empty_run_is_empty() {
        assert_eq!(rewrite_run(""), "");
    }
}
