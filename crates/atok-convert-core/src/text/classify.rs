/// Width class of a run of Latin letters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Width {
    Half,
    Full,
}

/// Distance between an ASCII letter and its full-width form (`a` -> `ａ`).
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Full-width apostrophe, accepted inside full-width runs.
pub const FULLWIDTH_APOSTROPHE: char = '＇';

const fn is_halfwidth_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

const fn is_fullwidth_letter(ch: char) -> bool {
    matches!(ch, 'Ａ'..='Ｚ' | 'ａ'..='ｚ')
}

/// Characters a half-width run may contain: `A`-`Z`, `a`-`z` and `'`.
#[must_use]
pub const fn is_halfwidth_run_char(ch: char) -> bool {
    is_halfwidth_letter(ch) || ch == '\''
}

/// Characters a full-width run may contain: `Ａ`-`Ｚ`, `ａ`-`ｚ` and `＇`.
#[must_use]
pub const fn is_fullwidth_run_char(ch: char) -> bool {
    is_fullwidth_letter(ch) || ch == FULLWIDTH_APOSTROPHE
}

/// Returns `true` for consonants whose doubling marks gemination.
///
/// Vowels, `v` and `n` are excluded: a doubled `n` is the moraic nasal in
/// Microsoft IME romaji and must pass through untouched.
#[must_use]
pub const fn is_target_consonant(ch: char) -> bool {
    let c = ch.to_ascii_lowercase();
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'v' | 'n')
}

/// Classifies a run by the letters it contains.
///
/// A run is full-width only when it has at least one full-width letter and no
/// half-width letter. Mixed and letterless input is treated as half-width.
#[must_use]
pub fn classify_width(s: &str) -> Width {
    let mut full = false;
    let mut half = false;
    for ch in s.chars() {
        if is_fullwidth_letter(ch) {
            full = true;
        } else if is_halfwidth_letter(ch) {
            half = true;
        }
    }

    if full && !half { Width::Full } else { Width::Half }
}

const fn widen_letter(ch: char) -> char {
    if !is_halfwidth_letter(ch) {
        return ch;
    }
    match char::from_u32(ch as u32 + FULLWIDTH_OFFSET) {
        Some(wide) => wide,
        None => ch,
    }
}

/// Maps ASCII letters to their full-width forms. Every other character,
/// including `'` and kana, is kept as is.
#[must_use]
pub fn to_fullwidth(s: &str) -> String {
    s.chars().map(widen_letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_consonants_exclude_vowels_v_and_n() {
        for ch in "aeiouvnAEIOUVN".chars() {
            assert!(!is_target_consonant(ch), "{ch} must not be a target");
        }
        for ch in "bcdfghjklmpqrstwxyzBCDFGHJKLMPQRSTWXYZ".chars() {
            assert!(is_target_consonant(ch), "{ch} must be a target");
        }
    }

    #[test]
    fn non_ascii_letters_are_never_targets() {
        assert!(!is_target_consonant('ｋ'));
        assert!(!is_target_consonant('っ'));
        assert!(!is_target_consonant('\''));
        assert!(!is_target_consonant('1'));
    }

    #[test]
    fn width_requires_full_width_letters_only() {
        assert_eq!(classify_width("ｋｉｔｔｅ"), Width::Full);
        assert_eq!(classify_width("ｉｔ＇ｓ"), Width::Full);
        assert_eq!(classify_width("kitte"), Width::Half);
        assert_eq!(classify_width("ｋitte"), Width::Half);
        assert_eq!(classify_width("＇"), Width::Half);
        assert_eq!(classify_width(""), Width::Half);
    }

    #[test]
    fn fullwidth_mapping_touches_letters_only() {
        assert_eq!(to_fullwidth("kiっTe"), "ｋｉっＴｅ");
        assert_eq!(to_fullwidth("it's 1"), "ｉｔ'ｓ 1");
        assert_eq!(to_fullwidth("ｋ"), "ｋ");
    }
}
