//! Text casing helpers: title case and English ordinals

/// Interior words kept lower-case in titles
const STOP_WORDS: &[&str] = &[
    "and", "but", "for", "or", "nor", "the", "a", "an", "to", "as", "of",
];

/// Re-case `text` as a title
///
/// Words are split on single spaces. The first and last word are always
/// capitalized; interior stop words stay as written; every other word is
/// capitalized. Capitalizing only touches the first letter, so existing
/// capitals inside a word survive. Stop words match exactly, so an interior
/// `Of` or `AND` is treated as an ordinary word.
pub fn title_case(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len() - 1;

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i != 0 && i != last && is_stop_word(word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact, case-sensitive lookup: `AND` is not a stop word
fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Upper-case the first letter, leave everything else untouched
///
/// Leading punctuation is skipped, so `(the` becomes `(The`. A word that
/// starts with a digit is left alone.
fn capitalize(word: &str) -> String {
    match word.char_indices().find(|(_, c)| c.is_alphanumeric()) {
        Some((at, first)) if first.is_alphabetic() => {
            let rest = &word[at + first.len_utf8()..];
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..at]);
            out.extend(first.to_uppercase());
            out.push_str(rest);
            out
        }
        _ => word.to_string(),
    }
}

/// Render `value` with its English ordinal suffix (1st, 2nd, 3rd, 4th, 11th, ...)
pub fn ordinal(value: u32) -> String {
    let suffix = match (value % 100, value % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", value, suffix)
}
