//! Chinese character and English word counting.

use std::sync::LazyLock;

use regex::Regex;

use super::cleaner::clean;
use super::stats::WordCounts;

// `\p{N}` keeps numeric symbols such as `²` and `½`, which count as
// alphanumeric alongside letters and decimal digits.
static RE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\p{N}]").expect("valid punctuation regex"));

/// Whether `c` lies in the CJK Unified Ideographs block.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Count already-cleaned text.
///
/// The two counts are independent passes over the same text:
/// every CJK ideograph counts as one Chinese unit, and English words are the
/// whitespace-separated tokens left after replacing CJK with spaces and
/// deleting anything that is neither a word character nor whitespace.
pub fn count_cleaned(text: &str) -> WordCounts {
    let chinese = text.chars().filter(|&c| is_cjk(c)).count() as u64;

    let without_cjk: String = text
        .chars()
        .map(|c| if is_cjk(c) { ' ' } else { c })
        .collect();
    let without_punct = RE_PUNCTUATION.replace_all(&without_cjk, "");
    let english = without_punct.split_whitespace().count() as u64;

    WordCounts::new(chinese, english)
}

/// Clean raw LaTeX source and count what remains.
///
/// # Example
///
/// ```rust
/// use texwclib::count_text;
///
/// let counts = count_text(r"Hello \textbf{world}, 你好 $x^2$ % comment");
/// assert_eq!(counts.english, 2);
/// assert_eq!(counts.chinese, 2);
/// assert_eq!(counts.total, 4);
/// ```
pub fn count_text(raw: &str) -> WordCounts {
    count_cleaned(&clean(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cjk_bounds() {
        assert!(is_cjk('\u{4e00}'));
        assert!(is_cjk('\u{9fff}'));
        assert!(is_cjk('中'));
        assert!(!is_cjk('\u{3400}'));
        assert!(!is_cjk('。'));
        assert!(!is_cjk('a'));
    }

    #[test]
    fn test_count_plain_english() {
        let counts = count_cleaned("The quick brown fox");
        assert_eq!(counts, WordCounts::new(0, 4));
    }

    #[test]
    fn test_punctuation_is_stripped_not_split() {
        // "don't" collapses to "dont", a lone dash disappears entirely.
        let counts = count_cleaned("don't stop - now, really!");
        assert_eq!(counts.english, 4);
    }

    #[test]
    fn test_chinese_counted_per_character() {
        let counts = count_cleaned("你好世界");
        assert_eq!(counts, WordCounts::new(4, 0));
    }

    #[test]
    fn test_cjk_separates_english_tokens() {
        let counts = count_cleaned("abc中def");
        assert_eq!(counts, WordCounts::new(1, 2));
    }

    #[test]
    fn test_cjk_punctuation_not_counted() {
        let counts = count_cleaned("你好，世界。");
        assert_eq!(counts, WordCounts::new(4, 0));
    }

    #[test]
    fn test_numbers_and_underscores_are_words() {
        let counts = count_cleaned("version 2 of snake_case");
        assert_eq!(counts.english, 4);
    }

    #[test]
    fn test_numeric_symbols_are_words() {
        let counts = count_cleaned("x ² ½ Ⅳ");
        assert_eq!(counts.english, 4);
    }

    #[test]
    fn test_empty_text() {
        assert!(count_cleaned("").is_empty());
        assert!(count_cleaned("  \n\t ").is_empty());
        assert!(count_text("% only a comment").is_empty());
    }

    #[test]
    fn test_count_text_mixed() {
        let counts = count_text("Hello world. \\input{b}");
        assert_eq!(counts, WordCounts::new(0, 2));

        let counts = count_text("你好 test");
        assert_eq!(counts, WordCounts::new(2, 1));
    }

    #[test]
    fn test_count_stable_after_recleaning() {
        let raw = "Intro \\emph{to} $x$ 中文 \\cite{k} {braces} end.";
        let once = clean(raw);
        assert_eq!(count_cleaned(&once), count_cleaned(&clean(&once)));
    }
}
