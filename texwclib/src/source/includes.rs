//! Include directive extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::cleaner::strip_comments;

static RE_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:input|include)\{([^}]+)\}").expect("valid include regex"));

/// Return the targets of every `\input{...}` and `\include{...}` in `text`.
///
/// Comments are stripped first, so a commented-out include is never reported.
/// Targets come back in source order, duplicates included, exactly as written
/// (no `.tex` suffix is added here).
pub fn extract_includes(text: &str) -> Vec<String> {
    let text = strip_comments(text);
    RE_INCLUDE
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_source_order() {
        let text = "\\input{intro}\nText\n\\include{chapters/two.tex} \\input{intro}";
        assert_eq!(
            extract_includes(text),
            vec!["intro", "chapters/two.tex", "intro"]
        );
    }

    #[test]
    fn test_commented_include_ignored() {
        let text = "% \\input{ghost}\nReal text here";
        assert!(extract_includes(text).is_empty());
    }

    #[test]
    fn test_include_after_text_on_commented_line() {
        let text = "\\input{kept} % \\input{dropped}";
        assert_eq!(extract_includes(text), vec!["kept"]);
    }

    #[test]
    fn test_empty_argument_not_matched() {
        assert!(extract_includes("\\input{} \\includegraphics{fig}").is_empty());
    }
}
