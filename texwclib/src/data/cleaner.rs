//! Lexical LaTeX stripping.
//!
//! There is no LaTeX parser here. The cleaner applies a fixed sequence of
//! regular-expression rewrites, and the order of those passes is part of the
//! observable behaviour:
//!
//! 1. comments (`%` to end of line)
//! 2. display math (`\[...\]`, `$$...$$`, across lines) then inline math (`$...$`)
//! 3. each command in [`IGNORED_COMMANDS`] together with its first `{...}` argument
//! 4. every remaining `\name` token, replaced by a space
//! 5. literal `{` and `}`, replaced by spaces
//!
//! Braces are never balanced. An unlisted command such as `\textbf{bold}` loses
//! its name in pass 4 and its argument text survives as prose.

use std::sync::LazyLock;

use regex::Regex;

/// Commands removed together with their single brace argument, in the order
/// the passes run.
pub const IGNORED_COMMANDS: &[&str] = &[
    "cite",
    "ref",
    "label",
    "usepackage",
    "input",
    "include",
    "bibliography",
    "bibliographystyle",
    "documentclass",
    "pagestyle",
    "thispagestyle",
    "vskip",
    "vspace",
    "hspace",
    "setlength",
    "setcounter",
];

static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%.*").expect("valid comment regex"));
static RE_DISPLAY_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\[.*?\\\]").expect("valid display math regex"));
static RE_DISPLAY_DOLLAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$.*?\$\$").expect("valid display math regex"));
static RE_INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$.*?\$").expect("valid inline math regex"));
static RE_IGNORED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    IGNORED_COMMANDS
        .iter()
        .map(|cmd| Regex::new(&format!(r"\\{cmd}\{{[^}}]*\}}")).expect("valid command regex"))
        .collect()
});
static RE_COMMAND_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+").expect("valid command name regex"));

/// Remove `%` comments up to (not including) the end of each line.
///
/// Escaped `\%` is not special-cased; it starts a comment like any other `%`.
pub fn strip_comments(text: &str) -> String {
    RE_COMMENT.replace_all(text, "").into_owned()
}

/// Remove display and inline math.
pub fn strip_math(text: &str) -> String {
    let text = RE_DISPLAY_BRACKET.replace_all(text, "");
    let text = RE_DISPLAY_DOLLAR.replace_all(&text, "");
    RE_INLINE_MATH.replace_all(&text, "").into_owned()
}

/// Remove the ignored commands along with their argument, one command per pass.
pub fn strip_ignored_commands(text: &str) -> String {
    RE_IGNORED.iter().fold(text.to_string(), |acc, re| {
        re.replace_all(&acc, "").into_owned()
    })
}

/// Run every pass and return text ready for word splitting.
pub fn clean(text: &str) -> String {
    let text = strip_comments(text);
    let text = strip_math(&text);
    let text = strip_ignored_commands(&text);
    let text = RE_COMMAND_NAME.replace_all(&text, " ");
    text.replace(['{', '}'], " ")
}
