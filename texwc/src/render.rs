//! Text rendering of count reports.

use console::Style;
use texwclib::{CountReport, DocumentNode, WordCounts};

const HEADER: &str = "Word Count Tree Structure:";
const SEPARATOR_WIDTH: usize = 60;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Text rendering settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    /// Deepest level whose nodes are printed (root is level 0, None = unlimited)
    pub max_depth: Option<usize>,
    /// Apply terminal styles
    pub styled: bool,
}

struct Theme {
    error: Style,
    total: Style,
}

impl Theme {
    fn new(styled: bool) -> Self {
        Self {
            error: Style::new().red().force_styling(styled),
            total: Style::new().bold().force_styling(styled),
        }
    }
}

fn format_counts(counts: &WordCounts) -> String {
    format!(
        "(CN: {}, EN: {}, Total: {})",
        counts.chinese, counts.english, counts.total
    )
}

fn format_node(node: &DocumentNode, theme: &Theme) -> String {
    let mut line = format!("{} {}", node.path().display(), format_counts(&node.counts()));
    if let Some(error) = node.error() {
        line.push(' ');
        line.push_str(&theme.error.apply_to(format!("[Error: {error}]")).to_string());
    }
    line
}

fn render_children(
    node: &DocumentNode,
    prefix: &str,
    depth: usize,
    options: &TreeOptions,
    theme: &Theme,
    out: &mut String,
) {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    let children = node.children();
    for (index, child) in children.iter().enumerate() {
        let is_last = index == children.len() - 1;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&format_node(child, theme));
        out.push('\n');

        let child_prefix = format!("{prefix}{}", if is_last { SPACE_INDENT } else { PIPE_INDENT });
        render_children(child, &child_prefix, depth + 1, options, theme, out);
    }
}

/// Render the include tree, root first and without a connector.
pub fn render_tree(root: &DocumentNode, options: &TreeOptions) -> String {
    let theme = Theme::new(options.styled);
    let mut out = format_node(root, &theme);
    out.push('\n');
    render_children(root, "", 0, options, &theme, &mut out);
    out
}

/// Render the full text report: header, tree, separator and grand total.
///
/// Depth limiting only affects the tree; the grand total always covers every
/// counted file.
pub fn render_report(report: &CountReport, options: &TreeOptions) -> String {
    let theme = Theme::new(options.styled);
    let total = &report.total;

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&render_tree(&report.root, options));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    let summary = format!(
        "GRAND TOTAL: CN: {}, EN: {}, Total: {}",
        total.chinese, total.english, total.total
    );
    out.push_str(&theme.total.apply_to(summary).to_string());
    out.push('\n');
    out
}
