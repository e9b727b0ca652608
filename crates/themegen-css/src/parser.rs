//! `:root` block parsing.
//!
//! Comments are stripped first, so a `:root` inside a comment never
//! matches and comments inside a block never leak into values.
//!
//! Known limitation: a `;` inside a quoted string value ends the value
//! early, e.g. `--x: "a;b";` yields `"a`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::validator::ValidationIssue;
use crate::variables::VariableMap;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(--[\w-]+)\s*:\s*([^;]+);").unwrap());

/// Result of parsing a stylesheet's `:root` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub variables: VariableMap,
    /// At most one `structure` issue.
    pub errors: Vec<ValidationIssue>,
}

/// Remove every `/* ... */` comment.
pub fn strip_comments(css: &str) -> String {
    COMMENT_RE.replace_all(css, "").into_owned()
}

/// Bodies of every block whose selector mentions `:root`, in order.
///
/// The selector is the text since the previous `{`, `}` or `;` (or the
/// start), so compound selectors like `html:root` or `[data-theme] :root`
/// match and line breaks are irrelevant.
fn root_blocks(css: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut selector_start = 0;
    let mut pos = 0;

    while let Some(offset) = css[pos..].find(['{', '}', ';']) {
        let at = pos + offset;
        if css.as_bytes()[at] == b'{' && css[selector_start..at].contains(":root") {
            let body_start = at + 1;
            let body_end = css[body_start..]
                .find('}')
                .map_or(css.len(), |i| body_start + i);
            blocks.push(&css[body_start..body_end]);
            pos = (body_end + 1).min(css.len());
            selector_start = pos;
            continue;
        }
        pos = at + 1;
        selector_start = pos;
    }

    blocks
}

fn collect_declarations(body: &str, into: &mut VariableMap, prefix: Option<&str>) {
    for cap in DECLARATION_RE.captures_iter(body) {
        let name = &cap[1];
        if prefix.is_some_and(|p| !name.starts_with(p)) {
            continue;
        }
        let value = cap[2].trim();
        if let Some(previous) = into.insert(name, value) {
            debug!(name, previous = %previous, value, "duplicate declaration, last one wins");
        }
    }
}

/// Parse the first `:root` block.
///
/// Never fails: without a `:root` block the outcome carries an empty map
/// and a single `structure` error.
pub fn parse_root(css: &str) -> ParseOutcome {
    let css = strip_comments(css);
    let Some(body) = root_blocks(&css).into_iter().next() else {
        return ParseOutcome {
            variables: VariableMap::new(),
            errors: vec![ValidationIssue::structure()],
        };
    };

    let mut variables = VariableMap::new();
    collect_declarations(body, &mut variables, None);
    debug!(count = variables.len(), "parsed :root block");
    ParseOutcome {
        variables,
        errors: Vec::new(),
    }
}

/// Collect every `:root` declaration, then every declaration anywhere in
/// the text whose name starts with `prefix`. Later declarations win.
pub fn extract_all(css: &str, prefix: &str) -> VariableMap {
    let css = strip_comments(css);
    let mut variables = VariableMap::new();
    for body in root_blocks(&css) {
        collect_declarations(body, &mut variables, None);
    }
    collect_declarations(&css, &mut variables, Some(prefix));
    variables
}
