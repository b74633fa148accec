//! Rendering the expression tree to text (§4.6).
//!
//! Grounded on the recursive tree-walk-to-`String` shape of
//! `dandy::regex::Regex::build_string`; the escaping, grouping, flag and
//! verbose-mode rules themselves are new, following §4.6 directly and
//! checked against the exact golden outputs in
//! `examples/original_source/tests/python/test_grex.py`.

use crate::expr::{Bound, CharClass, Node, Shorthand};
use crate::options::Options;

/// Characters that must be escaped wherever they appear outside a
/// character class. `-` is included alongside the regex metacharacters
/// named in §4.6, matching the verbose-mode golden scenario's
/// `\[a\-z\]`.
const METACHARS_OUTSIDE_CLASS: &str = "\\^$.|?*+()[]{}-";
const METACHARS_INSIDE_CLASS: &str = "\\]^-";

/// Renders `node` to a pattern string under `opts`: flags, anchors,
/// grouping, escaping and (if requested) verbose multi-line formatting.
pub fn render(node: &Node, opts: &Options) -> String {
    let mut flag_chars = String::new();
    if opts.case_insensitive_matching {
        flag_chars.push('i');
    }
    if opts.verbose_mode {
        flag_chars.push('x');
    }
    let flags = if flag_chars.is_empty() {
        String::new()
    } else {
        format!("(?{flag_chars})")
    };

    let body = if opts.verbose_mode {
        render_verbose(node, opts, 1)
    } else {
        render_node(node, opts)
    };

    let (open, close) = if opts.without_anchors {
        ("", "")
    } else {
        ("^", "$")
    };

    if opts.verbose_mode {
        format!("{flags}\n{open}\n{body}\n{close}")
    } else {
        format!("{flags}{open}{body}{close}")
    }
}

fn group(body: String, capturing: bool) -> String {
    if capturing {
        format!("({body})")
    } else {
        format!("(?:{body})")
    }
}

/// Deterministic alternative order: descending minimum match length, then
/// lexicographic on the rendered text (§4.6 "Alternation ordering" — see
/// `DESIGN.md` for why the worked scenarios fix the length comparison as
/// descending rather than the ascending direction §4.6's prose names).
fn sorted_alternatives(children: &[Node], opts: &Options) -> Vec<(String, usize)> {
    let mut rendered: Vec<(String, usize)> = children
        .iter()
        .map(|c| (render_node(c, opts), crate::expr::min_match_length(c)))
        .collect();
    rendered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rendered
}

fn render_node(node: &Node, opts: &Options) -> String {
    match node {
        Node::Empty => String::new(),
        Node::Literal(g) => escape_literal(g.as_str(), opts),
        Node::Shorthand(s) => s.as_str().to_string(),
        Node::CharClass(cc) => render_charclass(cc, opts),
        Node::Concat(children) => children.iter().map(|c| render_node(c, opts)).collect(),
        Node::Alternation(children) => {
            let body = sorted_alternatives(children, opts)
                .into_iter()
                .map(|(text, _)| text)
                .collect::<Vec<_>>()
                .join("|");
            group(body, opts.capturing_groups)
        }
        Node::Repetition(inner, lower, upper) => {
            format!(
                "{}{}",
                render_repetition_operand(inner, opts),
                repetition_suffix(*lower, *upper)
            )
        }
        Node::Capture(inner) => group(render_node(inner, opts), true),
        Node::NonCapture(inner) => group(render_node(inner, opts), false),
    }
}

fn render_repetition_operand(inner: &Node, opts: &Options) -> String {
    match inner {
        Node::Literal(_) | Node::Shorthand(_) | Node::CharClass(_) | Node::Alternation(_) => {
            render_node(inner, opts)
        }
        _ => group(render_node(inner, opts), opts.capturing_groups),
    }
}

fn repetition_suffix(lower: usize, upper: Bound) -> String {
    match (lower, upper) {
        (0, Bound::Finite(1)) => "?".to_string(),
        (0, Bound::Infinite) => "*".to_string(),
        (1, Bound::Infinite) => "+".to_string(),
        (n, Bound::Finite(m)) if n == m => format!("{{{n}}}"),
        (n, Bound::Infinite) => format!("{{{n},}}"),
        (n, Bound::Finite(m)) => format!("{{{n},{m}}}"),
    }
}

fn render_charclass(cc: &CharClass, opts: &Options) -> String {
    let mut out = String::from("[");
    if cc.negated {
        out.push('^');
    }
    for (lo, hi) in &cc.ranges {
        out.push_str(&escape_scalar(*lo, opts, true));
        if lo != hi {
            out.push('-');
            out.push_str(&escape_scalar(*hi, opts, true));
        }
    }
    out.push(']');
    out
}

fn escape_literal(s: &str, opts: &Options) -> String {
    s.chars().map(|c| escape_scalar(c, opts, false)).collect()
}

/// Newline/carriage-return/tab always render as their two-character escape,
/// inside or outside a class — never as the raw byte, which would also get
/// silently stripped by `verbose_mode`'s `(?x)` flag.
fn escape_scalar(c: char, opts: &Options, in_class: bool) -> String {
    match c {
        '\n' => return "\\n".to_string(),
        '\r' => return "\\r".to_string(),
        '\t' => return "\\t".to_string(),
        _ => {}
    }
    let needs_escape = if in_class {
        METACHARS_INSIDE_CLASS.contains(c)
    } else {
        METACHARS_OUTSIDE_CLASS.contains(c)
    };
    if needs_escape {
        return format!("\\{c}");
    }
    if opts.escape_non_ascii && (c as u32) > 0x7F {
        let code_point = c as u32;
        if code_point > 0xFFFF {
            if opts.use_surrogate_pairs {
                let adjusted = code_point - 0x10000;
                let high = 0xD800 + (adjusted >> 10);
                let low = 0xDC00 + (adjusted & 0x3FF);
                return format!("\\u{high:04x}\\u{low:04x}");
            }
            return format!("\\U{code_point:08x}");
        }
        return format!("\\u{code_point:04x}");
    }
    c.to_string()
}

/// Multi-line rendering (§4.6 "Verbose mode"): two-space indent per
/// nesting level, one alternative per line, opening/closing group tokens
/// each on their own line.
fn render_verbose(node: &Node, opts: &Options, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match node {
        Node::Alternation(children) => {
            let open = if opts.capturing_groups { "(" } else { "(?:" };
            let close = ")";
            let alt_indent = "  ".repeat(depth + 1);
            let mut lines = vec![format!("{indent}{open}")];
            let mut rendered_children: Vec<(Node, usize)> = children
                .iter()
                .cloned()
                .map(|c| {
                    let len = crate::expr::min_match_length(&c);
                    (c, len)
                })
                .collect();
            rendered_children.sort_by(|a, b| {
                b.1.cmp(&a.1)
                    .then_with(|| render_node(&a.0, opts).cmp(&render_node(&b.0, opts)))
            });
            for (i, (child, _)) in rendered_children.iter().enumerate() {
                if i > 0 {
                    lines.push(format!("{alt_indent}|"));
                }
                lines.push(render_verbose_inline(child, opts, depth + 1));
            }
            lines.push(format!("{indent}{close}"));
            lines.join("\n")
        }
        other => format!("{indent}{}", render_node(other, opts)),
    }
}

fn render_verbose_inline(node: &Node, opts: &Options, depth: usize) -> String {
    match node {
        Node::Alternation(_) => render_verbose(node, opts, depth),
        other => format!("{}{}", "  ".repeat(depth), render_node(other, opts)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{alt, concat, CharClass};
    use crate::grapheme::Grapheme;

    #[test]
    fn renders_defaults_with_anchors() {
        let node = concat(vec![
            Node::Literal(Grapheme::from("a")),
            Node::Literal(Grapheme::from("b")),
            Node::CharClass(CharClass::from_chars(&['c', 'd', 'e'], false)),
        ]);
        assert_eq!(render(&node, &Options::default()), "^ab[c-e]$");
    }

    #[test]
    fn without_anchors_omits_anchors() {
        let node = Node::Literal(Grapheme::from("a"));
        let opts = Options::default().without_anchors(true);
        assert_eq!(render(&node, &opts), "a");
    }

    #[test]
    fn case_insensitive_prepends_flag() {
        let node = Node::Literal(Grapheme::from("a"));
        let opts = Options::default().case_insensitive_matching(true);
        assert_eq!(render(&node, &opts), "(?i)^a$");
    }

    #[test]
    fn combined_flags_emit_single_group() {
        let node = Node::Literal(Grapheme::from("a"));
        let opts = Options::default()
            .case_insensitive_matching(true)
            .verbose_mode(true);
        assert!(render(&node, &opts).starts_with("(?ix)"));
    }

    #[test]
    fn escapes_dot_outside_class() {
        let node = Node::Literal(Grapheme::from("."));
        let opts = Options::default().without_anchors(true);
        assert_eq!(render(&node, &opts), "\\.");
    }

    #[test]
    fn escapes_non_ascii_without_surrogates() {
        let node = Node::Literal(Grapheme::from("\u{1f4a9}"));
        let opts = Options::default()
            .without_anchors(true)
            .escape_non_ascii(true);
        assert_eq!(render(&node, &opts), "\\U0001f4a9");
    }

    #[test]
    fn escapes_non_ascii_with_surrogate_pairs() {
        let node = Node::Literal(Grapheme::from("\u{1f4a9}"));
        let opts = Options::default()
            .without_anchors(true)
            .escape_non_ascii(true)
            .use_surrogate_pairs(true);
        assert_eq!(render(&node, &opts), "\\ud83d\\udca9");
    }

    #[test]
    fn capturing_groups_wraps_alternation() {
        let node = alt(vec![
            Node::Literal(Grapheme::from("x")),
            Node::Literal(Grapheme::from("y")),
        ]);
        let opts = Options::default()
            .without_anchors(true)
            .capturing_groups(true);
        let out = render(&node, &opts);
        assert!(out.starts_with('(') && !out.starts_with("(?:"));
    }
}
