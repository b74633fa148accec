//! Character-class folding (§4.5).
//!
//! Two independent passes, run in this order:
//!
//! 1. [`fold`] rewrites single-scalar `Literal` leaves into the requested
//!    shorthand class, when the corresponding option is enabled. Category
//!    folds (`\d \w \s`) take precedence over their complements (`\D \W
//!    \S`) for the same literal, per §4.5.
//! 2. [`coalesce`] runs unconditionally afterwards and rewrites any
//!    `Alternation` whose every surviving child is a single-scalar
//!    `Literal` into a `CharClass` with coalesced ranges — this is what
//!    turns `{c,d,e}` into `[c-e]` regardless of which folding options
//!    were requested.

use crate::expr::{alt, concat, repeat, CharClass, Node, Shorthand};
use crate::options::Options;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn fold_literal(node: Node, opts: &Options) -> Node {
    let Node::Literal(grapheme) = &node else {
        return node;
    };
    let Some(scalar) = grapheme.single_scalar() else {
        return node;
    };
    if opts.conversion_of_digits && scalar.is_ascii_digit() {
        return Node::Shorthand(Shorthand::Digit);
    }
    if opts.conversion_of_words && is_word_char(scalar) {
        return Node::Shorthand(Shorthand::Word);
    }
    if opts.conversion_of_whitespace && scalar.is_whitespace() {
        return Node::Shorthand(Shorthand::Space);
    }
    if opts.conversion_of_non_digits && !scalar.is_ascii_digit() {
        return Node::Shorthand(Shorthand::NonDigit);
    }
    if opts.conversion_of_non_words && !is_word_char(scalar) {
        return Node::Shorthand(Shorthand::NonWord);
    }
    if opts.conversion_of_non_whitespace && !scalar.is_whitespace() {
        return Node::Shorthand(Shorthand::NonSpace);
    }
    node
}

/// Walks the tree folding every `Literal` leaf per the option bundle.
pub fn fold(node: Node, opts: &Options) -> Node {
    match node {
        Node::Literal(_) => fold_literal(node, opts),
        Node::Concat(children) => concat(children.into_iter().map(|c| fold(c, opts)).collect()),
        Node::Alternation(children) => alt(children.into_iter().map(|c| fold(c, opts)).collect()),
        Node::Repetition(inner, lower, upper) => repeat(fold(*inner, opts), lower, upper),
        Node::Capture(inner) => Node::Capture(Box::new(fold(*inner, opts))),
        Node::NonCapture(inner) => Node::NonCapture(Box::new(fold(*inner, opts))),
        other => other,
    }
}

/// Rewrites alternations of single-scalar literals into coalesced
/// character classes. Unconditional: runs regardless of which (if any)
/// folding options were requested, since this is a structural rendering
/// simplification rather than a generalization (§4.5).
pub fn coalesce(node: Node) -> Node {
    match node {
        Node::Concat(children) => concat(children.into_iter().map(coalesce).collect()),
        Node::Alternation(children) => {
            let children: Vec<Node> = children.into_iter().map(coalesce).collect();
            let mut scalars = Vec::new();
            let mut rest = Vec::new();
            for child in children {
                match &child {
                    Node::Literal(g) if g.single_scalar().is_some() => {
                        scalars.push(g.single_scalar().unwrap());
                    }
                    _ => rest.push(child),
                }
            }
            if scalars.len() >= 2 {
                rest.push(Node::CharClass(CharClass::from_chars(&scalars, false)));
            } else {
                rest.extend(
                    scalars
                        .into_iter()
                        .map(|c| Node::Literal(crate::grapheme::Grapheme::from(c.to_string().as_str()))),
                );
            }
            alt(rest)
        }
        Node::Repetition(inner, lower, upper) => repeat(coalesce(*inner), lower, upper),
        Node::Capture(inner) => Node::Capture(Box::new(coalesce(*inner))),
        Node::NonCapture(inner) => Node::NonCapture(Box::new(coalesce(*inner))),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::Grapheme;

    #[test]
    fn folds_digit_literal() {
        let opts = Options::default().conversion_of_digits(true);
        let node = Node::Literal(Grapheme::from("3"));
        assert_eq!(fold(node, &opts), Node::Shorthand(Shorthand::Digit));
    }

    #[test]
    fn category_beats_complement_for_same_literal() {
        let opts = Options::default()
            .conversion_of_digits(true)
            .conversion_of_non_digits(true);
        let node = Node::Literal(Grapheme::from("3"));
        assert_eq!(fold(node, &opts), Node::Shorthand(Shorthand::Digit));
    }

    #[test]
    fn coalesces_single_grapheme_alternation_into_range() {
        let node = alt(vec![
            Node::Literal(Grapheme::from("c")),
            Node::Literal(Grapheme::from("d")),
            Node::Literal(Grapheme::from("e")),
        ]);
        assert_eq!(
            coalesce(node),
            Node::CharClass(CharClass::from_chars(&['c', 'd', 'e'], false))
        );
    }

    #[test]
    fn non_adjacent_scalars_stay_separate_ranges() {
        let node = alt(vec![
            Node::Literal(Grapheme::from("a")),
            Node::Literal(Grapheme::from("z")),
        ]);
        assert_eq!(
            coalesce(node),
            Node::CharClass(CharClass {
                ranges: vec![('a', 'a'), ('z', 'z')],
                negated: false,
            })
        );
    }
}
