//! Repetition detection (§4.3).
//!
//! Runs only when `conversion_of_repetitions` is set, over runs of
//! consecutive `Literal` nodes produced by state elimination — which is
//! exactly where both of §4.3's two cases surface: an unbranched stretch
//! of a single example becomes one literal-only `Concat` after
//! elimination, and a shared DFA edge-label chain becomes the same shape,
//! so a single pass over literal runs covers both without needing to
//! special-case "per example" versus "per edge".
//!
//! A run qualifies when its substring length is at least
//! `minimum_substring_length` and it repeats more than `minimum_repetitions`
//! times — i.e. `minimum_repetitions` counts how many times the run must
//! repeat *beyond* establishing it once (see `DESIGN.md` for why this
//! reading of the threshold, not "`occurrences ≥ minimum_repetitions`", is
//! the one consistent with the worked scenarios).

use crate::expr::{concat, repeat, Bound, Node};
use crate::grapheme::Grapheme;

struct Candidate {
    start: usize,
    substring_len: usize,
    run_count: usize,
}

/// Finds the best non-overlapping repeated-run cover of `graphemes` and
/// rewrites it into a mix of plain `Literal` nodes and `Repetition` nodes,
/// preserving original order for anything left uncompressed.
pub fn compress(
    graphemes: &[Grapheme],
    minimum_repetitions: u32,
    minimum_substring_length: u32,
) -> Vec<Node> {
    let n = graphemes.len();
    if n == 0 {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for substring_len in (minimum_substring_length as usize).max(1)..=(n / 2).max(1) {
        let mut start = 0;
        while start + substring_len <= n {
            let mut run_count = 1;
            while start + (run_count + 1) * substring_len <= n
                && graphemes[start..start + substring_len]
                    == graphemes[start + run_count * substring_len
                        ..start + (run_count + 1) * substring_len]
            {
                run_count += 1;
            }
            if run_count > 1 && run_count as u32 > minimum_repetitions {
                candidates.push(Candidate {
                    start,
                    substring_len,
                    run_count,
                });
            }
            start += 1;
        }
    }

    // Tie-break: longer substring first, then longer run, then earlier offset.
    candidates.sort_by(|a, b| {
        b.substring_len
            .cmp(&a.substring_len)
            .then(b.run_count.cmp(&a.run_count))
            .then(a.start.cmp(&b.start))
    });

    let mut covered = vec![false; n];
    let mut selected: Vec<&Candidate> = Vec::new();
    for candidate in &candidates {
        let end = candidate.start + candidate.substring_len * candidate.run_count;
        if covered[candidate.start..end].iter().any(|&c| c) {
            continue;
        }
        for slot in covered[candidate.start..end].iter_mut() {
            *slot = true;
        }
        selected.push(candidate);
    }
    selected.sort_by_key(|c| c.start);

    let mut result = Vec::new();
    let mut pos = 0;
    for candidate in selected {
        if candidate.start > pos {
            result.extend(
                graphemes[pos..candidate.start]
                    .iter()
                    .cloned()
                    .map(Node::Literal),
            );
        }
        let unit_end = candidate.start + candidate.substring_len;
        let unit = concat(
            graphemes[candidate.start..unit_end]
                .iter()
                .cloned()
                .map(Node::Literal)
                .collect(),
        );
        result.push(repeat(
            unit,
            candidate.run_count,
            Bound::Finite(candidate.run_count),
        ));
        pos = candidate.start + candidate.substring_len * candidate.run_count;
    }
    if pos < n {
        result.extend(graphemes[pos..n].iter().cloned().map(Node::Literal));
    }
    result
}

/// Applies [`compress`] to every maximal run of consecutive `Literal`
/// children inside `Concat` nodes throughout the tree (the DFA-edge-label
/// case, §4.3 second bullet); non-literal children are left untouched and
/// act as a boundary between runs.
pub fn compress_tree(node: Node, minimum_repetitions: u32, minimum_substring_length: u32) -> Node {
    match node {
        Node::Concat(children) => {
            let mut rewritten = Vec::with_capacity(children.len());
            let mut literal_run: Vec<Grapheme> = Vec::new();
            let mut flush = |run: &mut Vec<Grapheme>, out: &mut Vec<Node>| {
                if !run.is_empty() {
                    out.extend(compress(run, minimum_repetitions, minimum_substring_length));
                    run.clear();
                }
            };
            for child in children {
                match child {
                    Node::Literal(g) => literal_run.push(g),
                    other => {
                        flush(&mut literal_run, &mut rewritten);
                        rewritten.push(compress_tree(
                            other,
                            minimum_repetitions,
                            minimum_substring_length,
                        ));
                    }
                }
            }
            flush(&mut literal_run, &mut rewritten);
            concat(rewritten)
        }
        Node::Alternation(children) => crate::expr::alt(
            children
                .into_iter()
                .map(|c| compress_tree(c, minimum_repetitions, minimum_substring_length))
                .collect(),
        ),
        Node::Repetition(inner, lower, upper) => repeat(
            compress_tree(*inner, minimum_repetitions, minimum_substring_length),
            lower,
            upper,
        ),
        Node::Capture(inner) => Node::Capture(Box::new(compress_tree(
            *inner,
            minimum_repetitions,
            minimum_substring_length,
        ))),
        Node::NonCapture(inner) => Node::NonCapture(Box::new(compress_tree(
            *inner,
            minimum_repetitions,
            minimum_substring_length,
        ))),
        other => other,
    }
}
