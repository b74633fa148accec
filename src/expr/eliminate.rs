//! DFA → expression tree by classical state elimination (§4.4).
//!
//! Grounded on the shape of the original `grex` project's own
//! `Expression::from(dfa, config)` conversion (see
//! `examples/other_examples/e970de61_sirgalleto-grex__src-ast.rs.rs`), but
//! the elimination order and self-loop construction here follow §4.4's
//! explicit algorithm rather than that file's dynamic-programming matrix
//! sweep: process states by ascending `in-degree × out-degree`, ties
//! broken by state index, which after [`crate::dfa::Dfa::canonicalize`] is
//! already a deterministic, permutation-invariant numbering.

use std::collections::HashMap;

use crate::dfa::Dfa;
use crate::expr::{alt, concat, repeat, Bound, Node};
use crate::grapheme::Grapheme;

/// Converts a minimized DFA into a single expression tree describing its
/// language, via fresh start/final states, ε-edges, and iterated removal
/// of every original state.
pub fn eliminate(dfa: &Dfa) -> Node {
    let n = dfa.states().len();
    let start = n;
    let finish = n + 1;

    let mut edges: HashMap<(usize, usize), Node> = HashMap::new();
    add_edge(&mut edges, start, dfa.initial_state(), Node::Empty);
    for state in 0..n {
        if dfa.is_accepting(state) {
            add_edge(&mut edges, state, finish, Node::Empty);
        }
        let mut outgoing: Vec<_> = dfa.transitions(state).iter().collect();
        outgoing.sort_by(|a, b| a.0.cmp(b.0));
        for (label, &target) in outgoing {
            add_edge(
                &mut edges,
                state,
                target,
                Node::Literal(Grapheme::from(&**label)),
            );
        }
    }

    let degree_product = |state: usize, edges: &HashMap<(usize, usize), Node>| -> usize {
        let in_degree = edges.keys().filter(|&&(_, to)| to == state).count();
        let out_degree = edges.keys().filter(|&&(from, _)| from == state).count();
        in_degree * out_degree
    };
    let mut order: Vec<(usize, usize)> = (0..n).map(|s| (degree_product(s, &edges), s)).collect();
    order.sort();

    for (_, state) in order {
        eliminate_state(&mut edges, state);
    }

    edges.remove(&(start, finish)).unwrap_or(Node::Empty)
}

fn add_edge(edges: &mut HashMap<(usize, usize), Node>, from: usize, to: usize, label: Node) {
    edges
        .entry((from, to))
        .and_modify(|existing| *existing = alt(vec![existing.clone(), label.clone()]))
        .or_insert(label);
}

/// Removes `state`, rewriting every predecessor→successor pair through it
/// as `A · L* · B`, where `L` is the self-loop label (or ε if none) and
/// `A`/`B` are the incident edge labels, combined with any pre-existing
/// p→r edge via alternation.
fn eliminate_state(edges: &mut HashMap<(usize, usize), Node>, state: usize) {
    let self_loop = edges.remove(&(state, state));
    let star = match self_loop {
        Some(label) => repeat(label, 0, Bound::Infinite),
        None => Node::Empty,
    };

    let predecessors: Vec<(usize, Node)> = edges
        .iter()
        .filter(|&(&(from, to), _)| to == state && from != state)
        .map(|(&(from, _), label)| (from, label.clone()))
        .collect();
    let successors: Vec<(usize, Node)> = edges
        .iter()
        .filter(|&(&(from, to), _)| from == state && to != state)
        .map(|(&(_, to), label)| (to, label.clone()))
        .collect();

    for (p, a) in &predecessors {
        for (r, b) in &successors {
            let combined = concat(vec![a.clone(), star.clone(), b.clone()]);
            add_edge(edges, *p, *r, combined);
        }
    }

    edges.retain(|&(from, to), _| from != state && to != state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::Dfa;
    use crate::grapheme::segment;

    fn build(examples: &[&str]) -> Dfa {
        let graphemes: Vec<Vec<Grapheme>> = examples.iter().map(|e| segment(e)).collect();
        let mut dfa = Dfa::from_examples(&graphemes, false);
        dfa.minimize();
        dfa
    }

    #[test]
    fn eliminates_single_literal_path() {
        let dfa = build(&["ab"]);
        let tree = eliminate(&dfa);
        assert_eq!(
            tree,
            Node::Concat(vec![
                Node::Literal(Grapheme::from("a")),
                Node::Literal(Grapheme::from("b")),
            ])
        );
    }

    #[test]
    fn eliminates_branching_suffix_into_alternation() {
        let dfa = build(&["abc", "abd"]);
        let tree = eliminate(&dfa);
        // ab(c|d) shape: a Concat whose last child is an Alternation.
        match tree {
            Node::Concat(children) => {
                assert!(matches!(children.last(), Some(Node::Alternation(_))));
            }
            other => panic!("expected Concat, got {other:?}"),
        }
    }
}
