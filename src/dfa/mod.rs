//! Deterministic finite automaton construction and minimization (§4.2).
//!
//! A [`Dfa`] here is built once, from a trie over the example set, then
//! minimized in place. Unlike a hand-authored automaton meant to be parsed
//! back from a text file, this DFA's transition function is genuinely
//! partial: a state only carries edges for the graphemes actually observed
//! leaving it, stored in a sparse per-state map rather than a dense,
//! totalized table keyed over the whole alphabet.

use std::collections::HashMap;
use std::rc::Rc;

use crate::grapheme::Grapheme;

/// A single DFA state: whether it's accepting, and its outgoing transitions
/// keyed by grapheme label.
#[derive(Clone, Debug)]
pub struct DfaState {
    pub accepting: bool,
    pub transitions: HashMap<Rc<str>, usize>,
}

impl DfaState {
    fn new() -> Self {
        DfaState {
            accepting: false,
            transitions: HashMap::new(),
        }
    }
}

/// A deterministic finite automaton over grapheme labels, Q = `states`,
/// q₀ = `initial_state`. δ is the union of each state's `transitions` map —
/// partial, since unobserved (state, grapheme) pairs simply have no entry.
#[derive(Clone, Debug)]
pub struct Dfa {
    states: Vec<DfaState>,
    initial_state: usize,
}

impl Dfa {
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn initial_state(&self) -> usize {
        self.initial_state
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.states[state].accepting
    }

    pub fn transitions(&self, state: usize) -> &HashMap<Rc<str>, usize> {
        &self.states[state].transitions
    }

    /// The observed alphabet, sorted for deterministic iteration elsewhere
    /// in the pipeline (elimination order, class folding, rendering).
    pub fn alphabet(&self) -> Vec<Rc<str>> {
        let mut seen: Vec<Rc<str>> = self
            .states
            .iter()
            .flat_map(|s| s.transitions.keys().cloned())
            .collect();
        seen.sort();
        seen.dedup();
        seen
    }

    /// Whether the automaton accepts the given grapheme sequence.
    pub fn accepts(&self, graphemes: &[Grapheme]) -> bool {
        let mut current = self.initial_state;
        for g in graphemes {
            match self.states[current].transitions.get(g.as_str()) {
                Some(&next) => current = next,
                None => return false,
            }
        }
        self.states[current].accepting
    }

    /// Builds the trie over `examples`: one path per example, terminal
    /// state marked accepting, shared prefixes shared as a single path.
    /// When `case_insensitive` is set, edge labels are folded before
    /// insertion so that e.g. `"A"` and `"a"` share a single outgoing edge,
    /// labeled with the canonical folded grapheme (§4.2).
    pub fn from_examples(examples: &[Vec<Grapheme>], case_insensitive: bool) -> Dfa {
        let mut states = vec![DfaState::new()];
        for example in examples {
            let mut current = 0usize;
            for grapheme in example {
                let label: Rc<str> = if case_insensitive {
                    grapheme.case_folded()
                } else {
                    Rc::from(grapheme.as_str())
                };
                current = match states[current].transitions.get(&label) {
                    Some(&next) => next,
                    None => {
                        states.push(DfaState::new());
                        let next = states.len() - 1;
                        states[current].transitions.insert(label, next);
                        next
                    }
                };
            }
            states[current].accepting = true;
        }
        Dfa {
            states,
            initial_state: 0,
        }
    }

    /// Removes states unreachable from `initial_state`, renumbering the
    /// survivors to keep state IDs dense. A trie is already fully reachable
    /// by construction, but merging states during minimization can strand
    /// states, so the step is kept as an explicit, idempotent pass usable
    /// standalone.
    pub fn remove_unreachable_states(&mut self) {
        let mut reachable = vec![false; self.states.len()];
        let mut stack = vec![self.initial_state];
        reachable[self.initial_state] = true;
        while let Some(state) = stack.pop() {
            for &target in self.states[state].transitions.values() {
                if !reachable[target] {
                    reachable[target] = true;
                    stack.push(target);
                }
            }
        }
        self.remove_states(&reachable);
    }

    fn remove_states(&mut self, keep: &[bool]) {
        let mut new_index = vec![0usize; self.states.len()];
        let mut next = 0usize;
        for (i, &k) in keep.iter().enumerate() {
            if k {
                new_index[i] = next;
                next += 1;
            }
        }
        let mut new_states = Vec::with_capacity(next);
        for (i, state) in self.states.iter().enumerate() {
            if !keep[i] {
                continue;
            }
            let transitions = state
                .transitions
                .iter()
                .filter(|(_, &t)| keep[t])
                .map(|(label, &t)| (label.clone(), new_index[t]))
                .collect();
            new_states.push(DfaState {
                accepting: state.accepting,
                transitions,
            });
        }
        self.initial_state = new_index[self.initial_state];
        self.states = new_states;
    }

    /// Merges Myhill-Nerode equivalent states by signature-based partition
    /// refinement: states start partitioned by acceptance, then iteratively
    /// split whenever two states in the same class transition to different
    /// classes on the same label (or one has a transition the other lacks).
    /// Refinement fixpoints at the coarsest partition consistent with δ,
    /// which is the same equivalence Hopcroft's algorithm computes; this
    /// formulation trades its incremental worklist for a plain fixpoint
    /// loop, which reads more directly against a sparse transition map.
    ///
    /// Each class's representative is its lowest-indexed member, fixed
    /// independent of hash-map iteration order, so minimization is
    /// deterministic (required by the determinism and permutation-
    /// invariance properties the synthesis pipeline promises).
    pub fn merge_nondistinguishable_states(&mut self) {
        let n = self.states.len();
        let mut class = vec![0usize; n];
        for (i, state) in self.states.iter().enumerate() {
            class[i] = if state.accepting { 1 } else { 0 };
        }
        let alphabet = self.alphabet();
        loop {
            let mut next_class = vec![0usize; n];
            let mut seen: HashMap<(usize, Vec<Option<usize>>), usize> = HashMap::new();
            for i in 0..n {
                let signature: Vec<Option<usize>> = alphabet
                    .iter()
                    .map(|label| self.states[i].transitions.get(label).map(|&t| class[t]))
                    .collect();
                let key = (class[i], signature);
                let next_id = seen.len();
                let id = *seen.entry(key).or_insert(next_id);
                next_class[i] = id;
            }
            if next_class == class {
                break;
            }
            class = next_class;
        }

        let mut representative: HashMap<usize, usize> = HashMap::new();
        for i in 0..n {
            representative
                .entry(class[i])
                .and_modify(|r| *r = (*r).min(i))
                .or_insert(i);
        }

        let mut keep = vec![false; n];
        for i in 0..n {
            if representative[&class[i]] == i {
                keep[i] = true;
            }
        }

        for state in &mut self.states {
            for target in state.transitions.values_mut() {
                *target = representative[&class[*target]];
            }
        }
        self.initial_state = representative[&class[self.initial_state]];
        self.remove_states(&keep);
    }

    /// Runs the two steps above in sequence, then canonicalizes state
    /// numbering so the minimal DFA's internal representation no longer
    /// depends on example insertion order.
    pub fn minimize(&mut self) {
        self.remove_unreachable_states();
        self.merge_nondistinguishable_states();
        self.canonicalize();
    }

    /// Renumbers states by a breadth-first traversal from `initial_state`,
    /// visiting each state's outgoing edges in lexicographic label order.
    /// The minimal DFA is unique only up to isomorphism (§3 invariant);
    /// this fixes that isomorphism to a single canonical labeling so two
    /// automata built from permuted or duplicated example lists end up
    /// byte-identical after rendering (§8 properties 2–4).
    pub fn canonicalize(&mut self) {
        let n = self.states.len();
        let mut new_index = vec![usize::MAX; n];
        let mut order = Vec::with_capacity(n);
        let mut queue = std::collections::VecDeque::new();
        new_index[self.initial_state] = 0;
        order.push(self.initial_state);
        queue.push_back(self.initial_state);
        while let Some(state) = queue.pop_front() {
            let mut edges: Vec<(&Rc<str>, &usize)> =
                self.states[state].transitions.iter().collect();
            edges.sort_by(|a, b| a.0.cmp(b.0));
            for (_, &target) in edges {
                if new_index[target] == usize::MAX {
                    new_index[target] = order.len();
                    order.push(target);
                    queue.push_back(target);
                }
            }
        }
        let mut new_states = Vec::with_capacity(order.len());
        for &old in &order {
            let state = &self.states[old];
            let transitions = state
                .transitions
                .iter()
                .map(|(label, &t)| (label.clone(), new_index[t]))
                .collect();
            new_states.push(DfaState {
                accepting: state.accepting,
                transitions,
            });
        }
        self.states = new_states;
        self.initial_state = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::segment;

    fn build(examples: &[&str]) -> Dfa {
        let graphemes: Vec<Vec<Grapheme>> = examples.iter().map(|e| segment(e)).collect();
        let mut dfa = Dfa::from_examples(&graphemes, false);
        dfa.minimize();
        dfa
    }

    #[test]
    fn accepts_exactly_the_input_set() {
        let dfa = build(&["abc", "abd", "abe"]);
        assert!(dfa.accepts(&segment("abc")));
        assert!(dfa.accepts(&segment("abd")));
        assert!(dfa.accepts(&segment("abe")));
        assert!(!dfa.accepts(&segment("abf")));
        assert!(!dfa.accepts(&segment("ab")));
    }

    #[test]
    fn minimization_merges_common_suffix_states() {
        let dfa = build(&["abc", "abd", "abe"]);
        // q0 -a-> q1 -b-> q2 -{c,d,e}-> q3(accept)
        assert_eq!(dfa.states().len(), 4);
    }

    #[test]
    fn empty_string_example_yields_accepting_initial_state() {
        let dfa = build(&[""]);
        assert!(dfa.is_accepting(dfa.initial_state()));
        assert!(dfa.accepts(&[]));
    }

    #[test]
    fn canonicalization_is_permutation_invariant() {
        let a = build(&["abc", "abd", "abe"]);
        let b = build(&["abe", "abc", "abd"]);
        assert_eq!(a.states().len(), b.states().len());
        for i in 0..a.states().len() {
            assert_eq!(a.is_accepting(i), b.is_accepting(i));
            let mut at: Vec<_> = a
                .transitions(i)
                .iter()
                .map(|(l, t)| (l.clone(), *t))
                .collect();
            let mut bt: Vec<_> = b
                .transitions(i)
                .iter()
                .map(|(l, t)| (l.clone(), *t))
                .collect();
            at.sort();
            bt.sort();
            assert_eq!(at, bt);
        }
    }

    #[test]
    fn case_insensitive_merges_case_variants() {
        let graphemes: Vec<Vec<Grapheme>> = ["ABC", "zBC", "abc", "AbC", "aBc"]
            .iter()
            .map(|e| segment(e))
            .collect();
        let mut dfa = Dfa::from_examples(&graphemes, true);
        dfa.minimize();
        assert!(dfa.accepts(&segment("abc")));
        assert!(dfa.accepts(&segment("zbc")));
    }
}
