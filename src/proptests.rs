//! Property-based tests for the universal properties in §8, in the style
//! of `dandy`'s own `prop_compose!`-driven `tests.rs`: generators for
//! random fixtures, checked against invariants that must hold for every
//! input rather than one example at a time.

use proptest::prelude::*;
use rand::prelude::*;

use crate::{synthesize, Examples, Options};

fn arbitrary_word(rng: &mut impl Rng, max_len: usize) -> String {
    const ALPHABET: &[char] = &['a', 'b', 'c', 'd', '1', '2', ' ', '_'];
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| *ALPHABET.choose(rng).unwrap()).collect()
}

prop_compose! {
    fn example_set()(seed in any::<u64>(), count in 1usize..6) -> Vec<String> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut words: Vec<String> = (0..count).map(|_| arbitrary_word(&mut rng, 6)).collect();
        words.dedup();
        if words.is_empty() {
            words.push("a".to_string());
        }
        words
    }
}

proptest! {
    /// Property 1: every example matches the synthesized pattern under a
    /// real PCRE-compatible engine, for every option combination exercised
    /// here.
    #[test]
    fn soundness(words in example_set(), digits in any::<bool>(), words_opt in any::<bool>()) {
        let examples = Examples::new(words.clone()).unwrap();
        let opts = Options::default()
            .conversion_of_digits(digits)
            .conversion_of_words(words_opt);
        let pattern = synthesize(&examples, &opts);
        let engine = regex::Regex::new(&pattern).expect("synthesized pattern must compile");
        for word in &words {
            prop_assert!(engine.is_match(word), "pattern {pattern:?} did not match {word:?}");
        }
    }

    /// Property 2: determinism — repeated runs over the same input and
    /// options produce byte-identical output.
    #[test]
    fn determinism(words in example_set()) {
        let examples = Examples::new(words).unwrap();
        let opts = Options::default();
        let first = synthesize(&examples, &opts);
        let second = synthesize(&examples, &opts);
        prop_assert_eq!(first, second);
    }

    /// Property 3: permutation invariance.
    #[test]
    fn permutation_invariance(words in example_set(), seed in any::<u64>()) {
        let mut shuffled = words.clone();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);
        let a = Examples::new(words).unwrap();
        let b = Examples::new(shuffled).unwrap();
        let opts = Options::default();
        prop_assert_eq!(synthesize(&a, &opts), synthesize(&b, &opts));
    }

    /// Property 4: duplicate invariance.
    #[test]
    fn duplicate_invariance(words in example_set()) {
        let mut with_duplicate = words.clone();
        with_duplicate.push(words[0].clone());
        let a = Examples::new(words).unwrap();
        let b = Examples::new(with_duplicate).unwrap();
        let opts = Options::default();
        prop_assert_eq!(synthesize(&a, &opts), synthesize(&b, &opts));
    }

    /// Property 5: the anchor law — removing `without_anchors` only adds
    /// `^`/`$` around the otherwise-identical pattern.
    #[test]
    fn anchor_law(words in example_set()) {
        let examples = Examples::new(words).unwrap();
        let anchored = synthesize(&examples, &Options::default());
        let unanchored = synthesize(&examples, &Options::default().without_anchors(true));
        prop_assert_eq!(anchored, format!("^{unanchored}$"));
    }

    /// Property 6: flag ordering — `(?i)` precedes `(?x)`; combined is `(?ix)`.
    #[test]
    fn flag_ordering(words in example_set()) {
        let examples = Examples::new(words).unwrap();
        let opts = Options::default()
            .case_insensitive_matching(true)
            .verbose_mode(true);
        let pattern = synthesize(&examples, &opts);
        prop_assert!(pattern.starts_with("(?ix)"));
    }
}
