
use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use super::dfa::{Dfa, DfaState};

/*
 * Gives each distinct key an id, in order of first appearance.
 * Returns the ids and how many there are.
 */
fn number<K, I>(keys: I) -> (Vec<usize>, usize)
    where K: Eq + Hash,
          I: Iterator<Item = K>,
{
    let mut ids = HashMap::new();

    let numbered = keys.map(|k| {
        let next = ids.len();
        *ids.entry(k).or_insert(next)
    }).collect();

    (numbered, ids.len())
}

impl Dfa {
    /*
     * Partition refinement. States start grouped by accepting type,
     * then a class is split whenever its members disagree on the class
     * reached by some symbol, until nothing splits anymore.
     *
     * After every round the classes are renumbered by first appearance
     * in state order: the start state is always class 0, and the
     * numbering only depends on the input automaton.
     */
    pub fn minimize(&self) -> Dfa {
        let (mut classes, mut count) = number(self.states.iter().map(|s| s.accepting));

        loop {
            // A state's own class is part of its signature,
            // so a round can only split classes.
            let (refined, refined_count) = number(self.states.iter().enumerate().map(|(s, state)| {
                let targets: Vec<Option<usize>> = state.transitions.iter()
                    .map(|t| t.map(|t| classes[t]))
                    .collect();
                (classes[s], targets)
            }));

            if refined_count == count {
                break
            }

            classes = refined;
            count = refined_count;
        }

        // With first-appearance numbering, the first member of
        // class c shows up right after the first member of class c - 1.
        let mut states = Vec::with_capacity(count);
        for (s, state) in self.states.iter().enumerate() {
            if classes[s] == states.len() {
                states.push(DfaState {
                    accepting: state.accepting,
                    transitions: state.transitions.iter().map(|t| t.map(|t| classes[t])).collect(),
                });
            }
        }

        debug!("minimization: {} DFA states -> {}", self.states.len(), states.len());

        Dfa {states}
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::alphabet::Alphabet;
    use crate::lexer::dfa::Dfa;
    use crate::lexer::nfa::{build_fragment, merge};
    use crate::lexer::regexp::parse;

    fn dfa(patterns: &[&str]) -> (Alphabet, Dfa) {
        let mut alpha = Alphabet::new();
        let trees: Vec<_> = patterns.iter().map(|p| parse(p, &mut alpha).unwrap()).collect();
        let nfas = trees.iter().enumerate()
            .map(|(i, t)| build_fragment(t).complete(i + 1))
            .collect();
        let dfa = Dfa::from_nfa(&merge(nfas).unwrap(), &alpha);
        (alpha, dfa)
    }

    #[test]
    fn merges_equivalent_states() {
        let (alpha, dfa) = dfa(&["ab|cb"]);
        let min = dfa.minimize();
        assert_eq!(min.len(), 3);
        assert_eq!(min.next(&alpha, 0, 'a'), min.next(&alpha, 0, 'c'));
        assert_eq!(min.accepts(&alpha, "cb"), 1);
    }

    #[test]
    fn star_of_alternation_is_one_state() {
        let (alpha, dfa) = dfa(&["(a|b)*"]);
        assert!(dfa.len() > 1);
        let min = dfa.minimize();
        assert_eq!(min.len(), 1);
        assert_eq!(min.states()[0].accepting, 1);
        assert_eq!(min.next(&alpha, 0, 'a'), Some(0));
        assert_eq!(min.next(&alpha, 0, 'b'), Some(0));
    }

    #[test]
    fn accepting_types_stay_apart() {
        let (alpha, dfa) = dfa(&["a", "b"]);
        let min = dfa.minimize();
        assert_eq!(min.len(), 3);
        assert_eq!(min.accepts(&alpha, "a"), 1);
        assert_eq!(min.accepts(&alpha, "b"), 2);
    }

    #[test]
    fn start_state_stays_first() {
        // The merged start state and the state after 'a' are equivalent.
        let (_, dfa) = dfa(&["a*b"]);
        let min = dfa.minimize();
        assert_eq!(min.states()[0].accepting, 0);
        assert_eq!(min.len(), 2);
    }

    #[test]
    fn idempotent() {
        let cases: &[&[&str]] = &[
            &["ab|cb"],
            &["(a|b)*abb"],
            &["(0|1)(0|1)*", "(a|0|1)(a|0|1)*", "\\s\\s*"],
            &["if", "(i|f|x)(i|f|x)*"],
            &["(cba)*(a|b)"],
        ];

        for patterns in cases {
            let (_, dfa) = dfa(patterns);
            let once = dfa.minimize();
            let twice = once.minimize();
            assert_eq!(twice.len(), once.len());
            assert_eq!(twice.transition_count(), once.transition_count());
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn language_is_preserved() {
        let (alpha, dfa) = dfa(&["(a|b)*abb", "b*"]);
        let min = dfa.minimize();
        assert!(min.len() <= dfa.len());

        let words = ["", "a", "b", "bb", "abb", "aabb", "babb", "abab", "bbbb", "abbb", "c"];
        for w in &words {
            assert_eq!(min.accepts(&alpha, w), dfa.accepts(&alpha, w), "{:?}", w);
        }
    }

    #[test]
    fn textbook_abb() {
        // The classic (a|b)*abb has four minimal states.
        let (_, dfa) = dfa(&["(a|b)*abb"]);
        assert_eq!(dfa.minimize().len(), 4);
    }
}
