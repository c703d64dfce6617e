
use log::debug;

use super::alphabet::Alphabet;
use super::nfa::Nfa;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DfaState {
    // 0 when not accepting, the winning terminal's priority otherwise.
    pub accepting: usize,
    // Indexed by symbol. The epsilon column is always None.
    pub transitions: Vec<Option<usize>>,
}

impl DfaState {
    fn new(accepting: usize, symbols: usize) -> Self {
        DfaState {
            accepting,
            transitions: vec![None; symbols],
        }
    }

    pub fn is_dead(&self) -> bool {
        self.accepting == 0 && self.transitions.iter().all(Option::is_none)
    }
}

/*
 * A deterministic automaton; the start state is 0.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    pub(super) states: Vec<DfaState>,
}

impl Dfa {
    /*
     * Subset construction. Each DFA state stands for an epsilon-closed
     * set of NFA states; two sets are the same state exactly when
     * they are equal.
     */
    pub fn from_nfa(nfa: &Nfa, alphabet: &Alphabet) -> Dfa {
        let symbols = alphabet.len();

        let mut start = vec![false; nfa.len()];
        start[0] = true;
        nfa.closure(&mut start);

        let mut states = vec![DfaState::new(nfa.accepting(&start), symbols)];
        let mut sets = vec![start];

        let mut i = 0;
        while i < sets.len() {
            for symbol in 1..symbols {
                let next = nfa.step(&sets[i], symbol);
                if !next.contains(&true) {
                    continue
                }

                let target = match sets.iter().position(|s| *s == next) {
                    Some(target) => target,
                    None => {
                        states.push(DfaState::new(nfa.accepting(&next), symbols));
                        sets.push(next);
                        sets.len() - 1
                    },
                };

                states[i].transitions[symbol] = Some(target);
            }

            i += 1;
        }

        debug!("subset construction: {} NFA states -> {} DFA states", nfa.len(), states.len());

        Dfa {states}
    }

    /// Wraps states built by hand. State 0 is the start state and every
    /// transition must target one of `states`.
    pub fn from_states(states: Vec<DfaState>) -> Dfa {
        debug_assert!(states.iter()
            .flat_map(|s| s.transitions.iter().flatten())
            .all(|t| *t < states.len()));
        Dfa {states}
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter()
            .map(|s| s.transitions.iter().filter(|t| t.is_some()).count())
            .sum()
    }

    /// The state reached from `state` by reading `c`, if any.
    pub fn next(&self, alphabet: &Alphabet, state: usize, c: char) -> Option<usize> {
        alphabet.lookup(c).and_then(|symbol| self.states[state].transitions[symbol])
    }

    /// Runs the whole of `input` and returns the accepting type of the
    /// state it ends in (0 when the input is rejected).
    pub fn accepts(&self, alphabet: &Alphabet, input: &str) -> usize {
        let mut state = 0;

        for c in input.chars() {
            match self.next(alphabet, state, c) {
                Some(next) => state = next,
                None => return 0,
            }
        }

        self.states[state].accepting
    }
}
