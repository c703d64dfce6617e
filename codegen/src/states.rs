
use std::collections::VecDeque;

use proc_macro2::Ident;
use quote::format_ident;

use automata::lexer::{grouped_transitions, Alphabet, Dfa, DfaState};

/*
 * Numbers the states that get a state function. A state is live when
 * it can be reached from the start state and is not dead; the start
 * state is always live and is `state_1`, the others follow in
 * minimized-state order.
 */
pub struct StateTable<'a> {
    dfa: &'a Dfa,
    numbers: Vec<Option<usize>>,
}

impl<'a> StateTable<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        let states = dfa.states();

        let mut reachable = vec![false; states.len()];
        let mut queue = VecDeque::new();
        reachable[0] = true;
        queue.push_back(0);

        while let Some(s) = queue.pop_front() {
            for t in states[s].transitions.iter().flatten() {
                if !reachable[*t] {
                    reachable[*t] = true;
                    queue.push_back(*t);
                }
            }
        }

        let mut count = 0;
        let numbers = states.iter().enumerate()
            .map(|(s, state)| {
                if reachable[s] && (s == 0 || !state.is_dead()) {
                    count += 1;
                    Some(count)
                } else {
                    None
                }
            })
            .collect();

        StateTable {dfa, numbers}
    }

    pub fn number(&self, state: usize) -> Option<usize> {
        self.numbers[state]
    }

    pub fn fn_ident(&self, state: usize) -> Option<Ident> {
        self.number(state).map(|n| format_ident!("state_{}", n))
    }

    /// Live states with their function names, in function order.
    pub fn live(&self) -> impl Iterator<Item = (Ident, &'a DfaState)> + '_ {
        self.dfa.states().iter().enumerate()
            .filter_map(move |(s, state)| self.fn_ident(s).map(|id| (id, state)))
    }

    pub fn len(&self) -> usize {
        self.numbers.iter().flatten().count()
    }

    /*
     * The transitions of a state as (characters, callee) pairs.
     * Transitions into dead states are dropped.
     */
    pub fn arms(&self, alphabet: &Alphabet, state: &DfaState) -> Vec<(Vec<char>, Ident)> {
        grouped_transitions(&state.transitions).into_iter()
            .filter_map(|(target, symbols)| {
                // Unnumbered targets are dead: reading into them fails.
                let callee = self.fn_ident(target)?;
                Some((symbols.iter().map(|s| alphabet.symbol(*s)).collect(), callee))
            })
            .collect()
    }
}
