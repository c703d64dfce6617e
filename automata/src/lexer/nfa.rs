
use crate::error::{Error, Result};

use super::alphabet::EPSILON;
use super::types::Regexp;

/*
 * States live in a per-automaton arena: transitions are
 * (symbol index, target index) pairs, and one state may carry
 * several transitions on the same symbol.
 */
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NfaState {
    pub transitions: Vec<(usize, usize)>,
    // 0 when not accepting, the terminal's priority otherwise.
    pub accepting: usize,
}

impl NfaState {
    fn shifted(mut self, offset: usize) -> Self {
        self.transitions.iter_mut().for_each(|(_, target)| *target += offset);
        self
    }
}

// The one out-edge of a fragment that doesn't have a target yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Exit {
    state: usize,
    symbol: usize,
}

/// A piece of automaton under construction. Its start state is always
/// at index 0; the empty fragment has no state at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    states: Vec<NfaState>,
    exit: Option<Exit>,
}

impl Fragment {
    pub fn empty() -> Self {
        Fragment::default()
    }

    pub fn is_empty(&self) -> bool {
        self.exit.is_none()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// One state whose exit edge reads `symbol`.
    pub fn literal(symbol: usize) -> Self {
        Fragment {
            states: vec![NfaState::default()],
            exit: Some(Exit {state: 0, symbol}),
        }
    }

    /*
     * Moves the states of `other` at the end of this fragment
     * and returns its exit, renumbered.
     */
    fn absorb(&mut self, other: Fragment) -> Option<Exit> {
        let offset = self.states.len();
        self.states.extend(other.states.into_iter().map(|s| s.shifted(offset)));
        other.exit.map(|e| Exit {state: e.state + offset, symbol: e.symbol})
    }

    fn attach(&mut self, exit: Exit, target: usize) {
        self.states[exit.state].transitions.push((exit.symbol, target));
    }

    pub fn concatenate(self, rhs: Fragment) -> Fragment {
        let exit = match self.exit {
            Some(exit) => exit,
            None => return rhs,
        };
        if rhs.is_empty() {
            return self
        }

        let mut result = self;
        let rhs_start = result.states.len();
        result.exit = result.absorb(rhs);
        result.attach(exit, rhs_start);
        result
    }

    pub fn alternate(self, rhs: Fragment) -> Fragment {
        if rhs.is_empty() {
            return self
        }
        if self.is_empty() {
            return rhs
        }

        let mut result = Fragment {
            states: vec![NfaState::default()],
            exit: None,
        };

        let lhs_start = result.states.len();
        let lhs_exit = result.absorb(self);
        let rhs_start = result.states.len();
        let rhs_exit = result.absorb(rhs);

        let out = result.states.len();
        result.states.push(NfaState::default());

        result.states[0].transitions.push((EPSILON, lhs_start));
        result.states[0].transitions.push((EPSILON, rhs_start));
        lhs_exit.into_iter().chain(rhs_exit).for_each(|exit| result.attach(exit, out));

        result.exit = Some(Exit {state: out, symbol: EPSILON});
        result
    }

    pub fn star(self) -> Fragment {
        if self.is_empty() {
            return self
        }

        // The hub is both the entry and the loop point.
        let mut result = Fragment {
            states: vec![NfaState::default()],
            exit: None,
        };
        let inner_exit = result.absorb(self);

        result.states[0].transitions.push((EPSILON, 1));
        if let Some(exit) = inner_exit {
            result.attach(exit, 0);
        }

        result.exit = Some(Exit {state: 0, symbol: EPSILON});
        result
    }

    /// Closes the fragment on a final state tagged with `accepting`.
    pub fn complete(self, accepting: usize) -> Nfa {
        let mut states = self.states;
        let last = states.len();
        states.push(NfaState {transitions: Vec::new(), accepting});

        if let Some(exit) = self.exit {
            states[exit.state].transitions.push((exit.symbol, last));
        }

        Nfa {states}
    }
}

/// Evaluates a syntax tree bottom-up into a fragment.
pub fn build_fragment(exp: &Regexp) -> Fragment {
    match exp {
        Regexp::Literal(_, symbol) => Fragment::literal(*symbol),
        Regexp::Concat(items) => items.iter().map(build_fragment).fold(Fragment::empty(), Fragment::concatenate),
        Regexp::Alternate(items) => items.iter().map(build_fragment).fold(Fragment::empty(), Fragment::alternate),
        Regexp::Star(e) => build_fragment(e).star(),
        Regexp::Group(e) => build_fragment(e),
    }
}

/// A completed automaton. State ids are arena indices and the start
/// state is 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
}

impl Nfa {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    /*
     * Adds to `set` every state reachable through epsilon edges.
     * The set doubles as the visited set, so cycles terminate.
     */
    pub fn closure(&self, set: &mut [bool]) {
        let mut stack: Vec<usize> = set.iter().enumerate()
            .filter_map(|(i, in_set)| if *in_set {Some(i)} else {None})
            .collect();

        while let Some(s) = stack.pop() {
            for &(symbol, target) in &self.states[s].transitions {
                if symbol == EPSILON && !set[target] {
                    set[target] = true;
                    stack.push(target);
                }
            }
        }
    }

    /// The epsilon-closed set reached from `set` by reading `symbol`.
    pub fn step(&self, set: &[bool], symbol: usize) -> Vec<bool> {
        let mut next = vec![false; self.states.len()];

        set.iter().enumerate().filter(|(_, in_set)| **in_set).for_each(|(s, _)| {
            for &(sym, target) in &self.states[s].transitions {
                if sym == symbol {
                    next[target] = true;
                }
            }
        });

        self.closure(&mut next);
        next
    }

    /// Lowest nonzero accepting type among the states of `set`, or 0.
    pub fn accepting(&self, set: &[bool]) -> usize {
        set.iter().zip(self.states.iter())
            .filter(|(in_set, state)| **in_set && state.accepting != 0)
            .map(|(_, state)| state.accepting)
            .min()
            .unwrap_or(0)
    }
}

/// Joins completed automata under a new start state, keeping their order.
pub fn merge(nfas: Vec<Nfa>) -> Result<Nfa> {
    if nfas.is_empty() {
        Err(Error::NoPatterns)?
    }

    let mut states = vec![NfaState::default()];

    for nfa in nfas {
        let offset = states.len();
        states[0].transitions.push((EPSILON, offset));
        states.extend(nfa.states.into_iter().map(|s| s.shifted(offset)));
    }

    Ok(Nfa {states})
}
