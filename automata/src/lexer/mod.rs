
mod alphabet;
mod types;
mod regexp;
mod nfa;
mod dfa;
mod minimize;
mod matcher;
mod building;

pub use alphabet::{escape, Alphabet, EPSILON};
pub use types::Regexp;
pub use regexp::parse;
pub use nfa::{build_fragment, merge, Fragment, Nfa, NfaState};
pub use dfa::{Dfa, DfaState};
pub use matcher::{LexError, Match, Matcher, Token, Tokens};
pub use building::{build_automaton, grouped_transitions, Automaton, Dump};
