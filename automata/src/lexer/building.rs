
use std::fmt;

use log::debug;

use crate::declarations::Declaration;
use crate::error::Result;

use super::alphabet::{escape, Alphabet};
use super::dfa::Dfa;
use super::matcher::Matcher;
use super::nfa::{build_fragment, merge};
use super::regexp::parse;

/// The outcome of a generation run: a minimized DFA, the alphabet its
/// transitions are indexed by, and the terminal names by priority.
#[derive(Clone, Debug)]
pub struct Automaton {
    pub alphabet: Alphabet,
    pub dfa: Dfa,
    pub names: Vec<String>,
}

/*
 * Builds an automaton able to tokenize according to the given
 * declarations. The terminal declared at index i accepts with type
 * i + 1, so earlier declarations win ties.
 */
pub fn build_automaton(decls: &[Declaration]) -> Result<Automaton> {
    let mut alphabet = Alphabet::new();

    // Every pattern is parsed before any automaton is built:
    // past this point the alphabet doesn't change.
    let trees = decls.iter()
        .map(|d| parse(&d.pattern, &mut alphabet))
        .collect::<Result<Vec<_>>>()?;
    let alphabet = alphabet;

    debug!("{} terminals over {} characters", trees.len(), alphabet.len() - 1);

    let nfas = trees.iter().enumerate()
        .map(|(i, tree)| build_fragment(tree).complete(i + 1))
        .collect();
    let nfa = merge(nfas)?;

    debug!("merged NFA has {} states", nfa.len());

    let dfa = Dfa::from_nfa(&nfa, &alphabet).minimize();

    Ok(Automaton {
        alphabet,
        dfa,
        names: decls.iter().map(|d| d.name.clone()).collect(),
    })
}

impl Automaton {
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.dfa, &self.alphabet)
    }

    /// Name of the terminal with the given accepting type.
    pub fn name(&self, kind: usize) -> Option<&str> {
        kind.checked_sub(1).and_then(|i| self.names.get(i)).map(String::as_str)
    }

    /// A human-readable listing of the states and their transitions.
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}

/*
 * Groups the transitions of a state by target, in order of
 * the first symbol leading to each target.
 */
pub fn grouped_transitions(transitions: &[Option<usize>]) -> Vec<(usize, Vec<usize>)> {
    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();

    for (symbol, target) in transitions.iter().enumerate() {
        if let Some(target) = target {
            match groups.iter_mut().find(|(t, _)| t == target) {
                Some((_, symbols)) => symbols.push(symbol),
                None => groups.push((*target, vec![symbol])),
            }
        }
    }

    groups
}

pub struct Dump<'a>(&'a Automaton);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let automaton = self.0;

        for (i, state) in automaton.dfa.states().iter().enumerate() {
            write!(f, "State {}:", i + 1)?;
            if let Some(name) = automaton.name(state.accepting) {
                write!(f, " Accepts {}", name)?;
            }
            writeln!(f)?;

            for (target, symbols) in grouped_transitions(&state.transitions) {
                let chars: Vec<String> = symbols.iter()
                    .map(|s| escape(automaton.alphabet.symbol(*s)))
                    .collect();
                writeln!(f, "    {{ {} }} -> {}", chars.join(", "), target + 1)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::read_declarations;
    use crate::error::Error;
    use indoc::indoc;

    fn automaton(contents: &str) -> Result<Automaton> {
        build_automaton(&read_declarations("test.lex", contents)?)
    }

    #[test]
    fn dump_alternation() {
        let a = automaton(": AB > a|b").unwrap();
        insta::assert_snapshot!(a.dump(), @r"
        State 1:
            { a, b } -> 2
        State 2: Accepts AB
        ");
    }

    #[test]
    fn dump_priorities() {
        let a = automaton(indoc! {r"
            : Num > (0|1)(0|1)*
            : Id > (x|0|1)(x|0|1)*
            : Space > \s
        "}).unwrap();

        insta::assert_snapshot!(a.dump(), @r"
        State 1:
            { 0, 1 } -> 2
            { x } -> 3
            { \s } -> 4
        State 2: Accepts Num
            { 0, 1 } -> 2
            { x } -> 3
        State 3: Accepts Id
            { 0, 1, x } -> 3
        State 4: Accepts Space
        ");
    }

    #[test]
    fn first_error_aborts() {
        let e = automaton(": A > a\n: B > (b\n: C > *").unwrap_err();
        assert!(matches!(e, Error::MalformedPattern {position: 2, ..}));
    }

    #[test]
    fn unbalanced_group_builds_nothing() {
        let e = automaton(": AB > (a|b").unwrap_err();
        assert!(matches!(e, Error::MalformedPattern {..}));
    }

    #[test]
    fn priority_by_declaration_order() {
        let a = automaton(": NUM > (0|1)(0|1)*\n: ID > (0|1)(0|1)*").unwrap();
        let m = a.matcher().longest_match("0101").unwrap();
        assert_eq!(a.name(m.kind), Some("NUM"));

        let a = automaton(": ID > (0|1)(0|1)*\n: NUM > (0|1)(0|1)*").unwrap();
        let m = a.matcher().longest_match("0101").unwrap();
        assert_eq!(a.name(m.kind), Some("ID"));
    }

    #[test]
    fn round_trip() {
        let a = automaton(indoc! {r"
            : If > if
            : Num > (0|1)(0|1)*
            : Plus > +
            : Star > \*
            : Paren > \(
        "}).unwrap();

        let kinds: Vec<_> = a.matcher().tokenize("if10+*(")
            .map(|t| t.map(|t| a.name(t.kind).unwrap_or("?")))
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(kinds, vec!["If", "Num", "Plus", "Star", "Paren"]);
    }

    #[test]
    fn literal_patterns_match_exactly() {
        for p in &["abc", "a\\sb", "x\\ty\\nz", "\\(\\)"] {
            let a = automaton(&format!(": T > {}", p)).unwrap();
            let decoded: String = p.replace("\\s", " ").replace("\\t", "\t").replace("\\n", "\n")
                .replace("\\(", "(").replace("\\)", ")");

            assert_eq!(a.dfa.accepts(&a.alphabet, &decoded), 1, "{}", p);

            let chars: Vec<char> = decoded.chars().collect();
            for len in 0..chars.len() {
                let prefix: String = chars[..len].iter().collect();
                assert_eq!(a.dfa.accepts(&a.alphabet, &prefix), 0, "{:?}", prefix);
            }
            for extra in &['a', 'z', ' '] {
                let longer = format!("{}{}", decoded, extra);
                assert_eq!(a.dfa.accepts(&a.alphabet, &longer), 0, "{:?}", longer);
            }
        }
    }
}
