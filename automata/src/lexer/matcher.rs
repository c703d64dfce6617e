
use super::alphabet::Alphabet;
use super::dfa::Dfa;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub kind: usize,
    // In bytes.
    pub len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: usize,
    pub text: &'a str,
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized token at offset {offset}: `{remainder}`")]
pub struct LexError {
    pub offset: usize,
    pub remainder: String,
}

/*
 * Runs a DFA the way the generated state functions do: an accepting
 * state keeps reading as long as a longer match may still succeed and
 * falls back to its own type otherwise.
 */
#[derive(Clone, Copy)]
pub struct Matcher<'a> {
    dfa: &'a Dfa,
    alphabet: &'a Alphabet,
}

impl<'a> Matcher<'a> {
    pub fn new(dfa: &'a Dfa, alphabet: &'a Alphabet) -> Self {
        Matcher {dfa, alphabet}
    }

    /// The longest prefix of `input` that some terminal accepts.
    pub fn longest_match(&self, input: &str) -> Option<Match> {
        let states = self.dfa.states();
        let mut state = 0;
        let mut last = None;

        if states[0].accepting != 0 {
            last = Some(Match {kind: states[0].accepting, len: 0});
        }

        for (i, c) in input.char_indices() {
            state = match self.dfa.next(self.alphabet, state, c) {
                Some(next) => next,
                None => break,
            };

            if states[state].accepting != 0 {
                last = Some(Match {kind: states[state].accepting, len: i + c.len_utf8()});
            }
        }

        last
    }

    pub fn tokenize<'b>(&self, input: &'b str) -> Tokens<'a, 'b> {
        Tokens {
            matcher: *self,
            input,
            offset: 0,
            failed: false,
        }
    }
}

/*
 * Splits an input into tokens; stops after the first error.
 */
pub struct Tokens<'a, 'b> {
    matcher: Matcher<'a>,
    input: &'b str,
    offset: usize,
    failed: bool,
}

impl<'b> Iterator for Tokens<'_, 'b> {
    type Item = Result<Token<'b>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset == self.input.len() {
            return None
        }

        let rest = &self.input[self.offset..];

        match self.matcher.longest_match(rest) {
            // An empty match would never move forward.
            Some(m) if m.len > 0 => {
                let token = Token {
                    kind: m.kind,
                    text: &rest[..m.len],
                    offset: self.offset,
                };
                self.offset += m.len;
                Some(Ok(token))
            },
            _ => {
                self.failed = true;
                Some(Err(LexError {
                    offset: self.offset,
                    remainder: rest.to_string(),
                }))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::nfa::{build_fragment, merge};
    use crate::lexer::regexp::parse;

    fn build(patterns: &[&str]) -> (Alphabet, Dfa) {
        let mut alpha = Alphabet::new();
        let trees: Vec<_> = patterns.iter().map(|p| parse(p, &mut alpha).unwrap()).collect();
        let nfas = trees.iter().enumerate()
            .map(|(i, t)| build_fragment(t).complete(i + 1))
            .collect();
        let dfa = Dfa::from_nfa(&merge(nfas).unwrap(), &alpha).minimize();
        (alpha, dfa)
    }

    #[test]
    fn prefers_the_longest_match() {
        let (alpha, dfa) = build(&["a", "aab"]);
        let m = Matcher::new(&dfa, &alpha);

        assert_eq!(m.longest_match("aab"), Some(Match {kind: 2, len: 3}));
        // "aa" is not a token; falls back to "a".
        assert_eq!(m.longest_match("aac"), Some(Match {kind: 1, len: 1}));
        assert_eq!(m.longest_match("b"), None);
    }

    #[test]
    fn epsilon_pattern_matches_nothing_but_empty() {
        let (alpha, dfa) = build(&["\\$"]);
        let m = Matcher::new(&dfa, &alpha);
        assert_eq!(m.longest_match(""), Some(Match {kind: 1, len: 0}));
        assert_eq!(m.longest_match("x"), Some(Match {kind: 1, len: 0}));
        assert_eq!(dfa.accepts(&alpha, "x"), 0);

        // ... and can't be used to tokenize anything.
        let tokens: Vec<Result<Token, LexError>> = m.tokenize("x").collect();
        assert_eq!(tokens, vec![Err(LexError {offset: 0, remainder: "x".to_string()})]);
    }

    #[test]
    fn newline_escape() {
        let (alpha, dfa) = build(&["\\n"]);
        assert_eq!(dfa.accepts(&alpha, "\n"), 1);
        assert_eq!(dfa.accepts(&alpha, "n"), 0);
        assert_eq!(dfa.accepts(&alpha, "\n\n"), 0);
    }

    #[test]
    fn tokenizes_in_order() {
        let (alpha, dfa) = build(&["(0|1)(0|1)*", "(a|b|0|1)(a|b|0|1)*", "\\s\\s*"]);
        let m = Matcher::new(&dfa, &alpha);

        let tokens: Vec<_> = m.tokenize("0110 ab1 10")
            .map(|t| t.map(|t| (t.kind, t.text)))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(tokens, vec![(1, "0110"), (3, " "), (2, "ab1"), (3, " "), (1, "10")]);
    }

    #[test]
    fn stops_at_the_first_error() {
        let (alpha, dfa) = build(&["a", "b"]);
        let mut tokens = Matcher::new(&dfa, &alpha).tokenize("abxab");

        assert_eq!(tokens.next(), Some(Ok(Token {kind: 1, text: "a", offset: 0})));
        assert_eq!(tokens.next(), Some(Ok(Token {kind: 2, text: "b", offset: 1})));
        assert_eq!(tokens.next(), Some(Err(LexError {offset: 2, remainder: "xab".to_string()})));
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn multibyte_input() {
        let (alpha, dfa) = build(&["é(é)*"]);
        let m = Matcher::new(&dfa, &alpha);
        assert_eq!(m.longest_match("ééx"), Some(Match {kind: 1, len: 4}));
    }
}
