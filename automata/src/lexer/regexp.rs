
use crate::error::{Error, Result};

use super::alphabet::Alphabet;
use super::types::Regexp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    // One of the structural symbols `(`, `)`, `*`, `|`.
    Control(char),
    // A literal, after escape decoding.
    Char(char),
}

/*
 * Walks the raw pattern one logical character at a time.
 * An escape pair is always consumed as a whole.
 */
struct Cursor<'a> {
    pattern: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(pattern: &'a str) -> Self {
        Cursor {
            pattern,
            chars: pattern.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, position: usize, reason: &'static str) -> Error {
        Error::MalformedPattern {
            pattern: self.pattern.to_string(),
            position,
            reason,
        }
    }

    fn peek(&self) -> Result<Option<Token>> {
        let c = match self.chars.get(self.pos) {
            Some(c) => *c,
            None => return Ok(None),
        };

        let token = match c {
            '\\' => match self.chars.get(self.pos + 1) {
                Some('$') => Token::Char('\0'),
                Some('n') => Token::Char('\n'),
                Some('s') => Token::Char(' '),
                Some('t') => Token::Char('\t'),
                Some(c) => Token::Char(*c),
                None => Err(self.error(self.pos, "dangling escape"))?,
            },
            '(' | ')' | '*' | '|' => Token::Control(c),
            c => Token::Char(c),
        };

        Ok(Some(token))
    }

    // Only called after a successful peek.
    fn bump(&mut self) {
        self.pos += if self.chars[self.pos] == '\\' {2} else {1};
    }
}

/// Deepest syntax tree a pattern may produce. The NFA builder walks
/// the tree recursively, so this bounds its stack use.
const MAX_DEPTH: usize = 256;

/*
 * Every rule returns its subtree along with the subtree's height,
 * a lone literal being 1.
 */
struct Parser<'a, 'b> {
    cursor: Cursor<'a>,
    alphabet: &'b mut Alphabet,
    // Groups currently open.
    depth: usize,
}

impl Parser<'_, '_> {
    fn check(&self, height: usize, position: usize) -> Result<usize> {
        if height > MAX_DEPTH {
            Err(self.cursor.error(position, "nesting too deep"))?
        }
        Ok(height)
    }

    // A single operand stands for itself.
    fn wrap(&self, mut items: Vec<Regexp>, height: usize, node: fn(Vec<Regexp>) -> Regexp) -> Result<(Regexp, usize)> {
        if items.len() == 1 {
            return Ok((items.remove(0), height))
        }
        let height = self.check(height + 1, self.cursor.pos)?;
        Ok((node(items), height))
    }

    fn alternation(&mut self) -> Result<(Regexp, usize)> {
        let (exp, mut height) = self.concatenation()?;
        let mut items = vec![exp];

        while self.cursor.peek()? == Some(Token::Control('|')) {
            self.cursor.bump();
            let (exp, h) = self.concatenation()?;
            height = height.max(h);
            items.push(exp);
        }

        self.wrap(items, height, Regexp::Alternate)
    }

    fn concatenation(&mut self) -> Result<(Regexp, usize)> {
        let (exp, mut height) = self.repetition()?;
        let mut items = vec![exp];

        while matches!(self.cursor.peek()?, Some(Token::Char(_)) | Some(Token::Control('('))) {
            let (exp, h) = self.repetition()?;
            height = height.max(h);
            items.push(exp);
        }

        self.wrap(items, height, Regexp::Concat)
    }

    fn repetition(&mut self) -> Result<(Regexp, usize)> {
        let (mut exp, mut height) = self.atom()?;

        while self.cursor.peek()? == Some(Token::Control('*')) {
            height = self.check(height + 1, self.cursor.pos)?;
            self.cursor.bump();
            exp = Regexp::Star(Box::new(exp));
        }

        Ok((exp, height))
    }

    fn atom(&mut self) -> Result<(Regexp, usize)> {
        let pos = self.cursor.pos;

        match self.cursor.peek()? {
            Some(Token::Char(c)) => {
                self.cursor.bump();
                Ok((Regexp::Literal(c, self.alphabet.index(c)), 1))
            },
            Some(Token::Control('(')) => {
                if self.depth >= MAX_DEPTH {
                    Err(self.cursor.error(pos, "nesting too deep"))?
                }
                self.cursor.bump();

                if self.cursor.peek()? == Some(Token::Control(')')) {
                    Err(self.cursor.error(self.cursor.pos, "empty group"))?
                }

                self.depth += 1;
                let (e, height) = self.alternation()?;
                self.depth = self.depth.saturating_sub(1);

                if self.cursor.peek()? == Some(Token::Control(')')) {
                    let height = self.check(height + 1, self.cursor.pos)?;
                    self.cursor.bump();
                    Ok((Regexp::Group(Box::new(e)), height))
                } else {
                    Err(self.cursor.error(self.cursor.pos, "unbalanced `(`"))
                }
            },
            Some(Token::Control('*')) => Err(self.cursor.error(pos, "nothing to repeat")),
            Some(Token::Control('|')) => Err(self.cursor.error(pos, "missing operand before `|`")),
            Some(Token::Control(_)) => Err(self.cursor.error(pos, "missing operand before `)`")),
            None => Err(self.cursor.error(pos, "unexpected end of pattern")),
        }
    }
}

/// Parses one pattern, registering each of its literals in `alphabet`.
pub fn parse(pattern: &str, alphabet: &mut Alphabet) -> Result<Regexp> {
    let mut parser = Parser {
        cursor: Cursor::new(pattern),
        alphabet,
        depth: 0,
    };

    if pattern.is_empty() {
        Err(parser.cursor.error(0, "empty pattern"))?
    }

    let (exp, _) = parser.alternation()?;

    // The grammar only stops early on a closing parenthesis.
    if parser.cursor.peek()?.is_some() {
        Err(parser.cursor.error(parser.cursor.pos, "unbalanced `)`"))?
    }

    Ok(exp)
}
