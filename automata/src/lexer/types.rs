
use std::fmt;

use super::alphabet::{escape, EPSILON};

/*
 * Syntax tree of one pattern. Literals carry their alphabet
 * index so that evaluating the tree never needs the registry.
 * `Concat` and `Alternate` hold at least two operands, in order.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Regexp {
    Literal(char, usize),
    Concat(Vec<Regexp>),
    Alternate(Vec<Regexp>),
    Star(Box<Regexp>),
    Group(Box<Regexp>),
}

impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regexp::Literal(_, EPSILON) => write!(f, "\\$"),
            Regexp::Literal(c, _) => match c {
                '(' | ')' | '*' | '|' | '\\' => write!(f, "\\{}", c),
                c => write!(f, "{}", escape(*c)),
            },
            Regexp::Concat(items) => items.iter().try_for_each(|e| write!(f, "{}", e)),
            Regexp::Alternate(items) => {
                for (i, e) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            },
            Regexp::Star(e) => write!(f, "{}*", e),
            Regexp::Group(e) => write!(f, "({})", e),
        }
    }
}
