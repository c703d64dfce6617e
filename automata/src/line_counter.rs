use std::fmt;

/// A position in an input file. Both coordinates start at 1 and the column
/// counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/*
 * Yields the lines of a file with their number.
 */
pub struct LineIter<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineIter<'a> {
    pub fn new(s: &'a str) -> LineIter<'a> {
        LineIter {
            lines: s.lines(),
            line: 0,
        }
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let l = self.lines.next()?;
        self.line += 1;
        Some((self.line, l))
    }
}

/*
 * Splits one line into whitespace-separated words,
 * remembering where each word starts.
 */
pub struct WordIter<'a> {
    s: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> WordIter<'a> {
    pub fn new(s: &'a str, line: usize, column: usize) -> WordIter<'a> {
        WordIter {
            s,
            chars: s.char_indices().peekable(),
            line,
            column,
        }
    }
}

impl<'a> Iterator for WordIter<'a> {
    type Item = (Location, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break
            }
            self.chars.next();
            self.column += 1;
        }

        let (start, _) = *self.chars.peek()?;
        let loc = Location {line: self.line, column: self.column};
        let mut end = self.s.len();

        while let Some((i, c)) = self.chars.peek() {
            if c.is_whitespace() {
                end = *i;
                break
            }
            self.chars.next();
            self.column += 1;
        }

        Some((loc, &self.s[start..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines() {
        let lines: Vec<_> = LineIter::new("a\n\nb\n").collect();
        assert_eq!(lines, vec![(1, "a"), (2, ""), (3, "b")]);
    }

    #[test]
    fn splits_words() {
        let words: Vec<_> = WordIter::new("NUM  >\t(0|1)*", 4, 2).collect();
        assert_eq!(words, vec![
            (Location {line: 4, column: 2}, "NUM"),
            (Location {line: 4, column: 7}, ">"),
            (Location {line: 4, column: 9}, "(0|1)*"),
        ]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let words: Vec<_> = WordIter::new("é x", 1, 1).collect();
        assert_eq!(words[1], (Location {line: 1, column: 3}, "x"));
    }
}
