
/// The symbol index of epsilon (non-consuming) transitions.
pub const EPSILON: usize = 0;

/*
 * Maps every character seen in the patterns to a dense index.
 * Insertion order is index order, and index 0 is the epsilon
 * sentinel '\0'.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn new() -> Self {
        Alphabet {chars: vec!['\0']}
    }

    /// Returns the index of `c`, registering it first if it is new.
    pub fn index(&mut self, c: char) -> usize {
        match self.lookup(c) {
            Some(i) => i,
            None => {
                self.chars.push(c);
                self.chars.len() - 1
            }
        }
    }

    pub fn lookup(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|x| *x == c)
    }

    pub fn symbol(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Number of indices, epsilon included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.len() == 1
    }

    /// Every consuming symbol, in index order.
    pub fn symbols(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.chars.iter().copied().enumerate().skip(1)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a character the way patterns spell it.
pub fn escape(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        ' ' => "\\s".to_string(),
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
