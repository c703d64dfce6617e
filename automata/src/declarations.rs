
use super::error::{Error, Result};
use super::line_counter::{LineIter, Location, WordIter};

/// One `: Name > pattern` line. Its position in the file is its priority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub pattern: String,
    pub location: Location,
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/*
 * Reads a terminal definition file. Each non-blank line must read
 * `: Name > pattern`, with the pattern free of whitespace.
 */
pub fn read_declarations(file: &str, contents: &str) -> Result<Vec<Declaration>> {
    let mut decls: Vec<Declaration> = Vec::new();

    for (line, text) in LineIter::new(contents) {
        if text.trim().is_empty() {
            continue
        }

        let malformed = |column: usize, reason: String| Error::MalformedDeclaration {
            file: file.to_string(),
            location: Location {line, column},
            reason,
        };
        let end = text.chars().count() + 1;

        let rest = match text.strip_prefix(':') {
            Some(rest) => rest,
            None => Err(malformed(1, "lines must begin with `:`".to_string()))?,
        };
        let mut words = WordIter::new(rest, line, 2);

        let (location, name) = words.next()
            .ok_or_else(|| malformed(end, "expected a terminal name after `:`".to_string()))?;
        if !is_identifier(name) {
            Err(malformed(location.column, format!("`{}` is not a valid terminal name", name)))?
        }

        match words.next() {
            Some((_, ">")) => (),
            Some((loc, word)) => Err(malformed(loc.column, format!("expected `>`, found `{}`", word)))?,
            None => Err(malformed(end, "expected `>` after the terminal name".to_string()))?,
        }

        let (_, pattern) = words.next()
            .ok_or_else(|| malformed(end, "expected a pattern after `>`".to_string()))?;

        if let Some((loc, word)) = words.next() {
            Err(malformed(loc.column, format!("unexpected `{}` after the pattern", word)))?
        }

        // Token kinds are the upper-cased names, next to INVALID.
        let upper = name.to_uppercase();
        if upper == "INVALID" {
            Err(malformed(location.column, format!("`{}` is reserved", name)))?
        }
        if decls.iter().any(|d| d.name.to_uppercase() == upper) {
            Err(Error::DuplicateTerminal {
                file: file.to_string(),
                location,
                name: name.to_string(),
            })?
        }

        decls.push(Declaration {
            name: name.to_string(),
            pattern: pattern.to_string(),
            location,
        });
    }

    if decls.is_empty() {
        Err(Error::NoPatterns)?
    }

    Ok(decls)
}
