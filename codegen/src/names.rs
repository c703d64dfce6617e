
use proc_macro2::Ident;

use super::error::{Error, Result};

// Items the terminals module declares next to the terminal structs.
const RESERVED: &[&str] = &["Terminal", "TerminalBox"];

/// A terminal as it appears in generated code.
pub struct TerminalName {
    /// The struct holding the lexeme, named as declared.
    pub ident: Ident,
    /// The `TokenKind` variant, upper-cased.
    pub kind: Ident,
    pub upper: String,
}

fn ident(name: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name).map_err(|_| Error::InvalidTerminalName(name.to_string()))
}

pub fn terminal_names(names: &[String]) -> Result<Vec<TerminalName>> {
    let mut res: Vec<TerminalName> = Vec::with_capacity(names.len());

    for name in names {
        let upper = name.to_uppercase();

        if RESERVED.contains(&name.as_str())
            || upper == "INVALID"
            || res.iter().any(|t| t.upper == upper) {
            Err(Error::InvalidTerminalName(name.clone()))?
        }

        res.push(TerminalName {
            ident: ident(name)?,
            kind: ident(&upper)?,
            upper,
        });
    }

    Ok(res)
}
