
//! Turns a minimized automaton into the Rust sources of a maximal-munch
//! tokenizer. The four artifacts are meant to live side by side as
//! modules named `symbol`, `terminals` and `lexer`, plus one module of
//! any name for the definitions.

mod error;
mod names;
mod states;
mod symbol;
mod terminals;
mod lexer;
mod definitions;

use log::debug;
use proc_macro2::TokenStream;

use automata::declarations::read_declarations;
use automata::lexer::{build_automaton, Automaton};

pub use error::{Error, Result};

pub struct Artifacts {
    pub symbol: TokenStream,
    pub terminals: TokenStream,
    pub lexer: TokenStream,
    pub definitions: TokenStream,
}

pub fn generate(automaton: &Automaton) -> Result<Artifacts> {
    let names = names::terminal_names(&automaton.names)?;
    let table = states::StateTable::new(&automaton.dfa);

    debug!("generating {} state functions for {} terminals", table.len(), names.len());

    Ok(Artifacts {
        symbol: symbol::symbol_module(),
        terminals: terminals::terminals_module(&names),
        lexer: lexer::lexer_module(&names, &table),
        definitions: definitions::definitions_module(&names, &table, &automaton.alphabet),
    })
}

/*
 * Reads a declaration file and runs the whole pipeline on it.
 * `file` only names the input in error messages.
 */
pub fn generate_lexer(file: &str, contents: &str) -> Result<(Automaton, Artifacts)> {
    let decls = read_declarations(file, contents)?;
    let automaton = build_automaton(&decls)?;
    let artifacts = generate(&automaton)?;
    Ok((automaton, artifacts))
}

const HEADER: &str = "// @generated by the lexer generator. Do not edit.";

impl Artifacts {
    /// The artifacts in order: symbol, terminals, lexer, definitions.
    pub fn streams(&self) -> [&TokenStream; 4] {
        [&self.symbol, &self.terminals, &self.lexer, &self.definitions]
    }

    /// Source texts, one line of tokens each; run rustfmt for layout.
    pub fn render(&self) -> [String; 4] {
        let [symbol, terminals, lexer, definitions] = self.streams();
        [render(symbol), render(terminals), render(lexer), render(definitions)]
    }
}

fn render(tokens: &TokenStream) -> String {
    format!("{}\n\n{}\n", HEADER, tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use syn::{ImplItem, Item};

    const BINARY: &str = indoc! {r"
        : Num > (0|1)(0|1)*
        : Id > (x|0|1)(x|0|1)*
        : Space > \s\s*
    "};

    fn file(tokens: &TokenStream) -> syn::File {
        syn::parse2(tokens.clone()).unwrap()
    }

    fn states_impl(file: &syn::File) -> Vec<String> {
        file.items.iter()
            .filter_map(|item| match item {
                Item::Impl(i) if i.trait_.is_some() => Some(i),
                _ => None,
            })
            .flat_map(|i| i.items.iter())
            .filter_map(|item| match item {
                ImplItem::Method(m) => Some(m.sig.ident.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn artifacts_are_valid_rust() {
        let (_, artifacts) = generate_lexer("binary.lex", BINARY).unwrap();
        for tokens in artifacts.streams().iter() {
            file(tokens);
        }
    }

    #[test]
    fn one_function_per_live_state() {
        let (automaton, artifacts) = generate_lexer("binary.lex", BINARY).unwrap();
        let defs = states_impl(&file(&artifacts.definitions));

        assert_eq!(defs.len(), automaton.dfa.len());
        assert_eq!(defs[0], "state_1");

        let lexer = file(&artifacts.lexer);
        let declared = lexer.items.iter()
            .filter_map(|item| match item {
                Item::Trait(t) if t.ident == "States" => Some(t.items.len()),
                _ => None,
            })
            .next();
        assert_eq!(declared, Some(defs.len()));
    }

    #[test]
    fn token_kinds_in_declaration_order() {
        let (_, artifacts) = generate_lexer("binary.lex", BINARY).unwrap();
        let lexer = file(&artifacts.lexer);

        let variants: Vec<_> = lexer.items.iter()
            .filter_map(|item| match item {
                Item::Enum(e) if e.ident == "TokenKind" => Some(e),
                _ => None,
            })
            .flat_map(|e| e.variants.iter().map(|v| v.ident.to_string()))
            .collect();
        assert_eq!(variants, vec!["INVALID", "NUM", "ID", "SPACE"]);
    }

    #[test]
    fn one_struct_per_terminal() {
        let (_, artifacts) = generate_lexer("binary.lex", BINARY).unwrap();
        let terminals = file(&artifacts.terminals);

        let structs: Vec<_> = terminals.items.iter()
            .filter_map(|item| match item {
                Item::Struct(s) => Some(s.ident.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(structs, vec!["Num", "Id", "Space"]);
    }

    #[test]
    fn rendered_with_header() {
        let (_, artifacts) = generate_lexer("binary.lex", BINARY).unwrap();
        for text in artifacts.render().iter() {
            assert!(text.starts_with(HEADER));
            syn::parse_file(text).unwrap();
        }
    }

    #[test]
    fn pipeline_errors_pass_through() {
        let e = generate_lexer("bad.lex", ": A > (a").err().unwrap();
        assert!(matches!(e, Error::Automata(automata::Error::MalformedPattern {..})));

        let e = generate_lexer("bad.lex", ": fn > a").err().unwrap();
        assert!(matches!(e, Error::InvalidTerminalName(n) if n == "fn"));
    }
}
