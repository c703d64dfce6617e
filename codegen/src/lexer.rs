
use proc_macro2::TokenStream;
use quote::quote;

use super::names::TerminalName;
use super::states::StateTable;

/*
 * The lexer declaration: token kinds, the error type, the `Lexer`
 * itself and the signatures of the state functions, whose bodies
 * live in the definitions module.
 */
pub fn lexer_module(names: &[TerminalName], table: &StateTable) -> TokenStream {
    let kinds = names.iter().map(|n| &n.kind);
    let signatures = table.live().map(|(id, _)| {
        quote! {
            fn #id(it: &mut ::std::str::Chars<'_>) -> TokenKind;
        }
    });

    quote! {
        use ::std::fmt;

        use super::terminals::TerminalBox;

        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            INVALID,
            #(#kinds),*
        }

        /// No token matches at `offset`.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct LexError {
            pub offset: usize,
            pub remainder: String,
        }

        impl fmt::Display for LexError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "unrecognized token at offset {}: `{}`", self.offset, self.remainder)
            }
        }

        impl ::std::error::Error for LexError {}

        pub struct Lexer<'a> {
            pub(super) input: &'a str,
            pub(super) tokens: Vec<TerminalBox>,
        }

        impl<'a> Lexer<'a> {
            pub fn new(input: &'a str) -> Self {
                Lexer {
                    input,
                    tokens: Vec::new(),
                }
            }

            pub fn tokens(&self) -> &[TerminalBox] {
                &self.tokens
            }

            pub fn into_tokens(self) -> Vec<TerminalBox> {
                self.tokens
            }
        }

        pub(super) trait States {
            #(#signatures)*
        }

        /// Splits the whole input into tokens, longest match first.
        pub fn tokenize(input: &str) -> Result<Vec<TerminalBox>, LexError> {
            let mut lexer = Lexer::new(input);
            lexer.create_tokens()?;
            Ok(lexer.into_tokens())
        }
    }
}
