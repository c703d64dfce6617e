
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use automata::lexer::{Alphabet, DfaState};

use super::names::TerminalName;
use super::states::StateTable;

fn kind_of(names: &[TerminalName], accepting: usize) -> TokenStream {
    match accepting.checked_sub(1).and_then(|i| names.get(i)) {
        Some(TerminalName {kind, ..}) => quote! {TokenKind::#kind},
        None => quote! {TokenKind::INVALID},
    }
}

/*
 * A non-accepting state reads one character and hands over to the
 * target state. An accepting state tries to go on from a copy of the
 * iterator and only keeps it if the continuation ends on a token;
 * otherwise it gives back its own kind, consuming nothing more.
 */
fn state_fn(
    id: &Ident,
    state: &DfaState,
    names: &[TerminalName],
    table: &StateTable,
    alphabet: &Alphabet,
) -> TokenStream {
    let own = kind_of(names, state.accepting);
    let arms = table.arms(alphabet, state);

    if arms.is_empty() {
        return quote! {
            fn #id(_it: &mut ::std::str::Chars<'_>) -> TokenKind {
                #own
            }
        }
    }

    if state.accepting == 0 {
        let arms = arms.iter().map(|(chars, callee)| quote! {
            Some(#(#chars)|*) => Self::#callee(it),
        });

        quote! {
            fn #id(it: &mut ::std::str::Chars<'_>) -> TokenKind {
                match it.next() {
                    #(#arms)*
                    _ => TokenKind::INVALID,
                }
            }
        }
    } else {
        let arms = arms.iter().map(|(chars, callee)| quote! {
            Some(#(#chars)|*) => Self::#callee(&mut cont),
        });

        quote! {
            fn #id(it: &mut ::std::str::Chars<'_>) -> TokenKind {
                let mut cont = it.clone();
                let cont_valid = match cont.next() {
                    #(#arms)*
                    _ => TokenKind::INVALID,
                };

                if cont_valid != TokenKind::INVALID {
                    *it = cont;
                    return cont_valid;
                }

                #own
            }
        }
    }
}

/*
 * The tokenizer loop: run the start state on what is left of the
 * input, box a terminal spanning what it consumed, start over. Empty
 * matches and INVALID both stop with an error on the remainder.
 */
fn create_tokens(names: &[TerminalName], start: &Ident) -> TokenStream {
    let arms = names.iter().map(|TerminalName {ident, kind, ..}| quote! {
        TokenKind::#kind => Box::new(super::terminals::#ident::new(text)),
    });

    quote! {
        impl Lexer<'_> {
            pub fn create_tokens(&mut self) -> Result<(), LexError> {
                let mut rest = self.input;

                while !rest.is_empty() {
                    let mut it = rest.chars();
                    let kind = Self::#start(&mut it);
                    let len = rest.len() - it.as_str().len();
                    let text = &rest[..len];

                    let error = || LexError {
                        offset: self.input.len() - rest.len(),
                        remainder: rest.to_string(),
                    };

                    let token: TerminalBox = match kind {
                        _ if len == 0 => return Err(error()),
                        #(#arms)*
                        TokenKind::INVALID => return Err(error()),
                    };

                    self.tokens.push(token);
                    rest = &rest[len..];
                }

                Ok(())
            }
        }
    }
}

pub fn definitions_module(names: &[TerminalName], table: &StateTable, alphabet: &Alphabet) -> TokenStream {
    let fns: Vec<_> = table.live()
        .map(|(id, state)| state_fn(&id, state, names, table, alphabet))
        .collect();

    let start = match table.fn_ident(0) {
        Some(start) => create_tokens(names, &start),
        None => TokenStream::new(),
    };

    quote! {
        use super::lexer::{LexError, Lexer, States, TokenKind};
        use super::terminals::TerminalBox;

        #start

        impl States for Lexer<'_> {
            #(#fns)*
        }
    }
}
