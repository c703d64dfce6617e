use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Error, LitStr, Token};
use syn::parse::{Parse, ParseStream};

use codegen::{generate_lexer, Artifacts};

struct MacroInput {
    declarations: LitStr,
}

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let declarations = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(MacroInput {declarations})
    }
}

fn expand(input: &MacroInput) -> codegen::Result<TokenStream> {
    let (_, artifacts) = generate_lexer("lexer!", &input.declarations.value())?;
    let Artifacts {symbol, terminals, lexer, definitions} = artifacts;

    Ok(quote! {
        pub mod symbol {
            #symbol
        }

        pub mod terminals {
            #terminals
        }

        pub mod lexer {
            #lexer
        }

        mod lexer_defs {
            #definitions
        }
    })
}

pub fn lexer(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as MacroInput);

    let expanded = match expand(&input) {
        Ok(expanded) => expanded,
        Err(e) => Error::new(input.declarations.span(), e).to_compile_error(),
    };

    expanded.into()
}
