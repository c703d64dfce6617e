
use proc_macro2::TokenStream;
use quote::quote;

use super::names::TerminalName;

/*
 * One struct per terminal, holding the matched text. They display as
 * `NAME[text]`, NAME being the token kind. `into_symbol` hands a
 * boxed terminal over as a plain symbol.
 *
 * Terminal structs share the module with whatever they are named
 * after, so std items are spelled out in full.
 */
pub fn terminals_module(names: &[TerminalName]) -> TokenStream {
    let decls = names.iter().map(|TerminalName {ident, upper, ..}| {
        let format = format!("{}[{{}}]", upper);

        quote! {
            #[allow(non_camel_case_types)]
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct #ident {
                pub value: ::std::string::String,
            }

            impl #ident {
                pub fn new(value: impl ::std::convert::Into<::std::string::String>) -> Self {
                    #ident {value: ::std::convert::Into::into(value)}
                }
            }

            impl super::symbol::Symbol for #ident {
                fn name(&self) -> &'static ::std::primitive::str {
                    #upper
                }
            }

            impl Terminal for #ident {
                fn text(&self) -> &::std::primitive::str {
                    &self.value
                }

                fn into_symbol(self: ::std::boxed::Box<Self>) -> super::symbol::SymbolBox {
                    self
                }
            }

            impl ::std::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, #format, self.value)
                }
            }
        }
    });

    quote! {
        pub trait Terminal: super::symbol::Symbol + ::std::fmt::Display {
            fn text(&self) -> &::std::primitive::str;

            fn into_symbol(self: ::std::boxed::Box<Self>) -> super::symbol::SymbolBox;
        }

        pub type TerminalBox = ::std::boxed::Box<dyn Terminal>;

        #(#decls)*
    }
}
