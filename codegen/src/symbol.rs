
use proc_macro2::TokenStream;
use quote::quote;

/// The base abstractions generated terminals hang off of. A parser
/// built on top consumes tokens as `SymbolBox`es.
pub fn symbol_module() -> TokenStream {
    quote! {
        pub trait Symbol: ::std::fmt::Debug {
            fn name(&self) -> &'static str;
        }

        pub type SymbolBox = Box<dyn Symbol>;
    }
}
