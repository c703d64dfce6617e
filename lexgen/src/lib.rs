
mod macro_def;

/// Expands to a tokenizer for the declarations in the given string
/// literal, one `: Name > pattern` per line.
///
/// The expansion is four items: `pub mod symbol`, `pub mod terminals`,
/// `pub mod lexer` and a private `mod lexer_defs`. Call it inside a
/// module of its own so that names don't clash.
#[proc_macro]
pub fn lexer(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    macro_def::lexer(input)
}
