//! Derive macros for `switchyard`.
//! See the `switchyard::derive` module for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveEnum;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

const MACRO_ARG_ENUM: &str = "ArgEnum";
const ATTRIBUTE_NAMESPACE: &str = "switchyard";

/// Implement `switchyard::prelude::ArgEnum` and `switchyard::FromValue` for a fieldless enum.
///
/// Each member is selected on the Cli by its name, ignoring case.
/// The name defaults to the member's identifier, and may be overridden via `#[switchyard(name = "...")]`.
#[proc_macro_derive(ArgEnum, attributes(switchyard))]
pub fn arg_enum(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveEnum::try_from(derive_input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
