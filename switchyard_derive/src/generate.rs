use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

use crate::model::DeriveEnum;

impl From<DeriveEnum> for TokenStream2 {
    fn from(value: DeriveEnum) -> Self {
        let DeriveEnum { enum_name, members } = value;
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        let variants: Vec<_> = members.iter().map(|m| &m.variant_name).collect();
        let ordinals: Vec<_> = (0..members.len()).map(Literal::usize_unsuffixed).collect();

        quote! {
            impl ::switchyard::prelude::ArgEnum for #enum_name {
                fn members() -> &'static [&'static str] {
                    &[ #( #names ),* ]
                }

                fn from_ordinal(ordinal: usize) -> ::std::option::Option<Self> {
                    match ordinal {
                        #( #ordinals => ::std::option::Option::Some(#enum_name::#variants), )*
                        _ => ::std::option::Option::None,
                    }
                }

                fn ordinal(&self) -> usize {
                    match *self {
                        #( #enum_name::#variants => #ordinals, )*
                    }
                }

                fn name(&self) -> &'static str {
                    match *self {
                        #( #enum_name::#variants => #names, )*
                    }
                }
            }

            impl ::switchyard::FromValue for #enum_name {
                fn from_value(
                    value: &::switchyard::Value,
                ) -> ::std::result::Result<Self, ::switchyard::ConversionError> {
                    ::switchyard::member_from_value(value)
                }
            }
        }
    }
}
