use crate::load::unsupported_error;
use crate::model::{DeriveEnum, DeriveMember, IntermediateAttributes};
use crate::{ATTRIBUTE_NAMESPACE, MACRO_ARG_ENUM};
use syn::spanned::Spanned;

const NAME: &str = "name";

impl TryFrom<syn::DeriveInput> for DeriveEnum {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(unsupported_error(
                value.generics.span(),
                format!("{MACRO_ARG_ENUM} does not apply to generic data structures."),
            ));
        }

        match &value.data {
            syn::Data::Enum(de) => {
                let members = de
                    .variants
                    .iter()
                    .map(DeriveMember::try_from)
                    .collect::<Result<Vec<_>, _>>()?;

                for (i, member) in members.iter().enumerate() {
                    let lowered = member.name.to_lowercase();
                    if members[..i]
                        .iter()
                        .any(|other| other.name.to_lowercase() == lowered)
                    {
                        return Err(unsupported_error(
                            member.variant_name.span(),
                            format!(
                                "{MACRO_ARG_ENUM} member names must be unique, ignoring case (repeated '{}').",
                                member.name
                            ),
                        ));
                    }
                }

                Ok(DeriveEnum {
                    enum_name: enum_name.clone(),
                    members,
                })
            }
            _ => Err(unsupported_error(
                enum_name.span(),
                format!("{MACRO_ARG_ENUM} only applies to 'enum' data structures."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveMember {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(unsupported_error(
                value.fields.span(),
                format!("{MACRO_ARG_ENUM} only applies to unit variants ('{variant_name}' has fields)."),
            ));
        }

        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE_NAMESPACE) {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                attributes.singletons.extend(singletons);
                for (key, values) in pairs {
                    attributes.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(unsupported_error(
                variant_name.span(),
                format!("unknown attribute '{singleton}' on '{variant_name}'."),
            ));
        }

        let mut name = variant_name.to_string();

        for (key, values) in attributes.pairs {
            if key != NAME {
                return Err(unsupported_error(
                    variant_name.span(),
                    format!("unknown attribute '{key}' on '{variant_name}'."),
                ));
            }

            // If repeated, only the final name will apply.
            if let Some(value) = values.last() {
                let literal: syn::LitStr = syn::parse2(value.tokens.clone()).map_err(|_| {
                    unsupported_error(
                        variant_name.span(),
                        format!("the {NAME} of '{variant_name}' must be a string literal."),
                    )
                })?;
                name = literal.value();
            }
        }

        if name.trim().is_empty() {
            return Err(unsupported_error(
                variant_name.span(),
                format!("the {NAME} of '{variant_name}' cannot be blank."),
            ));
        }

        if name.trim() != name {
            return Err(unsupported_error(
                variant_name.span(),
                format!("the {NAME} of '{variant_name}' cannot have surrounding whitespace."),
            ));
        }

        Ok(DeriveMember { variant_name, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    #[test]
    fn construct_derive_enum_empty() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(ArgEnum)]
                enum Values { }
            "#,
        )
        .unwrap();

        // Execute
        let derive_enum = DeriveEnum::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_enum,
            DeriveEnum {
                enum_name: ident("Values"),
                members: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_derive_enum() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(ArgEnum)]
                enum Values {
                    Abc,
                    #[switchyard(name = "def")]
                    Def,
                    #[switchyard(name = "discarded", name = "g-h-i")]
                    Ghi = 7,
                }
            "#,
        )
        .unwrap();

        // Execute
        let derive_enum = DeriveEnum::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_enum,
            DeriveEnum {
                enum_name: ident("Values"),
                members: vec![
                    DeriveMember {
                        variant_name: ident("Abc"),
                        name: "Abc".to_string(),
                    },
                    DeriveMember {
                        variant_name: ident("Def"),
                        name: "def".to_string(),
                    },
                    DeriveMember {
                        variant_name: ident("Ghi"),
                        name: "g-h-i".to_string(),
                    },
                ],
            }
        );
    }

    #[test]
    fn construct_derive_enum_not_enum() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(ArgEnum)]
                struct Values { }
            "#,
        )
        .unwrap();

        // Execute
        let error = DeriveEnum::try_from(input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - ArgEnum only applies to 'enum' data structures."
        );
    }

    #[test]
    fn construct_derive_enum_generic() {
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                enum Values<T> { Abc }
            "#,
        )
        .unwrap();

        let error = DeriveEnum::try_from(input).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - ArgEnum does not apply to generic data structures."
        );
    }

    #[test]
    fn construct_derive_enum_fields() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                enum Values {
                    Abc,
                    Def(u32),
                }
            "#,
        )
        .unwrap();

        // Execute
        let error = DeriveEnum::try_from(input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - ArgEnum only applies to unit variants ('Def' has fields)."
        );
    }

    #[test]
    fn construct_derive_enum_repeated_name() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                enum Values {
                    Abc,
                    #[switchyard(name = "ABC")]
                    Def,
                }
            "#,
        )
        .unwrap();

        // Execute
        let error = DeriveEnum::try_from(input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - ArgEnum member names must be unique, ignoring case (repeated 'ABC')."
        );
    }

    #[test]
    fn construct_derive_member_unknown() {
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(help = "abc")]
            Abc
        };

        let error = DeriveMember::try_from(&variant).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute 'help' on 'Abc'."
        );
    }

    #[test]
    fn construct_derive_member_unknown_singleton() {
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(hidden)]
            Abc
        };

        let error = DeriveMember::try_from(&variant).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute 'hidden' on 'Abc'."
        );
    }

    #[test]
    fn construct_derive_member_not_literal() {
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(name = abc)]
            Abc
        };

        let error = DeriveMember::try_from(&variant).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - the name of 'Abc' must be a string literal."
        );
    }

    #[test]
    fn construct_derive_member_blank() {
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(name = " ")]
            Abc
        };

        let error = DeriveMember::try_from(&variant).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - the name of 'Abc' cannot be blank."
        );
    }

    #[test]
    fn construct_derive_member_padded() {
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(name = " one ")]
            Abc
        };

        let error = DeriveMember::try_from(&variant).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - the name of 'Abc' cannot have surrounding whitespace."
        );
    }

    #[test]
    fn construct_derive_member_repeated_attributes() {
        // Setup
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(help = "abc")]
            #[switchyard(name = "def")]
            Abc
        };

        // Execute
        let error = DeriveMember::try_from(&variant).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute 'help' on 'Abc'."
        );
    }

    #[test]
    fn construct_derive_member_repeated_names() {
        let variant: syn::Variant = syn::parse_quote! {
            #[switchyard(name = "discarded")]
            #[switchyard(name = "def")]
            Abc
        };

        let member = DeriveMember::try_from(&variant).unwrap();

        assert_eq!(member.name, "def");
    }

    #[test]
    fn construct_derive_member_ignores_foreign_attributes() {
        let variant: syn::Variant = syn::parse_quote! {
            #[default]
            Abc
        };

        let member = DeriveMember::try_from(&variant).unwrap();

        assert_eq!(member.name, "Abc");
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
