mod attribute;
mod member;

fn unsupported_error(span: proc_macro2::Span, message: impl std::fmt::Display) -> syn::Error {
    syn::Error::new(span, format!("Invalid - {message}"))
}
