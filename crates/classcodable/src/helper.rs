use proc_macro2::Span;
use quote::ToTokens;
use syn::{Ident, LitStr, ext::IdentExt};

// Naming helpers

/// Identifier text without a raw `r#` prefix.
#[must_use]
pub fn unraw(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// Join `prefix` and an identifier into a new identifier.
///
/// A joined name that is a keyword comes back as a raw identifier. The
/// prefix must not start `self`, `Self`, `super` or `crate`, which cannot be
/// raw; config resolution guarantees this.
#[must_use]
pub fn prefixed_ident(prefix: &str, ident: &Ident) -> Ident {
    if prefix.is_empty() {
        return ident.clone();
    }

    let text = format!("{prefix}{}", unraw(ident));
    if syn::parse_str::<Ident>(&text).is_ok() {
        Ident::new(&text, ident.span())
    } else {
        Ident::new_raw(&text, ident.span())
    }
}

/// Flatten a path into `a::b::c` form.
#[must_use]
pub fn path_to_string(path: &syn::Path) -> String {
    path.to_token_stream()
        .to_string()
        .replace(' ', "")
        .trim_matches(':')
        .to_string()
}

// Quoting helpers

/// Quote a string as a literal token.
#[must_use]
pub fn str_lit(value: &str) -> LitStr {
    LitStr::new(value, Span::call_site())
}
