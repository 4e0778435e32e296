use crate::prelude::*;
use syn::{Attribute, Meta, Token, punctuated::Punctuated};

///
/// Marker
///
/// A named annotation attached to a member, carrying literal arguments only.
/// The host normalizes its attribute syntax into this shape before generation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Marker {
    pub name: String,
    pub args: Vec<Lit>,
}

impl Marker {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: Lit) -> Self {
        self.args.push(arg);
        self
    }

    /// Convert a `syn` attribute into a marker.
    ///
    /// `#[name]`, `#[name(lit, ...)]` and `#[name = lit]` are accepted; any
    /// non-literal argument is rejected.
    pub fn from_attribute(attr: &Attribute) -> syn::Result<Self> {
        let name = path_to_string(attr.path());

        let args = match &attr.meta {
            Meta::Path(_) => Vec::new(),
            Meta::List(_) => attr
                .parse_args_with(Punctuated::<Lit, Token![,]>::parse_terminated)?
                .into_iter()
                .collect(),
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => vec![expr.lit.clone()],
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        format!("marker '{name}' only accepts literal arguments"),
                    ));
                }
            },
        };

        Ok(Self { name, args })
    }

    /// The single argument's literal text, if the marker carries exactly one.
    #[must_use]
    pub fn single_arg_text(&self) -> Option<String> {
        match self.args.as_slice() {
            [arg] => Some(literal_text(arg)),
            _ => None,
        }
    }
}

// literal_text
// string-like literals yield their value, everything else its source text
fn literal_text(lit: &Lit) -> String {
    match lit {
        Lit::Str(s) => s.value(),
        Lit::Char(c) => c.value().to_string(),
        Lit::Int(i) => i.base10_digits().to_string(),
        Lit::Float(f) => f.base10_digits().to_string(),
        Lit::Bool(b) => b.value.to_string(),
        other => other.to_token_stream().to_string(),
    }
}

///
/// TESTS
///
