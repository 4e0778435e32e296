use crate::prelude::*;

///
/// KeyCase
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyCase {
    pub ident: Ident,
    pub key: String,
}

///
/// KeyMapping
///
/// The key enumeration: one case per field, in declaration order, each with
/// its serialized key as raw value.
///

#[derive(Clone, Debug)]
pub struct KeyMapping {
    pub ident: Ident,
    pub vis: Visibility,
    pub runtime: syn::Path,
    pub cases: Vec<KeyCase>,
}

impl KeyMapping {
    /// `(field name, serialized key)` pairs in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (String, &str)> {
        self.cases
            .iter()
            .map(|case| (unraw(&case.ident), case.key.as_str()))
    }

    #[must_use]
    pub fn key_for(&self, field: &Ident) -> Option<&str> {
        self.cases
            .iter()
            .find(|case| case.ident == *field)
            .map(|case| case.key.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl ToTokens for KeyMapping {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            ident,
            vis,
            runtime,
            cases,
        } = self;
        let variants: Vec<&Ident> = cases.iter().map(|case| &case.ident).collect();
        let keys = cases.iter().map(|case| str_lit(&case.key));

        tokens.extend(quote! {
            #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
            #[allow(non_camel_case_types)]
            #vis enum #ident {
                #(#variants,)*
            }

            impl #runtime::CodingKey for #ident {
                const ALL: &'static [Self] = &[#(Self::#variants),*];

                fn as_str(self) -> &'static str {
                    match self {
                        #(Self::#variants => #keys,)*
                    }
                }
            }
        });
    }
}

///
/// KeyMappingSynth
///

pub struct KeyMappingSynth;

impl Synthesize for KeyMappingSynth {
    type Fragment = KeyMapping;

    fn synthesize(fields: &FieldList, cx: &Context) -> KeyMapping {
        let cases = fields
            .iter()
            .map(|field| KeyCase {
                ident: field.ident.clone(),
                key: field.serialized_key(),
            })
            .collect();

        KeyMapping {
            ident: cx.keys.clone(),
            vis: cx.vis.clone(),
            runtime: cx.runtime.clone(),
            cases,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn cases_follow_fields_and_resolve_keys() {
        let fields: FieldList = vec![
            FieldDescriptor::new(parse_quote!(id), parse_quote!(u64)),
            FieldDescriptor::new(parse_quote!(name), parse_quote!(String))
                .with_override_key("full_name"),
        ]
        .into();
        let cx = Context {
            target: parse_quote!(Person),
            vis: parse_quote!(pub(crate)),
            keys: parse_quote!(PersonCodingKeys),
            runtime: parse_quote!(::classcodable_core),
            constructor: parse_quote!(new),
            setter_prefix: "with_".to_string(),
        };

        let mapping = KeyMappingSynth::synthesize(&fields, &cx);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.key_for(&parse_quote!(id)), Some("id"));
        assert_eq!(mapping.key_for(&parse_quote!(name)), Some("full_name"));
        assert_eq!(mapping.key_for(&parse_quote!(missing)), None);

        let file: syn::File = syn::parse2(mapping.to_token_stream()).unwrap();
        assert_eq!(file.items.len(), 2);
    }
}
