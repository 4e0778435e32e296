use crate::prelude::*;

///
/// EncodeStmt
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodeStmt {
    pub field: Ident,
    pub presence: Presence,
}

///
/// EncodeBody
///
/// Keyed encode procedure, one write per field in declaration order.
///

#[derive(Clone, Debug)]
pub struct EncodeBody {
    pub keys: Ident,
    pub runtime: syn::Path,
    pub stmts: Vec<EncodeStmt>,
}

impl ToTokens for EncodeBody {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            keys,
            runtime,
            stmts,
        } = self;

        // a record without fields never touches the encoder
        let encoder = if stmts.is_empty() {
            format_ident!("_encoder")
        } else {
            format_ident!("encoder")
        };
        let stmts = stmts.iter().map(|EncodeStmt { field, presence }| match presence {
            Presence::Required => quote! {
                #runtime::KeyedEncoder::encode(&mut *#encoder, #keys::#field, &self.#field)?;
            },
            Presence::IfPresent => quote! {
                #runtime::KeyedEncoder::encode_if_present(
                    &mut *#encoder,
                    #keys::#field,
                    ::core::option::Option::as_ref(&self.#field),
                )?;
            },
        });

        tokens.extend(quote! {
            fn encode<__E>(&self, #encoder: &mut __E) -> ::core::result::Result<(), __E::Error>
            where
                __E: #runtime::KeyedEncoder<Self::Keys>,
            {
                #(#stmts)*

                ::core::result::Result::Ok(())
            }
        });
    }
}

///
/// EncoderSynth
///

pub struct EncoderSynth;

impl Synthesize for EncoderSynth {
    type Fragment = EncodeBody;

    fn synthesize(fields: &FieldList, cx: &Context) -> EncodeBody {
        let stmts = fields
            .iter()
            .map(|field| EncodeStmt {
                field: field.ident.clone(),
                presence: Presence::of(field),
            })
            .collect();

        EncodeBody {
            keys: cx.keys.clone(),
            runtime: cx.runtime.clone(),
            stmts,
        }
    }
}
