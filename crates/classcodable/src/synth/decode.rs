use crate::prelude::*;

///
/// DecodeStmt
///
/// `ty` is the type actually read: the wrapped type for optional fields.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DecodeStmt {
    pub field: Ident,
    pub ty: Type,
    pub presence: Presence,
}

///
/// DecodeBody
///

#[derive(Clone, Debug)]
pub struct DecodeBody {
    pub keys: Ident,
    pub runtime: syn::Path,
    pub stmts: Vec<DecodeStmt>,
}

impl ToTokens for DecodeBody {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            keys,
            runtime,
            stmts,
        } = self;

        let decoder = if stmts.is_empty() {
            format_ident!("_decoder")
        } else {
            format_ident!("decoder")
        };

        // struct literal fields evaluate in the order written
        let reads = stmts.iter().map(|DecodeStmt { field, ty, presence }| match presence {
            Presence::Required => quote! {
                #field: #runtime::KeyedDecoder::decode::<#ty>(#decoder, #keys::#field)?
            },
            Presence::IfPresent => quote! {
                #field: #runtime::KeyedDecoder::decode_if_present::<#ty>(#decoder, #keys::#field)?
            },
        });

        tokens.extend(quote! {
            fn decode<__D>(#decoder: &__D) -> ::core::result::Result<Self, __D::Error>
            where
                __D: #runtime::KeyedDecoder<Self::Keys>,
            {
                ::core::result::Result::Ok(Self {
                    #(#reads,)*
                })
            }
        });
    }
}

///
/// DecoderSynth
///

pub struct DecoderSynth;

impl Synthesize for DecoderSynth {
    type Fragment = DecodeBody;

    fn synthesize(fields: &FieldList, cx: &Context) -> DecodeBody {
        let stmts = fields
            .iter()
            .map(|field| DecodeStmt {
                field: field.ident.clone(),
                ty: field.value_type().clone(),
                presence: Presence::of(field),
            })
            .collect();

        DecodeBody {
            keys: cx.keys.clone(),
            runtime: cx.runtime.clone(),
            stmts,
        }
    }
}
