use crate::{
    dispatch::GenerationMode,
    prelude::*,
    synth::{DecodeBody, EncodeBody, Initializer, KeyMapping},
};
use derive_more::Display;

///
/// ConformanceMarker
///
/// Serialization capability the host should declare on the target type.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ConformanceMarker {
    Encodable,
    Decodable,
    Codable,
}

impl ConformanceMarker {
    #[must_use]
    pub const fn for_mode(mode: GenerationMode) -> Self {
        match mode {
            GenerationMode::EncodeOnly => Self::Encodable,
            GenerationMode::DecodeOnly => Self::Decodable,
            GenerationMode::Both => Self::Codable,
        }
    }

    #[must_use]
    pub const fn encodes(self) -> bool {
        matches!(self, Self::Encodable | Self::Codable)
    }

    #[must_use]
    pub const fn decodes(self) -> bool {
        matches!(self, Self::Decodable | Self::Codable)
    }

    /// Path of the runtime trait this marker names.
    #[must_use]
    pub fn trait_path(self, runtime: &syn::Path) -> TokenStream {
        let ident = format_ident!("{self}");

        quote!(#runtime::#ident)
    }
}

///
/// Fragment
///
/// Borrowed view of one generated code unit, in splice order.
///

#[derive(Clone, Copy, Debug)]
pub enum Fragment<'a> {
    KeyMapping(&'a KeyMapping),
    Initializer(&'a Initializer),
    Encode(&'a EncodeBody),
    Decode(&'a DecodeBody),
}

impl Fragment<'_> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeyMapping(_) => "key_mapping",
            Self::Initializer(_) => "initializer",
            Self::Encode(_) => "encode",
            Self::Decode(_) => "decode",
        }
    }
}

impl ToTokens for Fragment<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::KeyMapping(f) => f.to_tokens(tokens),
            Self::Initializer(f) => f.to_tokens(tokens),
            Self::Encode(f) => f.to_tokens(tokens),
            Self::Decode(f) => f.to_tokens(tokens),
        }
    }
}

///
/// GeneratedArtifact
///
/// Everything one invocation produced. Immutable once returned; the key
/// mapping is shared by the encode and decode bodies.
///

#[derive(Clone, Debug)]
pub struct GeneratedArtifact {
    pub(crate) target: Ident,
    pub(crate) runtime: syn::Path,
    pub(crate) mode: GenerationMode,
    pub(crate) key_mapping: KeyMapping,
    pub(crate) initializer: Initializer,
    pub(crate) encode: Option<EncodeBody>,
    pub(crate) decode: Option<DecodeBody>,
    pub(crate) conformance: Vec<ConformanceMarker>,
}

impl GeneratedArtifact {
    #[must_use]
    pub const fn target(&self) -> &Ident {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> GenerationMode {
        self.mode
    }

    #[must_use]
    pub const fn key_mapping(&self) -> &KeyMapping {
        &self.key_mapping
    }

    #[must_use]
    pub const fn initializer(&self) -> &Initializer {
        &self.initializer
    }

    #[must_use]
    pub const fn encode_body(&self) -> Option<&EncodeBody> {
        self.encode.as_ref()
    }

    #[must_use]
    pub const fn decode_body(&self) -> Option<&DecodeBody> {
        self.decode.as_ref()
    }

    #[must_use]
    pub fn conformance_markers(&self) -> &[ConformanceMarker] {
        &self.conformance
    }

    /// Generated fragments in splice order: key mapping, constructor, encode,
    /// decode.
    #[must_use]
    pub fn fragments(&self) -> Vec<Fragment<'_>> {
        let mut fragments = vec![
            Fragment::KeyMapping(&self.key_mapping),
            Fragment::Initializer(&self.initializer),
        ];
        if let Some(encode) = &self.encode {
            fragments.push(Fragment::Encode(encode));
        }
        if let Some(decode) = &self.decode {
            fragments.push(Fragment::Decode(decode));
        }

        fragments
    }

    // one trait impl per capability, so a Codable marker yields both
    fn conformance_impls(&self) -> TokenStream {
        let target = &self.target;
        let keys = &self.key_mapping.ident;
        let mut impls = TokenStream::new();

        for marker in &self.conformance {
            if marker.encodes()
                && let Some(body) = &self.encode
            {
                let path = ConformanceMarker::Encodable.trait_path(&self.runtime);
                impls.extend(quote! {
                    impl #path for #target {
                        type Keys = #keys;

                        #body
                    }
                });
            }
            if marker.decodes()
                && let Some(body) = &self.decode
            {
                let path = ConformanceMarker::Decodable.trait_path(&self.runtime);
                impls.extend(quote! {
                    impl #path for #target {
                        type Keys = #keys;

                        #body
                    }
                });
            }
        }

        impls
    }
}

impl ToTokens for GeneratedArtifact {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let key_mapping = &self.key_mapping;
        let initializer = &self.initializer;
        let impls = self.conformance_impls();

        tokens.extend(quote! {
            #key_mapping
            #initializer
            #impls
        });
    }
}
