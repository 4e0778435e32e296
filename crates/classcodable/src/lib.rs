//! Declarative serialization boilerplate for class-like records.
//!
//! A host hands [`generate`] a normalized [`Declaration`] and a
//! [`GenerationMode`]; the engine extracts the stored fields once and returns a
//! [`GeneratedArtifact`] holding a key mapping, a memberwise constructor and,
//! depending on the mode, keyed encode and decode bodies plus the conformance
//! markers the host should attach.
//!
//! Every fragment is a structured value that renders to Rust tokens through
//! [`quote::ToTokens`]. Rendered code targets the `classcodable-core` runtime.
//!
//! ```rust
//! use classcodable::{Declaration, DeclarationKind, GenerationMode, Marker, Member, generate};
//! use syn::parse_quote;
//!
//! let person = Declaration::new(parse_quote!(Person), DeclarationKind::Class)
//!     .with_member(Member::stored(parse_quote!(id), parse_quote!(String)))
//!     .with_member(
//!         Member::stored(parse_quote!(name), parse_quote!(String))
//!             .with_default(parse_quote!("Mr.".to_string()))
//!             .with_marker(Marker::new("codable_key").with_arg(parse_quote!("full_name"))),
//!     )
//!     .with_member(Member::stored(parse_quote!(note), parse_quote!(Option<String>)));
//!
//! let artifact = generate(&person, GenerationMode::Both).unwrap();
//! let keys: Vec<_> = artifact.key_mapping().pairs().collect();
//!
//! assert_eq!(keys, [("id".to_string(), "id"), ("name".to_string(), "full_name"), ("note".to_string(), "note")]);
//! assert!(artifact.encode_body().is_some() && artifact.decode_body().is_some());
//! ```

pub mod artifact;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod node;
pub mod synth;
pub mod trace;

mod helper;

pub use artifact::{ConformanceMarker, Fragment, GeneratedArtifact};
pub use config::{ConfigError, GeneratorConfig};
pub use dispatch::{GeneratePhase, GenerationMode, Generator, generate};
pub use error::GenerationError;
pub use node::{Declaration, DeclarationKind, FieldDescriptor, FieldList, Marker, Member, MemberKind};
pub use trace::{Fingerprint, GenerateTraceEvent, GenerateTraceSink};

///
/// Prelude
///

pub(crate) mod prelude {
    pub use crate::{
        helper::*,
        node::*,
        synth::{Context, Presence, Synthesize},
    };
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, format_ident, quote};
    pub use syn::{Expr, Ident, Lit, Type, Visibility};
}
