//! The four synthesizers.
//!
//! Each one is a pure function of the ordered [`FieldList`] and the shared
//! [`Context`]; none of them re-inspects member declarations.

mod decode;
mod encode;
mod init;
mod keys;

pub use self::decode::*;
pub use self::encode::*;
pub use self::init::*;
pub use self::keys::*;

use crate::prelude::*;

///
/// Synthesize
///

pub trait Synthesize {
    type Fragment;

    fn synthesize(fields: &FieldList, cx: &Context) -> Self::Fragment;
}

///
/// Presence
///
/// Whether a field is written/read unconditionally or only when present.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Presence {
    Required,
    IfPresent,
}

impl Presence {
    #[must_use]
    pub const fn of(field: &FieldDescriptor) -> Self {
        if field.is_optional {
            Self::IfPresent
        } else {
            Self::Required
        }
    }
}

///
/// Context
///
/// Names shared by every fragment of one artifact.
///

#[derive(Clone, Debug)]
pub struct Context {
    pub target: Ident,
    pub vis: Visibility,
    pub keys: Ident,
    pub runtime: syn::Path,
    pub constructor: Ident,
    pub setter_prefix: String,
}
