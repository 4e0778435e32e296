use crate::prelude::*;

///
/// MemberKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum MemberKind {
    ComputedProperty,
    Initializer,
    Method,
    NestedType,
    StoredProperty,
}

///
/// Member
///
/// One member declaration inside a type body. `ty` is the explicit type
/// annotation, `initializer` the verbatim initializer expression.
///

#[derive(Clone, Debug)]
pub struct Member {
    pub kind: MemberKind,
    pub ident: Ident,
    pub ty: Option<Type>,
    pub initializer: Option<Expr>,
    pub markers: Vec<Marker>,
}

impl Member {
    #[must_use]
    pub const fn new(kind: MemberKind, ident: Ident) -> Self {
        Self {
            kind,
            ident,
            ty: None,
            initializer: None,
            markers: Vec::new(),
        }
    }

    /// A stored property with an explicit type annotation.
    #[must_use]
    pub fn stored(ident: Ident, ty: Type) -> Self {
        Self::new(MemberKind::StoredProperty, ident).with_type(ty)
    }

    #[must_use]
    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    #[must_use]
    pub fn with_default(mut self, expr: Expr) -> Self {
        self.initializer = Some(expr);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub const fn is_stored(&self) -> bool {
        matches!(self.kind, MemberKind::StoredProperty)
    }
}
