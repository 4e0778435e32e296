use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// DeclarationKind
///
/// What kind of type declaration the host intercepted. Only reference-semantics,
/// inheritable declarations (`Class`) are accepted by the generator.
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, PartialEq)]
#[remain::sorted]
pub enum DeclarationKind {
    Actor,
    Class,
    Enum,
    Extension,
    Protocol,
    Struct,
}

impl DeclarationKind {
    #[must_use]
    pub const fn is_class_like(self) -> bool {
        matches!(self, Self::Class)
    }
}

///
/// Declaration
///
/// A type declaration as normalized by the host front end.
///

#[derive(Clone, Debug)]
pub struct Declaration {
    pub ident: Ident,
    pub kind: DeclarationKind,
    pub vis: Visibility,
    pub members: Vec<Member>,
}

impl Declaration {
    #[must_use]
    pub const fn new(ident: Ident, kind: DeclarationKind) -> Self {
        Self {
            ident,
            kind,
            vis: Visibility::Inherited,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_vis(mut self, vis: Visibility) -> Self {
        self.vis = vis;
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_members<I: IntoIterator<Item = Member>>(mut self, members: I) -> Self {
        self.members.extend(members);
        self
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_classes_are_class_like() {
        let rejected = [
            DeclarationKind::Actor,
            DeclarationKind::Enum,
            DeclarationKind::Extension,
            DeclarationKind::Protocol,
            DeclarationKind::Struct,
        ];

        assert!(DeclarationKind::Class.is_class_like());
        for kind in rejected {
            assert!(!kind.is_class_like(), "{kind} must not be class-like");
        }
    }

    #[test]
    fn kind_parses_from_its_display_name() {
        for kind in [DeclarationKind::Class, DeclarationKind::Struct] {
            assert_eq!(kind.to_string().parse::<DeclarationKind>().ok(), Some(kind));
        }
        assert!("Record".parse::<DeclarationKind>().is_err());
    }
}
