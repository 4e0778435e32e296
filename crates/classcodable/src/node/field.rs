use crate::prelude::*;
use derive_more::{Deref, IntoIterator};
use syn::{GenericArgument, PathArguments};

///
/// FieldList
///
/// Stored fields in declaration order. Every synthesizer walks this same list,
/// which is what keeps key cases, parameters and statements aligned.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct FieldList {
    #[into_iterator(owned, ref)]
    fields: Vec<FieldDescriptor>,
}

impl FieldList {
    /// Extract descriptors from member declarations.
    ///
    /// Members that are not stored properties, or that lack a type annotation,
    /// are skipped without affecting the relative order of the rest.
    #[must_use]
    pub fn extract<'a, I>(members: I, key_marker: &str) -> Self
    where
        I: IntoIterator<Item = &'a Member>,
    {
        let fields = members
            .into_iter()
            .filter_map(|member| FieldDescriptor::from_member(member, key_marker))
            .collect();

        Self { fields }
    }

    #[must_use]
    pub fn get(&self, ident: &Ident) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.ident == *ident)
    }

    #[must_use]
    pub fn has_default(&self) -> bool {
        self.fields.iter().any(|f| f.default.is_some())
    }
}

impl From<Vec<FieldDescriptor>> for FieldList {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }
}

impl FromIterator<FieldDescriptor> for FieldList {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

///
/// FieldDescriptor
///

#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub ident: Ident,
    pub ty: Type,
    pub is_optional: bool,
    pub default: Option<Expr>,
    pub override_key: Option<String>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(ident: Ident, ty: Type) -> Self {
        let is_optional = option_inner(&ty).is_some();

        Self {
            ident,
            ty,
            is_optional,
            default: None,
            override_key: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, expr: Expr) -> Self {
        self.default = Some(expr);
        self
    }

    #[must_use]
    pub fn with_override_key(mut self, key: impl Into<String>) -> Self {
        self.override_key = Some(key.into());
        self
    }

    /// Build a descriptor from a stored, annotated member.
    ///
    /// The first `key_marker` marker carrying exactly one argument supplies the
    /// override key; later ones are ignored.
    #[must_use]
    pub fn from_member(member: &Member, key_marker: &str) -> Option<Self> {
        if !member.is_stored() {
            return None;
        }
        let ty = member.ty.clone()?;

        let override_key = member
            .markers
            .iter()
            .filter(|m| m.name == key_marker)
            .find_map(Marker::single_arg_text);

        Some(Self {
            override_key,
            default: member.initializer.clone(),
            ..Self::new(member.ident.clone(), ty)
        })
    }

    /// Field name as written, without any raw-identifier prefix.
    #[must_use]
    pub fn name(&self) -> String {
        unraw(&self.ident)
    }

    /// The key this field is serialized under.
    #[must_use]
    pub fn serialized_key(&self) -> String {
        self.override_key.clone().unwrap_or_else(|| self.name())
    }

    /// The wrapped type for optional fields, the declared type otherwise.
    #[must_use]
    pub fn value_type(&self) -> &Type {
        option_inner(&self.ty).unwrap_or(&self.ty)
    }
}

/// Returns `T` when `ty` is syntactically `Option<T>`.
///
/// `Option`, `std::option::Option` and `core::option::Option` are recognised;
/// aliases are not.
#[must_use]
pub fn option_inner(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Group(group) => option_inner(&group.elem),
        Type::Paren(paren) => option_inner(&paren.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let path = &type_path.path;
            let last = path.segments.last()?;

            let qualified = path.segments.len() == 1
                || (path.segments.len() == 3
                    && matches!(path.segments[0].ident.to_string().as_str(), "std" | "core")
                    && path.segments[1].ident == "option");
            if !qualified || last.ident != "Option" {
                return None;
            }

            match &last.arguments {
                PathArguments::AngleBracketed(args) if args.args.len() == 1 => {
                    match args.args.first() {
                        Some(GenericArgument::Type(inner)) => Some(inner),
                        _ => None,
                    }
                }
                _ => None,
            }
        }
        _ => None,
    }
}

///
/// TESTS
///
