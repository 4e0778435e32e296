use crate::prelude::*;

///
/// ParamDefault
///

#[derive(Clone, Debug, PartialEq)]
pub enum ParamDefault {
    /// The field's declared default expression.
    Expr(Expr),

    /// The absent value of an optional field.
    Absent,

    /// No default; the caller must supply the value.
    Required,
}

impl ParamDefault {
    /// First matching rule wins: declared default, then optionality.
    #[must_use]
    pub fn for_field(field: &FieldDescriptor) -> Self {
        match (&field.default, field.is_optional) {
            (Some(expr), _) => Self::Expr(expr.clone()),
            (None, true) => Self::Absent,
            (None, false) => Self::Required,
        }
    }
}

///
/// Param
///

#[derive(Clone, Debug)]
pub struct Param {
    pub ident: Ident,
    pub ty: Type,
    pub default: ParamDefault,
}

impl Param {
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.default, ParamDefault::Required)
    }

    // field initializer inside the constructor's struct literal
    fn field_init(&self) -> TokenStream {
        let ident = &self.ident;

        match &self.default {
            ParamDefault::Expr(expr) => quote!(#ident: #expr),
            ParamDefault::Absent => quote!(#ident: ::core::option::Option::None),
            ParamDefault::Required => quote!(#ident),
        }
    }
}

///
/// Initializer
///
/// Memberwise constructor. Required parameters become constructor arguments;
/// defaulted ones are filled in and get a `with_*` setter so callers can still
/// supply them.
///

#[derive(Clone, Debug)]
pub struct Initializer {
    pub target: Ident,
    pub vis: Visibility,
    pub constructor: Ident,
    pub setter_prefix: String,
    pub params: Vec<Param>,
}

impl Initializer {
    pub fn required(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(|p| p.is_required())
    }

    pub fn defaulted(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(|p| !p.is_required())
    }

    #[must_use]
    pub fn setter_ident(&self, param: &Param) -> Ident {
        prefixed_ident(&self.setter_prefix, &param.ident)
    }
}

impl ToTokens for Initializer {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            target,
            vis,
            constructor,
            params,
            ..
        } = self;

        let args = self.required().map(|Param { ident, ty, .. }| quote!(#ident: #ty));
        let assignments = params.iter().map(Param::field_init);
        let setters = self.defaulted().map(|param| {
            let Param { ident, ty, .. } = param;
            let setter = self.setter_ident(param);

            quote! {
                #[must_use]
                #vis fn #setter(mut self, #ident: #ty) -> Self {
                    self.#ident = #ident;
                    self
                }
            }
        });

        tokens.extend(quote! {
            impl #target {
                #[allow(clippy::too_many_arguments)]
                #vis fn #constructor(#(#args),*) -> Self {
                    Self {
                        #(#assignments,)*
                    }
                }

                #(#setters)*
            }
        });
    }
}

///
/// InitializerSynth
///

pub struct InitializerSynth;

impl Synthesize for InitializerSynth {
    type Fragment = Initializer;

    fn synthesize(fields: &FieldList, cx: &Context) -> Initializer {
        let params = fields
            .iter()
            .map(|field| Param {
                ident: field.ident.clone(),
                ty: field.ty.clone(),
                default: ParamDefault::for_field(field),
            })
            .collect();

        Initializer {
            target: cx.target.clone(),
            vis: cx.vis.clone(),
            constructor: cx.constructor.clone(),
            setter_prefix: cx.setter_prefix.clone(),
            params,
        }
    }
}

///
/// TESTS
///
