use classcodable::{
    Declaration, DeclarationKind, GenerationMode, Marker, Member, MemberKind, generate,
    synth::{ParamDefault, Presence},
};
use proptest::prelude::*;
use quote::{ToTokens, format_ident};
use syn::{Lit, LitStr, parse_quote};

///
/// FieldShape
///

#[derive(Clone, Debug)]
struct FieldShape {
    optional: bool,
    default: bool,
    key: Option<String>,
    // a method declared just before this field
    preceded_by_method: bool,
}

fn field_shape() -> impl Strategy<Value = FieldShape> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[a-z][a-z_]{0,11}"),
        any::<bool>(),
    )
        .prop_map(|(optional, default, key, preceded_by_method)| FieldShape {
            optional,
            default,
            key,
            preceded_by_method,
        })
}

fn mode() -> impl Strategy<Value = GenerationMode> {
    prop_oneof![
        Just(GenerationMode::EncodeOnly),
        Just(GenerationMode::DecodeOnly),
        Just(GenerationMode::Both),
    ]
}

fn declaration(shapes: &[FieldShape]) -> Declaration {
    let mut decl = Declaration::new(parse_quote!(Record), DeclarationKind::Class);

    for (i, shape) in shapes.iter().enumerate() {
        if shape.preceded_by_method {
            decl = decl.with_member(Member::new(MemberKind::Method, format_ident!("m{i}")));
        }

        let ty: syn::Type = if shape.optional {
            parse_quote!(Option<u32>)
        } else {
            parse_quote!(u32)
        };
        let mut member = Member::stored(format_ident!("f{i}"), ty);
        if shape.default {
            member = member.with_default(parse_quote!(7));
        }
        if let Some(key) = &shape.key {
            let lit = Lit::Str(LitStr::new(key, proc_macro2::Span::call_site()));
            member = member.with_marker(Marker::new("codable_key").with_arg(lit));
        }

        decl = decl.with_member(member);
    }

    decl
}

proptest! {
    #[test]
    fn key_mapping_preserves_order_and_falls_back_to_names(
        shapes in prop::collection::vec(field_shape(), 0..12),
        mode in mode(),
    ) {
        let artifact = generate(&declaration(&shapes), mode).unwrap();
        let pairs: Vec<_> = artifact.key_mapping().pairs().collect();

        prop_assert_eq!(pairs.len(), shapes.len());
        for (i, ((name, key), shape)) in pairs.iter().zip(&shapes).enumerate() {
            let expected_name = format!("f{i}");
            prop_assert_eq!(name, &expected_name);
            prop_assert_eq!(*key, shape.key.as_deref().unwrap_or(&expected_name));
        }
    }

    #[test]
    fn initializer_defaults_follow_declared_default_then_optionality(
        shapes in prop::collection::vec(field_shape(), 0..12),
    ) {
        let artifact = generate(&declaration(&shapes), GenerationMode::Both).unwrap();
        let params = &artifact.initializer().params;

        prop_assert_eq!(params.len(), shapes.len());
        for (param, shape) in params.iter().zip(&shapes) {
            let expected = match (shape.default, shape.optional) {
                (true, _) => ParamDefault::Expr(parse_quote!(7)),
                (false, true) => ParamDefault::Absent,
                (false, false) => ParamDefault::Required,
            };
            prop_assert_eq!(&param.default, &expected);
        }

        let required = artifact.initializer().required().count();
        prop_assert_eq!(required, shapes.iter().filter(|s| !s.default && !s.optional).count());
    }

    #[test]
    fn statements_follow_declaration_order_and_optionality(
        shapes in prop::collection::vec(field_shape(), 0..12),
    ) {
        let artifact = generate(&declaration(&shapes), GenerationMode::Both).unwrap();
        let encode = artifact.encode_body().unwrap();
        let decode = artifact.decode_body().unwrap();

        prop_assert_eq!(encode.stmts.len(), shapes.len());
        prop_assert_eq!(decode.stmts.len(), shapes.len());

        let u32_ty: syn::Type = parse_quote!(u32);
        for (i, ((write, read), shape)) in encode.stmts.iter().zip(&decode.stmts).zip(&shapes).enumerate() {
            let expected = if shape.optional { Presence::IfPresent } else { Presence::Required };
            let field = format_ident!("f{i}");

            prop_assert_eq!(write.presence, expected);
            prop_assert_eq!(read.presence, expected);
            prop_assert_eq!(&write.field, &field);
            prop_assert_eq!(&read.field, &field);
            prop_assert_eq!(&read.ty, &u32_ty);
        }
    }

    #[test]
    fn every_mode_renders_parseable_rust(
        shapes in prop::collection::vec(field_shape(), 0..8),
        mode in mode(),
    ) {
        let artifact = generate(&declaration(&shapes), mode).unwrap();

        prop_assert!(artifact.encode_body().is_some() == mode.encodes());
        prop_assert!(artifact.decode_body().is_some() == mode.decodes());
        prop_assert!(syn::parse2::<syn::File>(artifact.to_token_stream()).is_ok());
    }
}
