use crate::{
    artifact::{ConformanceMarker, GeneratedArtifact},
    config::{ConfigError, GeneratorConfig, ResolvedConfig},
    error::GenerationError,
    prelude::*,
    synth::{DecoderSynth, EncoderSynth, InitializerSynth, KeyMappingSynth},
    trace::{GenerateTraceSink, start_trace},
};
use darling::FromMeta;
use derive_more::{Display, FromStr};

///
/// GenerationMode
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, PartialEq)]
pub enum GenerationMode {
    EncodeOnly,
    DecodeOnly,
    Both,
}

impl GenerationMode {
    #[must_use]
    pub const fn encodes(self) -> bool {
        matches!(self, Self::EncodeOnly | Self::Both)
    }

    #[must_use]
    pub const fn decodes(self) -> bool {
        matches!(self, Self::DecodeOnly | Self::Both)
    }
}

impl FromMeta for GenerationMode {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }
}

///
/// GeneratePhase
///
/// Linear dispatcher states; there is no path back to an earlier phase.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum GeneratePhase {
    Validating,
    Extracting,
    Synthesizing,
    Done,
}

///
/// Generator
///
/// Resolved configuration plus an optional trace sink. Holds no state between
/// invocations.
///

#[derive(Clone, Default)]
pub struct Generator {
    config: ResolvedConfig,
    sink: Option<&'static dyn GenerateTraceSink>,
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.resolve()?,
            sink: None,
        })
    }

    #[must_use]
    pub fn with_trace_sink(mut self, sink: &'static dyn GenerateTraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run one generation: validate the declaration kind, extract the stored
    /// fields once, then synthesize the fragments `mode` asks for.
    pub fn generate(
        &self,
        declaration: &Declaration,
        mode: GenerationMode,
    ) -> Result<GeneratedArtifact, GenerationError> {
        let trace = start_trace(self.sink, &declaration.ident, mode);

        // validating
        if let Some(trace) = &trace {
            trace.phase(GeneratePhase::Validating, 0);
        }
        if !declaration.kind.is_class_like() {
            if let Some(trace) = trace {
                trace.error(declaration.kind);
            }

            return Err(GenerationError::OnlyApplicableToRecordType);
        }

        // extracting
        let fields = FieldList::extract(&declaration.members, &self.config.key_marker);
        if let Some(trace) = &trace {
            trace.phase(GeneratePhase::Extracting, fields.len());
        }

        // synthesizing
        let cx = self.context(declaration);
        let artifact = GeneratedArtifact {
            target: cx.target.clone(),
            runtime: cx.runtime.clone(),
            mode,
            key_mapping: KeyMappingSynth::synthesize(&fields, &cx),
            initializer: InitializerSynth::synthesize(&fields, &cx),
            encode: mode
                .encodes()
                .then(|| EncoderSynth::synthesize(&fields, &cx)),
            decode: mode
                .decodes()
                .then(|| DecoderSynth::synthesize(&fields, &cx)),
            conformance: vec![ConformanceMarker::for_mode(mode)],
        };
        if let Some(trace) = &trace {
            trace.phase(GeneratePhase::Synthesizing, fields.len());
        }

        // done
        if let Some(trace) = trace {
            trace.phase(GeneratePhase::Done, fields.len());
            trace.finish(artifact.fragments().len());
        }

        Ok(artifact)
    }

    fn context(&self, declaration: &Declaration) -> Context {
        let keys = self
            .config
            .keys_ident
            .clone()
            .unwrap_or_else(|| format_ident!("{}CodingKeys", unraw(&declaration.ident)));

        Context {
            target: declaration.ident.clone(),
            vis: declaration.vis.clone(),
            keys,
            runtime: self.config.runtime.clone(),
            constructor: self.config.constructor.clone(),
            setter_prefix: self.config.setter_prefix.clone(),
        }
    }
}

/// Generate with the default configuration and no tracing.
pub fn generate(
    declaration: &Declaration,
    mode: GenerationMode,
) -> Result<GeneratedArtifact, GenerationError> {
    Generator::default().generate(declaration, mode)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::GenerateTraceEvent;
    use darling::ast::NestedMeta;
    use std::sync::Mutex;
    use syn::parse_quote;

    fn person(kind: DeclarationKind) -> Declaration {
        Declaration::new(parse_quote!(Person), kind)
            .with_member(Member::stored(parse_quote!(id), parse_quote!(String)))
            .with_member(Member::new(MemberKind::Method, parse_quote!(greet)))
            .with_member(Member::stored(parse_quote!(note), parse_quote!(Option<String>)))
    }

    #[test]
    fn mode_selects_bodies_and_marker() {
        let decl = person(DeclarationKind::Class);

        let encode = generate(&decl, GenerationMode::EncodeOnly).unwrap();
        assert!(encode.encode_body().is_some());
        assert!(encode.decode_body().is_none());
        assert_eq!(encode.conformance_markers(), [ConformanceMarker::Encodable]);

        let decode = generate(&decl, GenerationMode::DecodeOnly).unwrap();
        assert!(decode.encode_body().is_none());
        assert!(decode.decode_body().is_some());
        assert_eq!(decode.conformance_markers(), [ConformanceMarker::Decodable]);

        let both = generate(&decl, GenerationMode::Both).unwrap();
        assert!(both.encode_body().is_some());
        assert!(both.decode_body().is_some());
        assert_eq!(both.conformance_markers(), [ConformanceMarker::Codable]);
    }

    #[test]
    fn non_class_declarations_are_rejected_in_every_mode() {
        for kind in [
            DeclarationKind::Struct,
            DeclarationKind::Enum,
            DeclarationKind::Actor,
        ] {
            for mode in [
                GenerationMode::EncodeOnly,
                GenerationMode::DecodeOnly,
                GenerationMode::Both,
            ] {
                assert_eq!(
                    generate(&person(kind), mode).unwrap_err(),
                    GenerationError::OnlyApplicableToRecordType
                );
            }
        }
    }

    #[test]
    fn keys_ident_defaults_per_type_and_can_be_fixed() {
        let decl = person(DeclarationKind::Class);
        let derived = generate(&decl, GenerationMode::Both).unwrap();
        assert_eq!(derived.key_mapping().ident, "PersonCodingKeys");

        let config = GeneratorConfig {
            keys_ident: Some("CodingKeys".to_string()),
            ..GeneratorConfig::default()
        };
        let fixed = Generator::new(&config)
            .unwrap()
            .generate(&decl, GenerationMode::Both)
            .unwrap();
        assert_eq!(fixed.key_mapping().ident, "CodingKeys");
    }

    #[test]
    fn configured_key_marker_is_honoured() {
        let decl = Declaration::new(parse_quote!(Person), DeclarationKind::Class).with_member(
            Member::stored(parse_quote!(id), parse_quote!(String))
                .with_marker(Marker::new("codable_key").with_arg(parse_quote!("ignored")))
                .with_marker(Marker::new("serde_key").with_arg(parse_quote!("birth_id"))),
        );
        let config = GeneratorConfig {
            key_marker: "serde_key".to_string(),
            ..GeneratorConfig::default()
        };

        let artifact = Generator::new(&config)
            .unwrap()
            .generate(&decl, GenerationMode::EncodeOnly)
            .unwrap();

        assert_eq!(
            artifact.key_mapping().key_for(&parse_quote!(id)),
            Some("birth_id")
        );
    }

    #[test]
    fn mode_parses_from_attribute_meta() {
        let meta: NestedMeta = parse_quote!("DecodeOnly");
        let bad: NestedMeta = parse_quote!("Sometimes");

        assert_eq!(
            GenerationMode::from_nested_meta(&meta).unwrap(),
            GenerationMode::DecodeOnly
        );
        assert!(GenerationMode::from_nested_meta(&bad).is_err());
    }

    //
    // tracing
    //

    struct RecordingSink(Mutex<Vec<GenerateTraceEvent>>);

    impl GenerateTraceSink for RecordingSink {
        fn on_event(&self, event: GenerateTraceEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn recording_sink() -> &'static RecordingSink {
        Box::leak(Box::new(RecordingSink(Mutex::new(Vec::new()))))
    }

    fn phases(events: &[GenerateTraceEvent]) -> Vec<GeneratePhase> {
        events
            .iter()
            .filter_map(|event| match event {
                GenerateTraceEvent::Phase { phase, .. } => Some(*phase),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn trace_walks_every_phase_in_order() {
        let sink = recording_sink();
        let generator = Generator::default().with_trace_sink(sink);

        generator
            .generate(&person(DeclarationKind::Class), GenerationMode::Both)
            .unwrap();

        let events = sink.0.lock().unwrap();
        assert!(matches!(events.first(), Some(GenerateTraceEvent::Start { .. })));
        assert_eq!(
            phases(&events),
            [
                GeneratePhase::Validating,
                GeneratePhase::Extracting,
                GeneratePhase::Synthesizing,
                GeneratePhase::Done,
            ]
        );
        assert!(matches!(
            events.last(),
            Some(GenerateTraceEvent::Finish { fragments: 4, .. })
        ));
    }

    #[test]
    fn trace_reports_rejection_without_later_phases() {
        let sink = recording_sink();
        let generator = Generator::default().with_trace_sink(sink);

        let _ = generator.generate(&person(DeclarationKind::Struct), GenerationMode::EncodeOnly);

        let events = sink.0.lock().unwrap();
        assert_eq!(phases(&events), [GeneratePhase::Validating]);
        assert!(matches!(
            events.last(),
            Some(GenerateTraceEvent::Error {
                kind: DeclarationKind::Struct,
                ..
            })
        ));
    }

    #[test]
    fn tracing_does_not_change_the_artifact() {
        let decl = person(DeclarationKind::Class);
        let plain = generate(&decl, GenerationMode::Both).unwrap();
        let traced = Generator::default()
            .with_trace_sink(recording_sink())
            .generate(&decl, GenerationMode::Both)
            .unwrap();

        assert_eq!(
            plain.to_token_stream().to_string(),
            traced.to_token_stream().to_string()
        );
    }
}
