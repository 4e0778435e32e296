//! Generation tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect the
//! generated artifact.

use crate::{
    dispatch::{GeneratePhase, GenerationMode},
    node::DeclarationKind,
};
use sha2::{Digest, Sha256};
use std::fmt;
use syn::Ident;

///
/// GenerateTraceSink
///

pub trait GenerateTraceSink: Send + Sync {
    fn on_event(&self, event: GenerateTraceEvent);
}

///
/// Fingerprint
///
/// Stable identity of one (type, mode) invocation.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

///
/// GenerateTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerateTraceEvent {
    Start {
        fingerprint: Fingerprint,
        mode: GenerationMode,
    },
    Phase {
        fingerprint: Fingerprint,
        mode: GenerationMode,
        phase: GeneratePhase,
        fields: u32,
    },
    Finish {
        fingerprint: Fingerprint,
        mode: GenerationMode,
        fragments: u32,
    },
    Error {
        fingerprint: Fingerprint,
        mode: GenerationMode,
        kind: DeclarationKind,
    },
}

///
/// TraceScope
///

pub(crate) struct TraceScope {
    sink: &'static dyn GenerateTraceSink,
    fingerprint: Fingerprint,
    mode: GenerationMode,
}

impl TraceScope {
    fn new(
        sink: &'static dyn GenerateTraceSink,
        fingerprint: Fingerprint,
        mode: GenerationMode,
    ) -> Self {
        sink.on_event(GenerateTraceEvent::Start { fingerprint, mode });

        Self {
            sink,
            fingerprint,
            mode,
        }
    }

    pub(crate) fn phase(&self, phase: GeneratePhase, fields: usize) {
        self.sink.on_event(GenerateTraceEvent::Phase {
            fingerprint: self.fingerprint,
            mode: self.mode,
            phase,
            fields: saturating_u32(fields),
        });
    }

    pub(crate) fn finish(self, fragments: usize) {
        self.sink.on_event(GenerateTraceEvent::Finish {
            fingerprint: self.fingerprint,
            mode: self.mode,
            fragments: saturating_u32(fragments),
        });
    }

    pub(crate) fn error(self, kind: DeclarationKind) {
        self.sink.on_event(GenerateTraceEvent::Error {
            fingerprint: self.fingerprint,
            mode: self.mode,
            kind,
        });
    }
}

pub(crate) fn start_trace(
    sink: Option<&'static dyn GenerateTraceSink>,
    target: &Ident,
    mode: GenerationMode,
) -> Option<TraceScope> {
    let sink = sink?;
    let fingerprint = generate_fingerprint(target, mode);

    Some(TraceScope::new(sink, fingerprint, mode))
}

/// Fingerprint of one invocation; equal inputs always hash equal.
#[must_use]
pub fn generate_fingerprint(target: &Ident, mode: GenerationMode) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(b"genfp:v1");
    hasher.update([mode_tag(mode)]);
    write_str(&mut hasher, &target.to_string());

    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);

    Fingerprint::from_bytes(out)
}

const fn mode_tag(mode: GenerationMode) -> u8 {
    match mode {
        GenerationMode::EncodeOnly => 0x01,
        GenerationMode::DecodeOnly => 0x02,
        GenerationMode::Both => 0x03,
    }
}

fn write_str(hasher: &mut Sha256, value: &str) {
    let len = u32::try_from(value.len()).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
    hasher.update(value.as_bytes());
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

///
/// TESTS
///
