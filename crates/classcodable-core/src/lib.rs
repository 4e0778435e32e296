//! Runtime support for code emitted by `classcodable`.
//!
//! Generated key enums implement [`CodingKey`], generated encode bodies drive a
//! [`KeyedEncoder`], and generated decode bodies read from a [`KeyedDecoder`].
//! The [`json`] module provides an object-backed implementation of both.

pub mod coding;
pub mod error;
pub mod json;
pub mod key;

pub use coding::{Codable, Decodable, Encodable, KeyedDecoder, KeyedEncoder};
pub use error::CodingError;
pub use json::{ObjectDecoder, ObjectEncoder, from_str, from_value, to_string, to_value};
pub use key::CodingKey;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        coding::{Codable, Decodable, Encodable, KeyedDecoder, KeyedEncoder},
        error::CodingError,
        key::CodingKey,
    };
}
