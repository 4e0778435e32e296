//! JSON object backend for generated encode/decode bodies.

use crate::{
    coding::{Decodable, Encodable, KeyedDecoder, KeyedEncoder},
    error::CodingError,
    key::CodingKey,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

///
/// ObjectEncoder
///
/// Collects keyed values into a JSON object. Keys keep insertion order only
/// as far as `serde_json::Map` does; readers address values by key.
///

#[derive(Clone, Debug, Default)]
pub struct ObjectEncoder {
    map: Map<String, Value>,
}

impl ObjectEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl<K: CodingKey> KeyedEncoder<K> for ObjectEncoder {
    type Error = CodingError;

    fn encode<T>(&mut self, key: K, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        let key = key.as_str();
        let value =
            serde_json::to_value(value).map_err(|source| CodingError::Encode { key, source })?;
        self.map.insert(key.to_string(), value);

        Ok(())
    }
}

///
/// ObjectDecoder
///

#[derive(Clone, Copy, Debug)]
pub struct ObjectDecoder<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> ObjectDecoder<'a> {
    pub fn new(value: &'a Value) -> Result<Self, CodingError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(CodingError::NotAnObject {
                found: value_kind(other),
            }),
        }
    }

    #[must_use]
    pub const fn from_map(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }
}

impl<K: CodingKey> KeyedDecoder<K> for ObjectDecoder<'_> {
    type Error = CodingError;

    fn contains(&self, key: K) -> bool {
        self.map.contains_key(key.as_str())
    }

    fn decode<T: DeserializeOwned>(&self, key: K) -> Result<T, Self::Error> {
        let key = key.as_str();
        let value = self.map.get(key).ok_or(CodingError::MissingKey { key })?;

        T::deserialize(value).map_err(|source| CodingError::TypeMismatch { key, source })
    }

    fn decode_if_present<T: DeserializeOwned>(&self, key: K) -> Result<Option<T>, Self::Error> {
        let key = key.as_str();

        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|source| CodingError::TypeMismatch { key, source }),
        }
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//
// helpers
//

/// Encode a value into a JSON object.
pub fn to_value<T: Encodable>(value: &T) -> Result<Value, CodingError> {
    let mut encoder = ObjectEncoder::new();
    Encodable::encode(value, &mut encoder)?;

    Ok(encoder.into_value())
}

/// Decode a value from a JSON object.
pub fn from_value<T: Decodable>(value: &Value) -> Result<T, CodingError> {
    let decoder = ObjectDecoder::new(value)?;

    Decodable::decode(&decoder)
}

pub fn to_string<T: Encodable>(value: &T) -> Result<String, CodingError> {
    let value = to_value(value)?;

    Ok(serde_json::to_string(&value)?)
}

pub fn from_str<T: Decodable>(s: &str) -> Result<T, CodingError> {
    let value: Value = serde_json::from_str(s)?;

    from_value(&value)
}

///
/// TESTS
///
