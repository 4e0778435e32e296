use crate::key::CodingKey;
use serde::{Serialize, de::DeserializeOwned};

///
/// KeyedEncoder
///
/// Output sink addressed by a generated key enum.
///

pub trait KeyedEncoder<K: CodingKey> {
    type Error;

    /// Write `value` under `key` unconditionally.
    fn encode<T>(&mut self, key: K, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized;

    /// Write `value` under `key` only when it is present.
    fn encode_if_present<T>(&mut self, key: K, value: Option<&T>) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        match value {
            Some(value) => self.encode(key, value),
            None => Ok(()),
        }
    }
}

///
/// KeyedDecoder
///
/// Input source addressed by a generated key enum.
///

pub trait KeyedDecoder<K: CodingKey> {
    type Error;

    fn contains(&self, key: K) -> bool;

    /// Read a required value; a missing key or a mismatched value is an error.
    fn decode<T: DeserializeOwned>(&self, key: K) -> Result<T, Self::Error>;

    /// Read an optional value; a missing key yields `None`.
    fn decode_if_present<T: DeserializeOwned>(&self, key: K) -> Result<Option<T>, Self::Error>;
}

///
/// Encodable
///

pub trait Encodable {
    type Keys: CodingKey;

    fn encode<E: KeyedEncoder<Self::Keys>>(&self, encoder: &mut E) -> Result<(), E::Error>;
}

///
/// Decodable
///

pub trait Decodable: Sized {
    type Keys: CodingKey;

    fn decode<D: KeyedDecoder<Self::Keys>>(decoder: &D) -> Result<Self, D::Error>;
}

///
/// Codable
///
/// Any type that is both [`Encodable`] and [`Decodable`].
///

pub trait Codable: Encodable + Decodable {}

impl<T: Encodable + Decodable> Codable for T {}
