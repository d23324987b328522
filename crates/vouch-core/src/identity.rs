//! Fixed-width identifiers used throughout the registry.
//!
//! Identities are 20-byte account references; type ids and metadata
//! references are 32-byte hashes. All three render as `0x`-prefixed hex
//! and parse back from hex with or without the prefix.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Failure to parse a fixed-width identifier from hex
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseIdError {
    #[error("expected {expected} hex bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], ParseIdError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseIdError::InvalidLength { expected: N, got })
}

/// An opaque, externally-authenticated account reference (20 bytes).
///
/// The all-zero identity is reserved as "null" and is never a valid
/// credential recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(pub [u8; 20]);

impl Identity {
    /// The reserved null identity
    pub const ZERO: Identity = Identity([0u8; 20]);

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for Identity {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a credential type (32-byte fingerprint).
///
/// Derived from the type's name and its creator, so the same name
/// registered by two creators yields two independent ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub [u8; 32]);

impl TypeId {
    /// Fingerprint a `(name, creator)` pair: `Keccak-256(name || creator)`
    pub fn for_type(name: &str, creator: &Identity) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(name.as_bytes());
        hasher.update(creator.as_bytes());
        Self(hasher.finalize().into())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for TypeId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl Serialize for TypeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TypeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Opaque reference to off-chain metadata (32 bytes).
///
/// The registry stores and returns it verbatim; resolving it to content
/// is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataHash(pub [u8; 32]);

impl MetadataHash {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Display for MetadataHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for MetadataHash {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl Serialize for MetadataHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for MetadataHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(byte: u8) -> Identity {
        Identity::from_bytes([byte; 20])
    }

    #[test]
    fn test_type_id_deterministic() {
        let creator = identity(1);
        let a = TypeId::for_type("NBA Player", &creator);
        let b = TypeId::for_type("NBA Player", &creator);
        assert_eq!(a, b);
    }

    #[test]
    fn test_type_id_varies_by_creator() {
        let a = TypeId::for_type("NBA Player", &identity(1));
        let b = TypeId::for_type("NBA Player", &identity(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_type_id_varies_by_name() {
        let creator = identity(1);
        let a = TypeId::for_type("NBA Player", &creator);
        let b = TypeId::for_type("NBA Coach", &creator);
        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_hex_round_trip() {
        let id = identity(0xab);
        let parsed: Identity = id.to_hex().parse().unwrap();
        assert_eq!(parsed, id);

        // Unprefixed hex parses too
        let bare: Identity = hex::encode(id.0).parse().unwrap();
        assert_eq!(bare, id);
    }

    #[test]
    fn test_identity_rejects_wrong_length() {
        let err = "0xabcd".parse::<Identity>().unwrap_err();
        assert_eq!(
            err,
            ParseIdError::InvalidLength {
                expected: 20,
                got: 2
            }
        );
    }

    #[test]
    fn test_identity_rejects_bad_hex() {
        assert!(matches!(
            "0xzz".parse::<Identity>(),
            Err(ParseIdError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_zero_identity() {
        assert!(Identity::ZERO.is_zero());
        assert!(!identity(1).is_zero());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = TypeId::for_type("badge", &identity(3));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_hex()));

        let back: TypeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
