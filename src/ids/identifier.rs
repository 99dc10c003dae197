// ============================================================================
// Identifier
// 128-bit random identifier underlying every typed entity ID
// ============================================================================

use super::error::{IdError, IdResult};
use crate::storage::{Storable, StorageValue};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use uuid::{Builder, Uuid};

/// A 16-byte random identifier.
///
/// Generated values carry the version nibble `0100` in byte 6 and the
/// variant bits `10` in byte 8. The all-zero value ([`Identifier::NIL`]) is
/// reserved to mean "absent"; generation never produces it.
///
/// # Text forms
/// - Canonical (always produced): `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase
/// - Compact (accepted, and available via [`Identifier::to_compact_string`]):
///   32 contiguous hex digits
///
/// Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Identifier(Uuid);

impl Identifier {
    /// The absent identifier (all zero bytes).
    pub const NIL: Self = Self(Uuid::nil());

    /// Raw byte length.
    pub const BYTE_LEN: usize = 16;

    /// Length of the hyphenated text form.
    pub const HYPHENATED_LEN: usize = 36;

    /// Length of the compact text form.
    pub const COMPACT_LEN: usize = 32;

    /// Separator positions in the hyphenated form.
    const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

    // ========================================================================
    // Generation
    // ========================================================================

    /// Generate a fresh identifier from the operating system's secure
    /// random source.
    ///
    /// # Errors
    /// Returns `Entropy` if the random source fails. There is no fallback.
    pub fn generate() -> IdResult<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a fresh identifier from the given random source.
    ///
    /// Fills 16 bytes, then overwrites the version and variant bits.
    pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> IdResult<Self> {
        let mut bytes = [0u8; Self::BYTE_LEN];
        if let Err(err) = rng.try_fill_bytes(&mut bytes) {
            tracing::error!(error = %err, "random source failed during identifier generation");
            return Err(IdError::Entropy(err.to_string()));
        }

        Ok(Self(Builder::from_random_bytes(bytes).into_uuid()))
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse from the 36-character hyphenated or 32-character compact form.
    ///
    /// # Errors
    /// Returns `InvalidFormat` for any other length, for separators not at
    /// positions 8, 13, 18 and 23 of the hyphenated form, and for non-hex
    /// digits.
    pub fn parse(s: &str) -> IdResult<Self> {
        let bytes = s.as_bytes();
        match bytes.len() {
            Self::HYPHENATED_LEN => {
                if Self::HYPHEN_POSITIONS.iter().any(|&i| bytes[i] != b'-') {
                    return Err(IdError::InvalidFormat);
                }
            }
            Self::COMPACT_LEN => {}
            _ => return Err(IdError::InvalidFormat),
        }

        Uuid::try_parse_ascii(bytes)
            .map(Self)
            .map_err(|_| IdError::InvalidFormat)
    }

    // ========================================================================
    // Construction and Accessors
    // ========================================================================

    #[inline]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Copy of the raw bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 16] {
        *self.0.as_bytes()
    }

    /// True only for the all-zero identifier.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// The 32-character lowercase form without separators.
    pub fn to_compact_string(&self) -> String {
        self.0.simple().to_string()
    }
}

// ============================================================================
// Panicking Convenience Layer
// For static initializers and test fixtures only, never for external input.
// ============================================================================

impl Identifier {
    /// Like [`Identifier::generate`], but panics if the random source fails.
    ///
    /// # Panics
    /// Panics on entropy failure.
    pub fn must_generate() -> Self {
        Self::generate().unwrap_or_else(|err| panic!("{}", err))
    }

    /// Like [`Identifier::parse`], but panics on malformed input.
    ///
    /// # Panics
    /// Panics if `s` is not a valid identifier.
    pub fn must_parse(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| panic!("invalid identifier: {}", s))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Identifier {
    #[inline]
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Identifier {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Identifier> for Uuid {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl From<[u8; 16]> for Identifier {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

// ============================================================================
// Storage
// ============================================================================

impl Storable for Identifier {
    type Error = IdError;

    /// The canonical string, or null for the absent identifier.
    fn to_storage(&self) -> StorageValue {
        if self.is_nil() {
            StorageValue::Null
        } else {
            StorageValue::Text(self.to_string())
        }
    }

    /// Accepts either text form, exactly 16 raw bytes, or null.
    fn from_storage(value: &StorageValue) -> Result<Self, Self::Error> {
        match value {
            StorageValue::Null => Ok(Self::NIL),
            StorageValue::Text(s) => Self::parse(s),
            StorageValue::Bytes(b) => match <[u8; 16]>::try_from(b.as_slice()) {
                Ok(raw) => Ok(Self::from_bytes(raw)),
                Err(_) => std::str::from_utf8(b)
                    .map_err(|_| IdError::InvalidFormat)
                    .and_then(Self::parse),
            },
            other => {
                tracing::debug!(source_type = other.type_name(), "rejected identifier storage value");
                Err(IdError::UnsupportedSource(other.type_name()))
            }
        }
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.is_nil() {
            return serializer.serialize_none();
        }
        let mut buf = Uuid::encode_buffer();
        serializer.serialize_str(self.0.hyphenated().encode_lower(&mut buf))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <Option<String> as serde::Deserialize>::deserialize(deserializer)? {
            Some(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            None => Ok(Self::NIL),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
