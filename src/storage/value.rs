// ============================================================================
// Storage Value
// Driver-level representation of a persisted column value
// ============================================================================

use std::fmt;

/// A single column value as a storage driver returns it.
///
/// Drivers differ in which host type they use for the same column: an
/// integer column may come back as `Int32` from one driver and `Int64` from
/// another, and a UUID column may arrive as text or as raw bytes. Value types
/// implementing [`Storable`] normalize every accepted variant themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    /// SQL `NULL`
    Null,
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl StorageValue {
    /// Name of the host type, used in "unsupported source" diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Bool(_) => "bool",
            StorageValue::Int16(_) => "i16",
            StorageValue::Int32(_) => "i32",
            StorageValue::Int64(_) => "i64",
            StorageValue::Float64(_) => "f64",
            StorageValue::Text(_) => "text",
            StorageValue::Bytes(_) => "bytes",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }
}

impl fmt::Display for StorageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageValue::Null => write!(f, "NULL"),
            StorageValue::Bool(v) => write!(f, "{}", v),
            StorageValue::Int16(v) => write!(f, "{}", v),
            StorageValue::Int32(v) => write!(f, "{}", v),
            StorageValue::Int64(v) => write!(f, "{}", v),
            StorageValue::Float64(v) => write!(f, "{}", v),
            StorageValue::Text(v) => write!(f, "'{}'", v),
            StorageValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl From<i64> for StorageValue {
    fn from(v: i64) -> Self {
        StorageValue::Int64(v)
    }
}

impl From<i32> for StorageValue {
    fn from(v: i32) -> Self {
        StorageValue::Int32(v)
    }
}

impl From<f64> for StorageValue {
    fn from(v: f64) -> Self {
        StorageValue::Float64(v)
    }
}

impl From<String> for StorageValue {
    fn from(v: String) -> Self {
        StorageValue::Text(v)
    }
}

impl From<&str> for StorageValue {
    fn from(v: &str) -> Self {
        StorageValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(v: Vec<u8>) -> Self {
        StorageValue::Bytes(v)
    }
}

impl<T: Into<StorageValue>> From<Option<T>> for StorageValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(StorageValue::Null, Into::into)
    }
}

/// Conversion between a value type and its persisted form.
///
/// Implementations must decode [`StorageValue::Null`] to the type's zero
/// value, and must reject host types they do not accept with an error
/// rather than substituting a default.
pub trait Storable: Sized {
    /// Error returned when a persisted value cannot be decoded.
    type Error;

    /// Encode into the value written to storage.
    fn to_storage(&self) -> StorageValue;

    /// Decode a value read back from storage.
    fn from_storage(value: &StorageValue) -> Result<Self, Self::Error>;
}
