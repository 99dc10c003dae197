// ============================================================================
// Storage Module
// Persisted-value contract shared by identifiers and money
// ============================================================================
//
// This module provides:
// - StorageValue: the host types a storage driver can hand back
// - Storable: encode/decode to and from a StorageValue
//
// Both primitives decode a null value to their zero value without error.

mod value;

pub use value::{Storable, StorageValue};
