// ============================================================================
// Typed Identifiers
// One generic new-type over Identifier, instantiated per entity kind
// ============================================================================

use super::error::{IdError, IdResult};
use super::identifier::Identifier;
use crate::storage::{Storable, StorageValue};
use rand::RngCore;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// Marker for an entity kind that owns a typed identifier.
pub trait Entity: 'static {
    /// Name used in diagnostics, e.g. `"UserID"`.
    const NAME: &'static str;
}

/// An [`Identifier`] tagged with the entity kind it identifies.
///
/// `TypedId<Driver>` and `TypedId<User>` have identical layout but are
/// distinct types, so a driver ID cannot be passed where a user ID is
/// expected. Every operation forwards to the wrapped [`Identifier`].
///
/// # Example
/// ```
/// use txova_types::ids::{DriverId, UserId};
///
/// let user = UserId::must_generate();
/// let parsed: UserId = user.to_string().parse().unwrap();
/// assert_eq!(user, parsed);
///
/// let err = DriverId::parse("12345").unwrap_err();
/// assert_eq!(err.to_string(), "invalid DriverID: invalid identifier format");
/// ```
#[repr(transparent)]
pub struct TypedId<E: Entity> {
    id: Identifier,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> TypedId<E> {
    /// The absent ID.
    pub const NIL: Self = Self::from_identifier(Identifier::NIL);

    #[inline]
    pub const fn from_identifier(id: Identifier) -> Self {
        Self {
            id,
            _entity: PhantomData,
        }
    }

    #[inline]
    pub const fn identifier(&self) -> Identifier {
        self.id
    }

    /// Entity name used in diagnostics.
    #[inline]
    pub const fn entity_name() -> &'static str {
        E::NAME
    }

    /// Generate a fresh ID from the operating system's secure random source.
    pub fn generate() -> IdResult<Self> {
        Identifier::generate().map(Self::from_identifier)
    }

    /// Generate a fresh ID from the given random source.
    pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> IdResult<Self> {
        Identifier::generate_with(rng).map(Self::from_identifier)
    }

    /// Parse from the hyphenated or compact text form.
    ///
    /// # Errors
    /// Returns `InvalidEntityId` naming this entity kind.
    pub fn parse(s: &str) -> IdResult<Self> {
        Identifier::parse(s)
            .map(Self::from_identifier)
            .map_err(|err| err.for_entity(E::NAME))
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.id.is_nil()
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.id.as_bytes()
    }

    pub fn to_compact_string(&self) -> String {
        self.id.to_compact_string()
    }

    /// Like [`TypedId::generate`], but panics if the random source fails.
    ///
    /// For fixtures and static initializers only.
    pub fn must_generate() -> Self {
        Self::from_identifier(Identifier::must_generate())
    }

    /// Like [`TypedId::parse`], but panics on malformed input.
    ///
    /// For fixtures and static initializers only, never for external input.
    pub fn must_parse(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|err| panic!("{}", err))
    }
}

// ============================================================================
// Trait Implementations
// Written by hand so that no bounds are placed on the marker type.
// ============================================================================

impl<E: Entity> Clone for TypedId<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for TypedId<E> {}

impl<E: Entity> PartialEq for TypedId<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E: Entity> Eq for TypedId<E> {}

impl<E: Entity> PartialOrd for TypedId<E> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Entity> Ord for TypedId<E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<E: Entity> Hash for TypedId<E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<E: Entity> Default for TypedId<E> {
    #[inline]
    fn default() -> Self {
        Self::NIL
    }
}

impl<E: Entity> fmt::Debug for TypedId<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", E::NAME, self.id)
    }
}

impl<E: Entity> fmt::Display for TypedId<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

impl<E: Entity> FromStr for TypedId<E> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<E: Entity> From<TypedId<E>> for Identifier {
    fn from(id: TypedId<E>) -> Self {
        id.id
    }
}

impl<E: Entity> AsRef<Identifier> for TypedId<E> {
    fn as_ref(&self) -> &Identifier {
        &self.id
    }
}

impl<E: Entity> Storable for TypedId<E> {
    type Error = IdError;

    fn to_storage(&self) -> StorageValue {
        self.id.to_storage()
    }

    fn from_storage(value: &StorageValue) -> Result<Self, Self::Error> {
        Identifier::from_storage(value)
            .map(Self::from_identifier)
            .map_err(|err| err.for_entity(E::NAME))
    }
}

#[cfg(feature = "serde")]
impl<E: Entity> serde::Serialize for TypedId<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.id, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E: Entity> serde::Deserialize<'de> for TypedId<E> {
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
// Entity Kinds
// ============================================================================

macro_rules! define_entity {
    ($(#[$meta:meta])* $marker:ident, $alias:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $marker {}

        impl Entity for $marker {
            const NAME: &'static str = $name;
        }

        #[doc = concat!("Typed identifier for ", stringify!($marker), " entities.")]
        pub type $alias = TypedId<$marker>;
    };
}

define_entity!(
    /// A rider account.
    User, UserId, "UserID"
);
define_entity!(
    /// A registered driver.
    Driver, DriverId, "DriverID"
);
define_entity!(Ride, RideId, "RideID");
define_entity!(Vehicle, VehicleId, "VehicleID");
define_entity!(Payment, PaymentId, "PaymentID");
define_entity!(
    /// An uploaded verification document (licence, registration, insurance).
    Document, DocumentId, "DocumentID"
);
define_entity!(
    /// A reported safety incident.
    Incident, IncidentId, "IncidentID"
);
define_entity!(
    /// A support ticket.
    Ticket, TicketId, "TicketID"
);

// ============================================================================
// Tests
// ============================================================================
