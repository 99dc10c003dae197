// ============================================================================
// Txova Value Types Library
// Always-valid identifiers and money shared by the ride-hailing services
// ============================================================================

//! # Txova Types
//!
//! Immutable value objects that enforce their invariants at construction,
//! so an invalid identifier or an imprecise amount cannot exist once
//! created.
//!
//! ## Features
//!
//! - **Typed identifiers**: one 128-bit random [`ids::Identifier`] wrapped per
//!   entity kind ([`ids::UserId`], [`ids::DriverId`], ...) so IDs of different
//!   entities cannot be mixed up
//! - **Integer money**: [`money::Money`] stores MZN as i64 centavos with
//!   half-away-from-zero rounding, exact N-way splits and percentage extraction
//! - **One text form per type** reused by `Display`, JSON (`serde` feature)
//!   and storage ([`storage::Storable`])
//!
//! ## Example
//!
//! ```rust
//! use txova_types::prelude::*;
//!
//! let ride = RideId::must_generate();
//! let riders = [UserId::must_generate(), UserId::must_generate()];
//!
//! let fare = Money::parse("250.01 MZN").unwrap();
//! let commission = fare.percentage(15).unwrap();
//! let shares = fare.split(riders.len() as i64).unwrap();
//!
//! assert_eq!(shares.iter().sum::<Money>(), fare);
//! println!("ride {}: commission {}, shares {:?}", ride, commission, shares);
//! ```

pub mod ids;
pub mod money;
pub mod storage;

// Re-exports for convenience
pub mod prelude {
    pub use crate::ids::{
        DocumentId, DriverId, Entity, IdError, Identifier, IncidentId, PaymentId, RideId,
        TicketId, TypedId, UserId, VehicleId,
    };
    pub use crate::money::{Money, MoneyError};
    pub use crate::storage::{Storable, StorageValue};
}
