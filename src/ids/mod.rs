// ============================================================================
// Identifiers Module
// Random 128-bit identifiers and their per-entity typed wrappers
// ============================================================================
//
// This module provides:
// - Identifier: the 16-byte primitive (generation, parsing, encoding)
// - TypedId<E>: a zero-cost new-type per entity kind
// - UserId, DriverId, RideId, VehicleId, PaymentId, DocumentId,
//   IncidentId, TicketId
// - IdError: error types for the above
//
// There is exactly one text encoding (lowercase hyphenated); JSON and
// storage both reuse it.

mod error;
mod identifier;
mod typed;

pub use error::{IdError, IdResult};
pub use identifier::Identifier;
pub use typed::{
    Document, DocumentId, Driver, DriverId, Entity, Incident, IncidentId, Payment, PaymentId,
    Ride, RideId, Ticket, TicketId, TypedId, User, UserId, Vehicle, VehicleId,
};
