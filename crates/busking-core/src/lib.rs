//! Core domain for the Busking booking client
//!
//! Wire types, field validation and the [`BookingService`] trait that every
//! remote-service implementation satisfies. Nothing in this crate performs
//! I/O; it is shared by the HTTP client, the in-memory stand-ins and the
//! application state machines.
//!
//! # Components
//!
//! - [`Booking`], [`Bus`], [`BookingRequest`]: JSON wire types
//! - [`validate`]: pure field validation producing [`ValidationErrors`]
//! - [`BookingService`]: seam to the remote booking service
//! - [`ServiceError`]: failures reported by a service implementation

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod booking;
pub mod error;
pub mod service;
pub mod validation;

pub use booking::{Booking, BookingId, BookingInput, BookingRequest, Bus, BusId, ResourceId};
pub use error::ServiceError;
pub use service::BookingService;
pub use validation::{Field, ValidationErrors, validate};
