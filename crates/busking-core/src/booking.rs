//! Booking and bus wire types.
//!
//! These mirror the JSON documents exchanged with the remote booking service.
//! Identifiers are opaque: the service may send them as JSON integers or
//! strings, and they are echoed back in the same form.

use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationErrors};

/// Opaque identifier assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Integer id (`"id": 7`).
    Number(u64),
    /// String id (`"id": "b-7"`).
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub ResourceId);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(ResourceId::Number(id))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(ResourceId::Text(id.to_owned()))
            }
        }
    };
}

resource_id!(
    /// Identifier of a [`Bus`].
    BusId
);

resource_id!(
    /// Identifier of a [`Booking`].
    BookingId
);

/// Read-only bus reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    /// Service-assigned id.
    pub id: BusId,
    /// Display name.
    pub name: String,
}

/// A booking as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Service-assigned id. Absent in some single-resource responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    /// Passenger name.
    pub name: String,
    /// Passenger email.
    pub email: String,
    /// Passenger phone.
    pub phone: String,
    /// Number of seats.
    pub seats: u32,
    /// Booked bus. `None` if the service stores no bus.
    pub bus: Option<BusId>,
}

/// Validated create/update payload.
///
/// Only constructed through [`BookingInput::to_request`], so every value that
/// reaches the wire has passed validation and `seats` is a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    name: String,
    email: String,
    phone: String,
    seats: NonZeroU32,
    bus: Option<BusId>,
}

impl BookingRequest {
    /// Passenger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passenger email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Passenger phone.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Number of seats.
    pub fn seats(&self) -> NonZeroU32 {
        self.seats
    }

    /// Selected bus. `None` when the selector was empty.
    pub fn bus(&self) -> Option<&BusId> {
        self.bus.as_ref()
    }

    /// The booking this request describes, under the given id.
    pub fn to_booking(&self, id: Option<BookingId>) -> Booking {
        Booking {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            seats: self.seats.get(),
            bus: self.bus.clone(),
        }
    }
}

/// Raw text of the four editable booking fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingInput {
    /// Passenger name as typed.
    pub name: String,
    /// Passenger email as typed.
    pub email: String,
    /// Passenger phone as typed.
    pub phone: String,
    /// Seat count as typed.
    pub seats: String,
}

impl BookingInput {
    /// Form text for an existing booking. Seats become their decimal text.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            name: booking.name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            seats: booking.seats.to_string(),
        }
    }

    /// Run every field rule.
    pub fn validate(&self) -> ValidationErrors {
        validation::validate(&self.name, &self.email, &self.phone, &self.seats)
    }

    /// Validate and build the wire payload for `bus`.
    pub fn to_request(&self, bus: Option<BusId>) -> Result<BookingRequest, ValidationErrors> {
        let errors = self.validate();
        match validation::parse_seats(&self.seats) {
            Some(seats) if errors.is_empty() => Ok(BookingRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                seats,
                bus,
            }),
            _ => Err(errors),
        }
    }
}
