//! Application events.
//!
//! Events are inputs to the App state machine from the runtime.

use busking_core::{Booking, Bus, ServiceError};

use crate::{KeyInput, Ticket};

/// Events that drive the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resized.
    Resize(u16, u16),

    /// Bus list fetch completed.
    BusesFetched {
        /// Screen that asked.
        ticket: Ticket,
        /// Fetched buses or the failure.
        result: Result<Vec<Bus>, ServiceError>,
    },

    /// Booking list fetch completed.
    BookingsFetched {
        /// Screen that asked.
        ticket: Ticket,
        /// Fetched bookings or the failure.
        result: Result<Vec<Booking>, ServiceError>,
    },

    /// Single booking fetch completed.
    BookingFetched {
        /// Screen that asked.
        ticket: Ticket,
        /// Fetched booking or the failure.
        result: Result<Booking, ServiceError>,
    },

    /// Create or update completed.
    BookingSaved {
        /// Screen that asked.
        ticket: Ticket,
        /// Echoed booking (if the service returned one) or the failure.
        result: Result<Option<Booking>, ServiceError>,
    },
}

impl AppEvent {
    /// Ticket of a request result. `None` for user input.
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            AppEvent::Key(_) | AppEvent::Resize(..) => None,
            AppEvent::BusesFetched { ticket, .. }
            | AppEvent::BookingsFetched { ticket, .. }
            | AppEvent::BookingFetched { ticket, .. }
            | AppEvent::BookingSaved { ticket, .. } => Some(*ticket),
        }
    }
}
