//! Application actions.
//!
//! Actions are outputs from the App state machine that the runtime executes.

use busking_core::{BookingId, BookingRequest};

use crate::Ticket;

/// Actions produced by the App state machine.
///
/// Request actions carry the [`Ticket`] of the screen that issued them; the
/// matching [`AppEvent`](crate::AppEvent) must carry it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Request UI re-render.
    Render,

    /// Quit the application.
    Quit,

    /// `GET /buses/`
    FetchBuses {
        /// Issuing screen.
        ticket: Ticket,
    },

    /// `GET /bookings/`
    FetchBookings {
        /// Issuing screen.
        ticket: Ticket,
    },

    /// `GET /bookings/{id}/`
    FetchBooking {
        /// Issuing screen.
        ticket: Ticket,
        /// Booking to fetch.
        id: BookingId,
    },

    /// `POST /bookings/`
    CreateBooking {
        /// Issuing screen.
        ticket: Ticket,
        /// Validated booking.
        booking: BookingRequest,
    },

    /// `PUT /bookings/{id}/`
    UpdateBooking {
        /// Issuing screen.
        ticket: Ticket,
        /// Booking to replace.
        id: BookingId,
        /// Validated booking.
        booking: BookingRequest,
    },
}

impl AppAction {
    /// Whether this action talks to the booking service.
    pub fn is_request(&self) -> bool {
        !matches!(self, AppAction::Render | AppAction::Quit)
    }
}
