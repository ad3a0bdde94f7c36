//! Remote booking service abstraction.
//!
//! The [`BookingService`] trait decouples the booking workflow from the
//! transport. The production implementation speaks HTTP/JSON; tests and the
//! demo mode use in-process implementations with the same contract.

use std::future::Future;

use crate::{Booking, BookingId, BookingRequest, Bus, ServiceError};

/// Operations the client consumes from the remote booking service.
///
/// Must be `Clone` so the runtime can hand a copy to every in-flight request;
/// implementations share their connection pool or state behind an `Arc`.
///
/// # Endpoints
///
/// | Method                          | HTTP                     |
/// |---------------------------------|--------------------------|
/// | [`list_buses`](Self::list_buses)       | `GET /buses/`            |
/// | [`list_bookings`](Self::list_bookings) | `GET /bookings/`         |
/// | [`get_booking`](Self::get_booking)     | `GET /bookings/{id}/`    |
/// | [`create_booking`](Self::create_booking) | `POST /bookings/`      |
/// | [`update_booking`](Self::update_booking) | `PUT /bookings/{id}/`  |
pub trait BookingService: Clone + Send + Sync + 'static {
    /// Fetch the bus reference list.
    fn list_buses(&self) -> impl Future<Output = Result<Vec<Bus>, ServiceError>> + Send;

    /// Fetch all bookings.
    fn list_bookings(&self) -> impl Future<Output = Result<Vec<Booking>, ServiceError>> + Send;

    /// Fetch one booking by its service-assigned id.
    fn get_booking(
        &self,
        id: &BookingId,
    ) -> impl Future<Output = Result<Booking, ServiceError>> + Send;

    /// Create a booking.
    ///
    /// Returns the created resource when the service echoes one back. A
    /// success response whose body is not a booking yields `Ok(None)`.
    fn create_booking(
        &self,
        booking: &BookingRequest,
    ) -> impl Future<Output = Result<Option<Booking>, ServiceError>> + Send;

    /// Replace an existing booking.
    ///
    /// Same body handling as [`create_booking`](Self::create_booking).
    fn update_booking(
        &self,
        id: &BookingId,
        booking: &BookingRequest,
    ) -> impl Future<Output = Result<Option<Booking>, ServiceError>> + Send;
}
