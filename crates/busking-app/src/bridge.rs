//! Bridge between App and the booking service.
//!
//! The [`Bridge`] turns request actions from the App into futures that call
//! the [`BookingService`] and resolve to the matching [`AppEvent`], carrying
//! the issuing screen's ticket back.

use busking_core::BookingService;
use futures::future::BoxFuture;

use crate::{AppAction, AppEvent};

/// Pending service call that resolves to an App event.
pub type PendingRequest = BoxFuture<'static, AppEvent>;

/// Bridge between App and a [`BookingService`].
#[derive(Debug, Clone)]
pub struct Bridge<S: BookingService> {
    service: S,
}

impl<S: BookingService> Bridge<S> {
    /// Create a bridge over `service`.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Start the service call for `action`.
    ///
    /// Returns `None` for actions that are not requests
    /// ([`AppAction::Render`], [`AppAction::Quit`]).
    pub fn request(&self, action: AppAction) -> Option<PendingRequest> {
        let service = self.service.clone();
        let future: PendingRequest = match action {
            AppAction::Render | AppAction::Quit => return None,
            AppAction::FetchBuses { ticket } => {
                tracing::debug!(%ticket, "GET buses");
                Box::pin(async move {
                    let result = service.list_buses().await;
                    AppEvent::BusesFetched { ticket, result }
                })
            },
            AppAction::FetchBookings { ticket } => {
                tracing::debug!(%ticket, "GET bookings");
                Box::pin(async move {
                    let result = service.list_bookings().await;
                    AppEvent::BookingsFetched { ticket, result }
                })
            },
            AppAction::FetchBooking { ticket, id } => {
                tracing::debug!(%ticket, %id, "GET booking");
                Box::pin(async move {
                    let result = service.get_booking(&id).await;
                    AppEvent::BookingFetched { ticket, result }
                })
            },
            AppAction::CreateBooking { ticket, booking } => {
                tracing::debug!(%ticket, "POST booking");
                Box::pin(async move {
                    let result = service.create_booking(&booking).await;
                    tracing::debug!(%ticket, ok = result.is_ok(), "POST booking finished");
                    AppEvent::BookingSaved { ticket, result }
                })
            },
            AppAction::UpdateBooking { ticket, id, booking } => {
                tracing::debug!(%ticket, %id, "PUT booking");
                Box::pin(async move {
                    let result = service.update_booking(&id, &booking).await;
                    tracing::debug!(%ticket, ok = result.is_ok(), "PUT booking finished");
                    AppEvent::BookingSaved { ticket, result }
                })
            },
        };
        Some(future)
    }
}
