//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Bridge`]: request futures against the booking service
//! - [`Driver`]: Platform-specific I/O
//!
//! Requests run concurrently with input: the loop waits on whichever comes
//! first, the next user event or the next completed request, so the UI stays
//! responsive while a submission is outstanding.

use busking_core::BookingService;
use futures::{StreamExt, stream::FuturesUnordered};

use crate::{App, AppAction, AppEvent, Bridge, Driver, PendingRequest};

/// Generic runtime that orchestrates App, Bridge, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `S`: Booking service the requests go to
pub struct Runtime<D, S>
where
    D: Driver,
    S: BookingService,
{
    driver: D,
    app: App,
    bridge: Bridge<S>,
    in_flight: FuturesUnordered<PendingRequest>,
}

impl<D, S> Runtime<D, S>
where
    D: Driver,
    S: BookingService,
{
    /// Create a new runtime with the given driver and service.
    pub fn new(driver: D, service: S) -> Self {
        Self::with_app(driver, service, App::new())
    }

    /// Create a runtime starting from an existing App state.
    pub fn with_app(driver: D, service: S, app: App) -> Self {
        Self { driver, app, bridge: Bridge::new(service), in_flight: FuturesUnordered::new() }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// Requests still in flight at that point are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        let actions = self.app.start();
        let mut quit = self.process_actions(actions)?;

        while !quit {
            let Some(event) = self.next_event().await? else {
                continue;
            };
            let actions = self.app.handle(event);
            quit = self.process_actions(actions)?;
        }

        if !self.in_flight.is_empty() {
            tracing::debug!(pending = self.in_flight.len(), "dropping in-flight requests");
        }
        self.driver.stop();
        Ok(())
    }

    /// Wait for the next event from either source.
    ///
    /// Completed requests win ties so results are applied before further
    /// input is read.
    async fn next_event(&mut self) -> Result<Option<AppEvent>, D::Error> {
        if self.in_flight.is_empty() {
            return self.driver.poll_event().await;
        }

        tokio::select! {
            biased;
            Some(event) = self.in_flight.next() => Ok(Some(event)),
            event = self.driver.poll_event() => event,
        }
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::FetchBuses { .. }
                | AppAction::FetchBookings { .. }
                | AppAction::FetchBooking { .. }
                | AppAction::CreateBooking { .. }
                | AppAction::UpdateBooking { .. } => {
                    if let Some(request) = self.bridge.request(action) {
                        self.in_flight.push(request);
                    }
                },
            }
        }
        Ok(false)
    }

    /// Application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Platform driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
