//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages navigation
//! between screens completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the current [`Screen`] and the [`Ticket`] that identifies it.
//! - Routes keys to the home menu, the lists or the booking form.
//! - Applies request results to the screen that asked for them, dropping
//!   results that arrive after the user moved on.
//! - Holds the status line showing the last notice.

use busking_core::{Booking, BookingId, Bus, ServiceError};

use crate::{
    AppAction, AppEvent, BookingForm, FormKey, FormMode, FormRequest, HomeItem, KeyInput,
    ListView, Route, Screen, Ticket,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// What is on screen.
    screen: Screen,
    /// Route that produced `screen`.
    route: Route,
    /// Identity of the current screen instance.
    ticket: Ticket,
    /// Where Esc on a form goes back to.
    form_origin: Route,
    /// Last notice. `None` if nothing to show.
    status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an App on the home screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Home { selected: 0 },
            route: Route::Home,
            ticket: Ticket::default(),
            form_origin: Route::Home,
            status_message: None,
        }
    }

    /// Actions to run before the first event.
    pub fn start(&mut self) -> Vec<AppAction> {
        vec![AppAction::Render]
    }

    /// Open `route` as a new screen instance.
    ///
    /// Issues a fresh ticket, so results still in flight for the previous
    /// screen will be dropped, and returns the fetches the new screen needs.
    pub fn navigate(&mut self, route: Route) -> Vec<AppAction> {
        self.ticket = self.ticket.next();
        let ticket = self.ticket;
        tracing::debug!(?route, %ticket, "navigate");

        if matches!(route, Route::NewBooking | Route::EditBooking(_))
            && !matches!(self.route, Route::NewBooking | Route::EditBooking(_))
        {
            self.form_origin = self.route.clone();
        }

        let mut actions = Vec::new();
        self.screen = match &route {
            Route::Home => Screen::Home { selected: 0 },
            Route::Buses => {
                actions.push(AppAction::FetchBuses { ticket });
                Screen::Buses(ListView::loading())
            },
            Route::Bookings => {
                actions.push(AppAction::FetchBookings { ticket });
                Screen::Bookings(ListView::loading())
            },
            Route::NewBooking | Route::EditBooking(_) => {
                let form = match &route {
                    Route::EditBooking(id) => BookingForm::update(id.clone()),
                    _ => BookingForm::create(),
                };
                actions.extend(form.initial_requests().into_iter().map(|request| match request {
                    FormRequest::FetchBuses => AppAction::FetchBuses { ticket },
                    FormRequest::FetchBooking(id) => AppAction::FetchBooking { ticket, id },
                }));
                Screen::Form(Box::new(form))
            },
        };
        self.route = route;

        actions.push(AppAction::Render);
        actions
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        if let Some(ticket) = event.ticket()
            && ticket != self.ticket
        {
            tracing::debug!(%ticket, current = %self.ticket, "discarding stale result");
            return vec![];
        }

        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(..) => vec![AppAction::Render],
            AppEvent::BusesFetched { result, .. } => self.buses_fetched(result),
            AppEvent::BookingsFetched { result, .. } => self.bookings_fetched(result),
            AppEvent::BookingFetched { result, .. } => self.booking_fetched(result),
            AppEvent::BookingSaved { result, .. } => self.booking_saved(result),
        }
    }

    fn buses_fetched(&mut self, result: Result<Vec<Bus>, ServiceError>) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Buses(list) => {
                if let Err(error) = &result {
                    tracing::warn!(%error, "failed to fetch buses");
                }
                list.load(result);
            },
            Screen::Form(form) => form.buses_loaded(result),
            Screen::Home { .. } | Screen::Bookings(_) => return vec![],
        }
        vec![AppAction::Render]
    }

    fn bookings_fetched(&mut self, result: Result<Vec<Booking>, ServiceError>) -> Vec<AppAction> {
        let Screen::Bookings(list) = &mut self.screen else {
            return vec![];
        };
        if let Err(error) = &result {
            tracing::warn!(%error, "failed to fetch bookings");
        }
        list.load(result);
        vec![AppAction::Render]
    }

    fn booking_fetched(&mut self, result: Result<Booking, ServiceError>) -> Vec<AppAction> {
        let Screen::Form(form) = &mut self.screen else {
            return vec![];
        };
        form.booking_loaded(result);
        vec![AppAction::Render]
    }

    fn booking_saved(&mut self, result: Result<Option<Booking>, ServiceError>) -> Vec<AppAction> {
        let Screen::Form(form) = &mut self.screen else {
            return vec![];
        };
        let notice = form.submission_finished(&result);
        self.status_message = Some(notice.to_string());

        if result.is_ok() {
            return self.navigate(Route::Bookings);
        }
        vec![AppAction::Render]
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Home { selected } => match key {
                KeyInput::Esc | KeyInput::Char('q') => vec![AppAction::Quit],
                KeyInput::Up => {
                    *selected = selected.saturating_sub(1);
                    vec![AppAction::Render]
                },
                KeyInput::Down => {
                    *selected = (*selected + 1).min(HomeItem::ALL.len() - 1);
                    vec![AppAction::Render]
                },
                KeyInput::Enter => {
                    let item = HomeItem::ALL[(*selected).min(HomeItem::ALL.len() - 1)];
                    self.navigate(item.route())
                },
                _ => vec![],
            },
            Screen::Buses(list) => match key {
                KeyInput::Esc => self.navigate(Route::Home),
                KeyInput::Char('r') => self.navigate(Route::Buses),
                KeyInput::Up => {
                    list.select_prev();
                    vec![AppAction::Render]
                },
                KeyInput::Down => {
                    list.select_next();
                    vec![AppAction::Render]
                },
                _ => vec![],
            },
            Screen::Bookings(list) => match key {
                KeyInput::Esc => self.navigate(Route::Home),
                KeyInput::Char('r') => self.navigate(Route::Bookings),
                KeyInput::Char('n') => self.navigate(Route::NewBooking),
                KeyInput::Up => {
                    list.select_prev();
                    vec![AppAction::Render]
                },
                KeyInput::Down => {
                    list.select_next();
                    vec![AppAction::Render]
                },
                KeyInput::Enter => match list.selected_item().map(|b| b.id.clone()) {
                    Some(Some(id)) => self.navigate(Route::EditBooking(id)),
                    Some(None) => {
                        self.status_message = Some("Selected booking has no id".to_string());
                        vec![AppAction::Render]
                    },
                    None => vec![],
                },
                _ => vec![],
            },
            Screen::Form(form) => match form.handle_key(key) {
                FormKey::Handled => vec![AppAction::Render],
                FormKey::Ignored => vec![],
                FormKey::Submit => self.submit(),
                FormKey::Leave => {
                    let origin = self.form_origin.clone();
                    self.navigate(origin)
                },
            },
        }
    }

    /// Submit the open form.
    ///
    /// Produces a create or update request when the form is editing and its
    /// input is valid; otherwise only re-renders to show field errors.
    /// Nothing happens when no form is open.
    pub fn submit(&mut self) -> Vec<AppAction> {
        let ticket = self.ticket;
        let Screen::Form(form) = &mut self.screen else {
            return vec![];
        };

        let Some(booking) = form.submit() else {
            return vec![AppAction::Render];
        };

        let request = match form.mode() {
            FormMode::Create => AppAction::CreateBooking { ticket, booking },
            FormMode::Update { id } => AppAction::UpdateBooking { ticket, id: id.clone(), booking },
        };
        vec![request, AppAction::Render]
    }

    /// What is on screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Ticket of the current screen instance.
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Open form. `None` if another screen is showing.
    pub fn form(&self) -> Option<&BookingForm> {
        match &self.screen {
            Screen::Form(form) => Some(&**form),
            _ => None,
        }
    }

    /// Booking id being edited, if the update form is open.
    pub fn editing(&self) -> Option<&BookingId> {
        match self.form()?.mode() {
            FormMode::Update { id } => Some(id),
            FormMode::Create => None,
        }
    }

    /// Last notice. `None` if nothing to show.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
