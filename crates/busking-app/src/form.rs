//! Booking form workflow.
//!
//! One [`BookingForm`] is one workflow instance: it collects the initial
//! data it needs, lets the user edit, validates locally and hands a
//! [`BookingRequest`] to the shell for submission. The form never performs
//! I/O itself; the shell turns [`FormRequest`]s into actions and feeds the
//! results back.
//!
//! ```text
//! Loading ──all fetches resolved──► Editing ──submit (valid)──► Submitting
//!                                     ▲                            │
//!                                     └────────── failure ─────────┤
//!                                                                  ▼
//!                                                                 Done
//! ```

use busking_core::{
    Booking, BookingId, BookingInput, BookingRequest, Bus, BusId, Field, ServiceError,
    ValidationErrors,
};

use crate::{KeyInput, Notice, TextInput};

const BOOKING_SUCCESSFUL: Notice =
    Notice { title: "Booking Successful", message: "Your booking was successful." };
const BOOKING_FAILED: Notice =
    Notice { title: "Booking Failed", message: "There was an error processing your booking." };
const BOOKING_UPDATED: Notice =
    Notice { title: "Booking Updated", message: "The booking was successfully updated." };
const UPDATE_FAILED: Notice =
    Notice { title: "Update Failed", message: "There was an error updating the booking." };

/// Which booking the form writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// New booking, submitted with `POST /bookings/`.
    Create,
    /// Existing booking, submitted with `PUT /bookings/{id}/`.
    Update {
        /// Booking being edited.
        id: BookingId,
    },
}

/// Workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Waiting for initial fetches.
    Loading,
    /// Accepting edits.
    Editing,
    /// Submission in flight.
    Submitting,
    /// Submission succeeded.
    Done,
}

/// Focusable form elements, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Passenger name.
    Name,
    /// Contact email.
    Email,
    /// Contact phone.
    Phone,
    /// Seat count.
    Seats,
    /// Bus selector.
    Bus,
    /// Submit button.
    Submit,
}

impl FormField {
    /// Focus order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Seats,
        FormField::Bus,
        FormField::Submit,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Seats => "Seats",
            FormField::Bus => "Bus",
            FormField::Submit => "Submit",
        }
    }

    /// Validated input behind this element, if any.
    pub fn validated(self) -> Option<Field> {
        match self {
            FormField::Name => Some(Field::Name),
            FormField::Email => Some(Field::Email),
            FormField::Phone => Some(Field::Phone),
            FormField::Seats => Some(Field::Seats),
            FormField::Bus | FormField::Submit => None,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Data the form needs before it can be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRequest {
    /// `GET /buses/`
    FetchBuses,
    /// `GET /bookings/{id}/`
    FetchBooking(BookingId),
}

/// What a key did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    /// Key changed the form.
    Handled,
    /// Key had no effect.
    Ignored,
    /// User asked to submit.
    Submit,
    /// User asked to leave the form.
    Leave,
}

/// One create or update workflow instance.
#[derive(Debug, Clone)]
pub struct BookingForm {
    mode: FormMode,
    state: FormState,
    name: TextInput,
    email: TextInput,
    phone: TextInput,
    seats: TextInput,
    buses: Vec<Bus>,
    selected_bus: Option<BusId>,
    focus: FormField,
    errors: ValidationErrors,
    awaiting_buses: bool,
    awaiting_booking: bool,
}

impl BookingForm {
    /// Create workflow: empty fields, waits for the bus list.
    pub fn create() -> Self {
        Self::new(FormMode::Create)
    }

    /// Update workflow for `id`: waits for the bus list and the booking.
    pub fn update(id: BookingId) -> Self {
        Self::new(FormMode::Update { id })
    }

    fn new(mode: FormMode) -> Self {
        let awaiting_booking = matches!(mode, FormMode::Update { .. });
        Self {
            mode,
            state: FormState::Loading,
            name: TextInput::new(),
            email: TextInput::new(),
            phone: TextInput::new(),
            seats: TextInput::new(),
            buses: Vec::new(),
            selected_bus: None,
            focus: FormField::Name,
            errors: ValidationErrors::default(),
            awaiting_buses: true,
            awaiting_booking,
        }
    }

    /// Fetches to issue on entry. Each must be answered with
    /// [`buses_loaded`](Self::buses_loaded) or
    /// [`booking_loaded`](Self::booking_loaded).
    pub fn initial_requests(&self) -> Vec<FormRequest> {
        let mut requests = vec![FormRequest::FetchBuses];
        if let FormMode::Update { id } = &self.mode {
            requests.push(FormRequest::FetchBooking(id.clone()));
        }
        requests
    }

    /// Record the bus list fetch. A failure leaves the list empty.
    pub fn buses_loaded(&mut self, result: Result<Vec<Bus>, ServiceError>) {
        match result {
            Ok(buses) => {
                if self.mode == FormMode::Create && self.selected_bus.is_none() {
                    self.selected_bus = buses.first().map(|b| b.id.clone());
                }
                self.buses = buses;
            },
            Err(error) => {
                tracing::warn!(%error, "failed to fetch buses");
                self.buses.clear();
            },
        }
        self.awaiting_buses = false;
        self.finish_loading();
    }

    /// Record the existing booking fetch and populate the fields from it.
    pub fn booking_loaded(&mut self, result: Result<Booking, ServiceError>) {
        match result {
            Ok(booking) => {
                let input = BookingInput::from_booking(&booking);
                self.name.set(input.name);
                self.email.set(input.email);
                self.phone.set(input.phone);
                self.seats.set(input.seats);
                self.selected_bus = booking.bus;
            },
            Err(error) => {
                tracing::warn!(%error, "failed to fetch booking");
            },
        }
        self.awaiting_booking = false;
        self.finish_loading();
    }

    fn finish_loading(&mut self) {
        if self.state != FormState::Loading || self.awaiting_buses || self.awaiting_booking {
            return;
        }
        self.state = FormState::Editing;
    }

    /// Apply a key press. Edits are only accepted while editing; leaving is
    /// always possible.
    pub fn handle_key(&mut self, key: KeyInput) -> FormKey {
        if key == KeyInput::Esc {
            return FormKey::Leave;
        }
        if self.state != FormState::Editing {
            return FormKey::Ignored;
        }

        match key {
            KeyInput::Enter => FormKey::Submit,
            KeyInput::Tab | KeyInput::Down => {
                self.focus = self.focus.next();
                FormKey::Handled
            },
            KeyInput::BackTab | KeyInput::Up => {
                self.focus = self.focus.prev();
                FormKey::Handled
            },
            _ => match self.focus {
                FormField::Bus => self.cycle_bus(key),
                FormField::Submit => FormKey::Ignored,
                field => match self.field_mut(field) {
                    Some(input) => {
                        if input.handle_key(key) {
                            FormKey::Handled
                        } else {
                            FormKey::Ignored
                        }
                    },
                    None => FormKey::Ignored,
                },
            },
        }
    }

    fn cycle_bus(&mut self, key: KeyInput) -> FormKey {
        if self.buses.is_empty() {
            return FormKey::Ignored;
        }
        let len = self.buses.len();
        let next = match (key, self.selected_bus_index()) {
            (KeyInput::Right, Some(i)) => (i + 1) % len,
            (KeyInput::Left, Some(i)) => (i + len - 1) % len,
            (KeyInput::Right | KeyInput::Left, None) => 0,
            _ => return FormKey::Ignored,
        };
        self.selected_bus = Some(self.buses[next].id.clone());
        FormKey::Handled
    }

    /// Validate and, if valid, move to [`FormState::Submitting`] and return
    /// the request to send.
    ///
    /// Returns `None` outside [`FormState::Editing`] (so a second submit
    /// while one is in flight sends nothing) and when validation fails, in
    /// which case [`errors`](Self::errors) holds the per-field messages.
    pub fn submit(&mut self) -> Option<BookingRequest> {
        if self.state != FormState::Editing {
            tracing::debug!(state = ?self.state, "submit ignored");
            return None;
        }

        match self.input().to_request(self.selected_bus.clone()) {
            Ok(request) => {
                self.errors = ValidationErrors::default();
                self.state = FormState::Submitting;
                Some(request)
            },
            Err(errors) => {
                tracing::debug!(%errors, "booking input rejected");
                self.errors = errors;
                None
            },
        }
    }

    /// Record the submission outcome and return the notice to show.
    ///
    /// Success moves to [`FormState::Done`]. Failure returns to
    /// [`FormState::Editing`] with every entered value kept.
    pub fn submission_finished(
        &mut self,
        result: &Result<Option<Booking>, ServiceError>,
    ) -> Notice {
        let update = matches!(self.mode, FormMode::Update { .. });
        match result {
            Ok(_) => {
                self.state = FormState::Done;
                if update { BOOKING_UPDATED } else { BOOKING_SUCCESSFUL }
            },
            Err(error) => {
                tracing::warn!(%error, mode = ?self.mode, "booking submission failed");
                self.state = FormState::Editing;
                if update { UPDATE_FAILED } else { BOOKING_FAILED }
            },
        }
    }

    /// Create or update.
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Workflow state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Focused element.
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Text input behind a field. The bus selector and submit button have
    /// none.
    pub fn field(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Phone => Some(&self.phone),
            FormField::Seats => Some(&self.seats),
            FormField::Bus | FormField::Submit => None,
        }
    }

    fn field_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Seats => Some(&mut self.seats),
            FormField::Bus | FormField::Submit => None,
        }
    }

    /// Current raw field values.
    pub fn input(&self) -> BookingInput {
        BookingInput {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            phone: self.phone.text().to_string(),
            seats: self.seats.text().to_string(),
        }
    }

    /// Selectable buses.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Selected bus reference.
    pub fn selected_bus(&self) -> Option<&BusId> {
        self.selected_bus.as_ref()
    }

    /// Position of the selected bus in [`buses`](Self::buses).
    pub fn selected_bus_index(&self) -> Option<usize> {
        let selected = self.selected_bus.as_ref()?;
        self.buses.iter().position(|b| &b.id == selected)
    }

    /// Per-field errors from the last submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use busking_core::validation::{INVALID_EMAIL, INVALID_PHONE, INVALID_SEATS, NAME_REQUIRED};

    use super::*;

    fn buses() -> Vec<Bus> {
        vec![
            Bus { id: BusId::from(1), name: "Express".into() },
            Bus { id: BusId::from(2), name: "Night".into() },
        ]
    }

    fn type_text(form: &mut BookingForm, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyInput::Char(c));
        }
    }

    fn filled_create_form() -> BookingForm {
        let mut form = BookingForm::create();
        form.buses_loaded(Ok(buses()));
        for (i, text) in ["Ann", "ann@example.com", "1234567890", "2"].iter().enumerate() {
            if i > 0 {
                form.handle_key(KeyInput::Tab);
            }
            type_text(&mut form, text);
        }
        form
    }

    #[test]
    fn create_edits_after_buses_and_selects_first() {
        let mut form = BookingForm::create();
        assert_eq!(form.initial_requests(), vec![FormRequest::FetchBuses]);
        assert_eq!(form.state(), FormState::Loading);

        form.buses_loaded(Ok(buses()));

        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.selected_bus(), Some(&BusId::from(1)));
    }

    #[test]
    fn update_waits_for_both_fetches() {
        let id = BookingId::from(9);
        let mut form = BookingForm::update(id.clone());
        assert_eq!(form.initial_requests(), vec![
            FormRequest::FetchBuses,
            FormRequest::FetchBooking(id.clone())
        ]);

        form.booking_loaded(Ok(Booking {
            id: Some(id),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "1234567890".into(),
            seats: 3,
            bus: Some(BusId::from(2)),
        }));
        assert_eq!(form.state(), FormState::Loading);

        form.buses_loaded(Ok(buses()));

        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.field(FormField::Name).map(TextInput::text), Some("Ann"));
        assert_eq!(form.field(FormField::Email).map(TextInput::text), Some("ann@example.com"));
        assert_eq!(form.field(FormField::Phone).map(TextInput::text), Some("1234567890"));
        assert_eq!(form.field(FormField::Seats).map(TextInput::text), Some("3"));
        assert_eq!(form.selected_bus_index(), Some(1));
    }

    #[test]
    fn failed_fetch_still_resolves_loading() {
        let mut form = BookingForm::create();
        form.buses_loaded(Err(ServiceError::Network("down".into())));

        assert_eq!(form.state(), FormState::Editing);
        assert!(form.buses().is_empty());
        assert_eq!(form.selected_bus(), None);
    }

    #[test]
    fn keys_ignored_while_loading() {
        let mut form = BookingForm::create();

        assert_eq!(form.handle_key(KeyInput::Char('a')), FormKey::Ignored);
        assert_eq!(form.handle_key(KeyInput::Esc), FormKey::Leave);
        assert_eq!(form.input().name, "");
    }

    #[test]
    fn invalid_submit_reports_every_field() {
        let mut form = BookingForm::create();
        form.buses_loaded(Ok(buses()));

        assert_eq!(form.submit(), None);

        assert_eq!(form.state(), FormState::Editing);
        let errors = form.errors();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
        assert_eq!(errors.get(Field::Phone), Some(INVALID_PHONE));
        assert_eq!(errors.get(Field::Seats), Some(INVALID_SEATS));
    }

    #[test]
    fn valid_submit_sends_once() {
        let mut form = filled_create_form();

        let request = form.submit().expect("valid form submits");
        assert_eq!(request.seats().get(), 2);
        assert_eq!(request.bus(), Some(&BusId::from(1)));
        assert_eq!(form.state(), FormState::Submitting);

        assert_eq!(form.submit(), None);
    }

    #[test]
    fn failure_keeps_values_and_returns_to_editing() {
        let mut form = filled_create_form();
        form.submit().expect("valid form submits");

        let notice = form.submission_finished(&Err(ServiceError::Status { status: 500 }));

        assert_eq!(
            notice.to_string(),
            "Booking Failed: There was an error processing your booking."
        );
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.input().email, "ann@example.com");
        assert!(form.submit().is_some());
    }

    #[test]
    fn update_notices() {
        let mut form = BookingForm::update(BookingId::from(1));
        assert_eq!(form.submission_finished(&Ok(None)).title, "Booking Updated");
        assert_eq!(form.state(), FormState::Done);
        assert_eq!(
            form.submission_finished(&Err(ServiceError::Network("down".into()))).to_string(),
            "Update Failed: There was an error updating the booking."
        );
    }

    #[test]
    fn bus_selector_cycles() {
        let mut form = BookingForm::create();
        form.buses_loaded(Ok(buses()));
        while form.focus() != FormField::Bus {
            form.handle_key(KeyInput::Tab);
        }

        form.handle_key(KeyInput::Right);
        assert_eq!(form.selected_bus_index(), Some(1));
        form.handle_key(KeyInput::Right);
        assert_eq!(form.selected_bus_index(), Some(0));
        form.handle_key(KeyInput::Left);
        assert_eq!(form.selected_bus_index(), Some(1));
    }

    #[test]
    fn keys_edit_only_the_focused_field() {
        let mut form = BookingForm::create();
        form.buses_loaded(Ok(buses()));
        form.handle_key(KeyInput::Tab);

        assert_eq!(form.handle_key(KeyInput::Char('x')), FormKey::Handled);
        assert_eq!(form.handle_key(KeyInput::Char('y')), FormKey::Handled);
        assert_eq!(form.handle_key(KeyInput::Left), FormKey::Handled);
        assert_eq!(form.handle_key(KeyInput::Backspace), FormKey::Handled);

        assert_eq!(form.field(FormField::Email).map(TextInput::text), Some("y"));
        assert_eq!(form.field(FormField::Name).map(TextInput::text), Some(""));
        assert_eq!(form.handle_key(KeyInput::Enter), FormKey::Submit);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = BookingForm::create();
        form.buses_loaded(Ok(Vec::new()));

        form.handle_key(KeyInput::BackTab);
        assert_eq!(form.focus(), FormField::Submit);
        form.handle_key(KeyInput::Tab);
        assert_eq!(form.focus(), FormField::Name);
    }
}
