//! Observable application state types.
//!
//! This module defines the data structures the UI renders: the current
//! [`Screen`], list views over fetched data, navigation [`Route`]s and the
//! user-facing [`Notice`].

use std::fmt;

use busking_core::{Booking, BookingId, Bus, ServiceError};

use crate::BookingForm;

/// Identity of one screen instance.
///
/// Every navigation issues a new ticket. Requests carry the ticket of the
/// screen that made them, so a result arriving after the user moved on can
/// be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    /// Ticket of the next screen instance.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Navigation destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Start menu.
    Home,
    /// Bus reference list.
    Buses,
    /// Booking list.
    Bookings,
    /// Create booking form.
    NewBooking,
    /// Update booking form for an existing booking.
    EditBooking(BookingId),
}

/// Entries of the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    /// Open the bus list.
    Buses,
    /// Open the booking list.
    Bookings,
    /// Open the create form.
    NewBooking,
}

impl HomeItem {
    /// Menu entries in display order.
    pub const ALL: [HomeItem; 3] = [HomeItem::Buses, HomeItem::Bookings, HomeItem::NewBooking];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            HomeItem::Buses => "Buses",
            HomeItem::Bookings => "Bookings",
            HomeItem::NewBooking => "New booking",
        }
    }

    /// Destination of this entry.
    pub fn route(self) -> Route {
        match self {
            HomeItem::Buses => Route::Buses,
            HomeItem::Bookings => Route::Bookings,
            HomeItem::NewBooking => Route::NewBooking,
        }
    }
}

/// A fetched list with a selection cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<T> {
    items: Vec<T>,
    selected: usize,
    loading: bool,
    failed: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self { items: Vec::new(), selected: 0, loading: true, failed: false }
    }
}

impl<T> ListView<T> {
    /// Empty list waiting for its fetch.
    pub fn loading() -> Self {
        Self::default()
    }

    /// Store a fetch result. A failure leaves the list empty.
    pub fn load(&mut self, result: Result<Vec<T>, ServiceError>) {
        self.loading = false;
        self.selected = 0;
        match result {
            Ok(items) => {
                self.items = items;
                self.failed = false;
            },
            Err(_) => {
                self.items.clear();
                self.failed = true;
            },
        }
    }

    /// Fetched items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the selected item.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selected item. `None` when the list is empty.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Fetch still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last fetch failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Move selection down, stopping at the last item.
    pub fn select_next(&mut self) {
        if self.selected.saturating_add(1) < self.items.len() {
            self.selected += 1;
        }
    }

    /// Move selection up, stopping at the first item.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// What the user is looking at.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Start menu with the highlighted entry.
    Home {
        /// Index into [`HomeItem::ALL`].
        selected: usize,
    },
    /// Bus list.
    Buses(ListView<Bus>),
    /// Booking list.
    Bookings(ListView<Booking>),
    /// Create or update form.
    Form(Box<BookingForm>),
}

/// A user-visible alert: short title plus message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Alert title.
    pub title: &'static str,
    /// Alert body.
    pub message: &'static str,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
