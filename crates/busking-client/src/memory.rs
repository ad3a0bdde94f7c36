//! In-process booking service.
//!
//! Implements the remote service contract over a shared in-memory table.
//! Used by integration tests to observe exactly which calls a workflow made,
//! and by the terminal client's demo mode when no service is configured.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use busking_core::{Booking, BookingId, BookingRequest, BookingService, Bus, BusId, ServiceError};

const BAD_REQUEST: u16 = 400;
const NOT_FOUND: u16 = 404;

/// A call received by [`MemoryBookingService`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    /// `GET /buses/`
    ListBuses,
    /// `GET /bookings/`
    ListBookings,
    /// `GET /bookings/{id}/`
    GetBooking(BookingId),
    /// `POST /bookings/`
    CreateBooking(BookingRequest),
    /// `PUT /bookings/{id}/`
    UpdateBooking(BookingId, BookingRequest),
}

/// In-memory booking service.
///
/// Clones share the same tables. Ids are assigned sequentially from 1 as
/// JSON integers. Creating or updating a booking that names no bus, or an
/// unknown bus, is rejected with status 400 the way a real service would.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookingService {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    buses: Vec<Bus>,
    bookings: BTreeMap<BookingId, Booking>,
    next_id: u64,
    calls: Vec<ServiceCall>,
}

impl Inner {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_bus(&self, booking: &BookingRequest) -> Result<(), ServiceError> {
        match booking.bus() {
            Some(bus) if self.buses.iter().any(|b| &b.id == bus) => Ok(()),
            _ => Err(ServiceError::Status { status: BAD_REQUEST }),
        }
    }
}

impl MemoryBookingService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Service seeded with a few buses, for demo mode.
    pub fn demo() -> Self {
        let service = Self::new();
        for name in ["City Express", "Airport Shuttle", "Night Liner"] {
            service.add_bus(name);
        }
        service
    }

    /// Add a bus and return its id.
    pub fn add_bus(&self, name: impl Into<String>) -> BusId {
        let mut inner = self.lock();
        let id = BusId::from(inner.allocate_id());
        inner.buses.push(Bus { id: id.clone(), name: name.into() });
        id
    }

    /// Store a booking directly (bypassing validation) and return its id.
    pub fn insert_booking(&self, mut booking: Booking) -> BookingId {
        let mut inner = self.lock();
        let id = booking.id.clone().unwrap_or_else(|| BookingId::from(inner.allocate_id()));
        booking.id = Some(id.clone());
        inner.bookings.insert(id.clone(), booking);
        id
    }

    /// Booking by id.
    pub fn booking(&self, id: &BookingId) -> Option<Booking> {
        self.lock().bookings.get(id).cloned()
    }

    /// All stored bookings, ordered by id.
    pub fn bookings(&self) -> Vec<Booking> {
        self.lock().bookings.values().cloned().collect()
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookingService for MemoryBookingService {
    async fn list_buses(&self) -> Result<Vec<Bus>, ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::ListBuses);
        Ok(inner.buses.clone())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::ListBookings);
        Ok(inner.bookings.values().cloned().collect())
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking, ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::GetBooking(id.clone()));
        inner.bookings.get(id).cloned().ok_or(ServiceError::Status { status: NOT_FOUND })
    }

    async fn create_booking(
        &self,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::CreateBooking(booking.clone()));
        inner.check_bus(booking)?;

        let id = BookingId::from(inner.allocate_id());
        let created = booking.to_booking(Some(id.clone()));
        inner.bookings.insert(id, created.clone());
        Ok(Some(created))
    }

    async fn update_booking(
        &self,
        id: &BookingId,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::UpdateBooking(id.clone(), booking.clone()));
        if !inner.bookings.contains_key(id) {
            return Err(ServiceError::Status { status: NOT_FOUND });
        }
        inner.check_bus(booking)?;

        let updated = booking.to_booking(Some(id.clone()));
        inner.bookings.insert(id.clone(), updated.clone());
        Ok(Some(updated))
    }
}
