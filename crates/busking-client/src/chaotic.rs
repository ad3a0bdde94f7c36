//! Chaotic service wrapper for fault injection testing
//!
//! Wraps another [`BookingService`] and fails calls at configured rates with
//! a network error, before they reach the inner service. Reads (the list and
//! get calls) and writes (create and update) have separate rates so tests
//! can load reference data reliably and still exercise failed submissions.

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use busking_core::{Booking, BookingId, BookingRequest, BookingService, Bus, ServiceError};

const INJECTED: &str = "chaotic failure injection";

/// Chaotic service wrapper that randomly injects network failures
#[derive(Debug, Clone)]
pub struct ChaoticBookingService<S: BookingService> {
    inner: S,
    /// Failure rate for reads (0.0 = never fail, 1.0 = always fail)
    read_failure_rate: f64,
    /// Failure rate for writes
    write_failure_rate: f64,
    /// RNG state for deterministic chaos
    rng: Arc<Mutex<ChaoticRng>>,
    injected: Arc<AtomicUsize>,
}

/// Simple deterministic RNG for chaos injection
///
/// Linear congruential generator; the same seed gives the same failures.
#[derive(Debug)]
struct ChaoticRng {
    state: u64,
}

impl ChaoticRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next random value [0.0, 1.0)
    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> f64 {
        // LCG constants from Numerical Recipes
        const A: u64 = 1_664_525;
        const C: u64 = 1_013_904_223;
        const M: u64 = 1u64 << 32;

        self.state = (A.wrapping_mul(self.state).wrapping_add(C)) % M;
        (self.state as f64) / (M as f64)
    }
}

impl<S: BookingService> ChaoticBookingService<S> {
    /// Wrap `inner`, failing reads and writes at the same rate.
    ///
    /// # Panics
    ///
    /// Panics if `failure_rate` is not in [0.0, 1.0]
    pub fn new(inner: S, failure_rate: f64) -> Self {
        Self::with_rates(inner, failure_rate, failure_rate, 0x1234_5678_9ABC_DEF0)
    }

    /// Wrap `inner` with separate read/write rates and an explicit seed.
    ///
    /// # Panics
    ///
    /// Panics if either rate is not in [0.0, 1.0]
    pub fn with_rates(
        inner: S,
        read_failure_rate: f64,
        write_failure_rate: f64,
        seed: u64,
    ) -> Self {
        for rate in [read_failure_rate, write_failure_rate] {
            assert!(
                (0.0..=1.0).contains(&rate),
                "failure rate must be between 0.0 and 1.0, got {rate}"
            );
        }

        Self {
            inner,
            read_failure_rate,
            write_failure_rate,
            rng: Arc::new(Mutex::new(ChaoticRng::new(seed))),
            injected: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Underlying service (for checking state after chaos).
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of calls failed by injection so far.
    pub fn injected_failures(&self) -> usize {
        self.injected.load(Ordering::Relaxed)
    }

    fn inject(&self, rate: f64) -> Result<(), ServiceError> {
        let roll = self.rng.lock().unwrap_or_else(PoisonError::into_inner).next();
        if roll < rate {
            self.injected.fetch_add(1, Ordering::Relaxed);
            return Err(ServiceError::Network(INJECTED.to_string()));
        }
        Ok(())
    }
}

impl<S: BookingService> BookingService for ChaoticBookingService<S> {
    async fn list_buses(&self) -> Result<Vec<Bus>, ServiceError> {
        self.inject(self.read_failure_rate)?;
        self.inner.list_buses().await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        self.inject(self.read_failure_rate)?;
        self.inner.list_bookings().await
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking, ServiceError> {
        self.inject(self.read_failure_rate)?;
        self.inner.get_booking(id).await
    }

    async fn create_booking(
        &self,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        self.inject(self.write_failure_rate)?;
        self.inner.create_booking(booking).await
    }

    async fn update_booking(
        &self,
        id: &BookingId,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        self.inject(self.write_failure_rate)?;
        self.inner.update_booking(id, booking).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryBookingService, ServiceCall};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn zero_rate_never_fails() {
        let memory = MemoryBookingService::demo();
        let chaotic = ChaoticBookingService::new(memory, 0.0);

        for _ in 0..20 {
            assert_eq!(block_on(chaotic.list_buses()).map(|b| b.len()), Ok(3));
        }
        assert_eq!(chaotic.injected_failures(), 0);
    }

    #[test]
    fn failed_writes_never_reach_inner_service() {
        let memory = MemoryBookingService::demo();
        let chaotic = ChaoticBookingService::with_rates(memory.clone(), 0.0, 1.0, 7);

        let buses = block_on(chaotic.list_buses()).expect("reads succeed");
        let request = busking_core::BookingInput {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "1234567890".into(),
            seats: "1".into(),
        }
        .to_request(Some(buses[0].id.clone()))
        .expect("valid input");

        let result = block_on(chaotic.create_booking(&request));

        assert!(matches!(result, Err(ServiceError::Network(_))));
        assert_eq!(chaotic.injected_failures(), 1);
        assert_eq!(memory.calls(), vec![ServiceCall::ListBuses]);
    }

    #[test]
    fn same_seed_same_failures() {
        let outcomes = |seed| {
            let chaotic =
                ChaoticBookingService::with_rates(MemoryBookingService::demo(), 0.5, 0.5, seed);
            (0..32).map(|_| block_on(chaotic.list_buses()).is_ok()).collect::<Vec<_>>()
        };

        assert_eq!(outcomes(42), outcomes(42));
    }
}
