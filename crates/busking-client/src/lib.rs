//! Booking service implementations
//!
//! Concrete [`BookingService`](busking_core::BookingService) implementations
//! for the Busking client.
//!
//! # Components
//!
//! - [`HttpBookingService`]: the remote HTTP/JSON service via reqwest
//! - [`MemoryBookingService`]: in-process service for tests and demo mode
//! - [`ChaoticBookingService`]: wrapper that injects network failures
//! - [`ServiceConfig`]: base URL configuration, read once at startup

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chaotic;
mod config;
mod http;
mod memory;

pub use busking_core::{BookingService, ServiceError};
pub use chaotic::ChaoticBookingService;
pub use config::{API_URL_ENV, ConfigError, LEGACY_API_URL_ENV, ServiceConfig};
pub use http::HttpBookingService;
pub use memory::{MemoryBookingService, ServiceCall};
