//! Application layer for Busking
//!
//! Pure state machines and generic runtime for the booking client, so the
//! same workflow code runs under the terminal front end and under scripted
//! test drivers.
//!
//! # Components
//!
//! - [`App`]: navigation shell (home, lists, booking forms, notices)
//! - [`BookingForm`]: create/update booking workflow
//! - [`Bridge`]: turns App request actions into service futures
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod driver;
mod event;
mod form;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use bridge::{Bridge, PendingRequest};
pub use driver::Driver;
pub use event::AppEvent;
pub use form::{BookingForm, FormField, FormKey, FormMode, FormRequest, FormState};
pub use input::{KeyInput, TextInput};
pub use runtime::Runtime;
pub use state::{HomeItem, ListView, Notice, Route, Screen, Ticket};
