//! Terminal UI for Busking
//!
//! A thin shell over [`busking_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`busking_app::Runtime`]
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use busking_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
