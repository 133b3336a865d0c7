//! A four-function calculator with history and memory.
//!
//! The engine in [`calculator`] is a pure state machine: a [`Calculator`]
//! takes a [`CalculatorState`] and a [`Command`] and returns the next state.
//! The [`session`] and [`ui`] modules put a terminal front end on top of it.

pub mod calculator;
pub mod config;
pub mod error;
pub mod session;
pub mod ui;

pub use calculator::{Calculator, CalculatorState, Command, Settings};
pub use error::ConfigError;
