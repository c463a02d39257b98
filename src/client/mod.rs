// src/client/mod.rs

//! Client side of the quiz: the session state machine and its HTTP transport.
//!
//! The controller owns all session state and renders into a plain [`View`]
//! value, so any front end (terminal, test harness) can drive it.

pub mod api;
pub mod controller;
pub mod session;
pub mod view;

pub use api::{ClientError, HttpQuizApi, QuizApi};
pub use controller::{Control, ControllerError, QuizController, Screen};
pub use session::QuizSession;
pub use view::View;
