//! Conversation controller.
//!
//! A `ConversationController` owns one session's history and drives the
//! Idle -> Generating -> Idle cycle for each user prompt.

mod chat;
mod manager;
mod types;


pub use manager::ConversationController;
pub use types::{ControllerState, Outcome, SubmitError};
