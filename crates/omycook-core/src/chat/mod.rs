//! Chat domain module.
//!
//! # Module Structure
//!
//! - `message`: conversation message types (`ChatRole`, `ChatMessage`)
//! - `engine`: the synchronous chat state machine (`ChatEngine`)
//! - `generator`: the reply capability (`ResponseGenerator`)
//!
//! The engine never waits: `send` hands back a [`PendingReply`] and whoever
//! drives it delivers the answer later through `receive_reply`.

mod engine;
mod generator;
mod message;

pub use engine::{ChatEngine, PendingReply, SendOutcome, GREETING, SUGGESTED_QUESTIONS};
pub use generator::ResponseGenerator;
pub use message::{ChatMessage, ChatRole};
