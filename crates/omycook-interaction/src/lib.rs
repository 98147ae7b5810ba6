//! Canned capability implementations.
//!
//! Both stand in for a real backend: they wait a fixed delay and answer from
//! fixed data.

pub mod canned_chat;
pub mod canned_receipt;

pub use canned_chat::{CANNED_REPLIES, CannedResponseGenerator};
pub use canned_receipt::CannedReceiptRecognizer;
