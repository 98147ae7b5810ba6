//! Application layer for omycook.
//!
//! Wires the core state machines to the capability implementations and the
//! deferred executor, and owns the session and per-screen state.

pub mod app;
pub mod chat_service;
pub mod event;
pub mod scan_service;
pub mod screen;

pub use app::OmycookApp;
pub use chat_service::ChatService;
pub use event::AppEvent;
pub use scan_service::ScanService;
pub use screen::{IngredientView, ScreenState};
