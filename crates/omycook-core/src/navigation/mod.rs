//! Navigation domain module.
//!
//! # Module Structure
//!
//! - `screen`: the closed set of top-level screens (`Screen`)
//! - `session`: session state and its pure reducer (`Session`, `NavAction`)

mod screen;
mod session;

pub use screen::Screen;
pub use session::{NavAction, Session};
