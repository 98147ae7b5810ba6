//! Deferred job execution and logging setup.

pub mod executor;
pub mod logging;

pub use executor::{DeferredExecutor, JobHandle};
