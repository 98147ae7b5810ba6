pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod home;
pub mod ingredient;
pub mod login;
pub mod navigation;
pub mod profile;
pub mod receipt;

pub use error::{OmycookError, Result};
