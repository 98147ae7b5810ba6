//! Ingredient domain module.
//!
//! # Module Structure
//!
//! - `model`: `Ingredient`, its `Category` vocabulary and the `CategoryFilter` tab
//! - `list`: the in-memory pantry (`IngredientList`)

mod list;
mod model;

pub use list::IngredientList;
pub use model::{Category, CategoryFilter, Ingredient, NewIngredient};
