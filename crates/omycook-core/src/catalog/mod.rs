//! Recipe catalog module.
//!
//! # Module Structure
//!
//! - `model`: read-only catalog entries (`Recipe`, `TrendingRecipe`, `Cuisine`)
//! - `preset`: the built-in catalogs
//! - `browser`: grid/detail selection and the trending time window

mod browser;
mod model;
mod preset;

pub use browser::{BrowserView, RecipeBrowser, TimeWindow, TrendingBrowser, format_count};
pub use model::{COOKING_STEPS, Cuisine, Recipe, TrendingRecipe};
pub use preset::{recommended_recipes, trending_recipes};
