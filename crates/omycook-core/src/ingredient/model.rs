//! Ingredient domain model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::error::OmycookError;

/// Pantry category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    #[strum(to_string = "vegetable", serialize = "채소")]
    Vegetable,
    #[strum(to_string = "meat", serialize = "육류")]
    Meat,
    #[strum(to_string = "seafood", serialize = "해산물")]
    Seafood,
    #[strum(to_string = "dairy", serialize = "유제품")]
    Dairy,
    #[strum(to_string = "pickled", serialize = "절임")]
    Pickled,
    #[strum(to_string = "seasoning", serialize = "조미료")]
    Seasoning,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vegetable => "채소",
            Self::Meat => "육류",
            Self::Seafood => "해산물",
            Self::Dairy => "유제품",
            Self::Pickled => "절임",
            Self::Seasoning => "조미료",
        }
    }
}

/// The category tab of the ingredient screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = OmycookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s == "전체" {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| OmycookError::invalid_input(format!("unknown category '{}'", s)))
    }
}

/// A pantry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// An item waiting to be added, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl NewIngredient {
    pub fn new(name: impl Into<String>, category: Category, quantity: Option<String>) -> Self {
        Self {
            name: name.into(),
            category,
            quantity,
        }
    }
}
