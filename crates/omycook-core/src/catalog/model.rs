//! Catalog domain model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Generic preparation steps shown on every recipe detail page.
pub const COOKING_STEPS: [&str; 4] = [
    "재료를 준비하고 손질합니다.",
    "팬에 기름을 두르고 중불로 예열합니다.",
    "준비된 재료를 넣고 볶아줍니다.",
    "간을 맞추고 완성합니다.",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Cuisine {
    #[strum(to_string = "korean", serialize = "한식")]
    Korean,
    #[strum(to_string = "western", serialize = "양식")]
    Western,
    #[strum(to_string = "chinese", serialize = "중식")]
    Chinese,
    #[strum(to_string = "japanese", serialize = "일식")]
    Japanese,
    #[strum(to_string = "fusion", serialize = "퓨전")]
    Fusion,
}

impl Cuisine {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Korean => "한식",
            Self::Western => "양식",
            Self::Chinese => "중식",
            Self::Japanese => "일식",
            Self::Fusion => "퓨전",
        }
    }
}

/// A recommended recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Minutes.
    pub time: u32,
    /// 1 to 3 stars.
    pub difficulty: u8,
    /// 0 to 5 chilies.
    pub spicy_level: u8,
    pub servings: u32,
    pub calories: u32,
    pub cuisine: Cuisine,
    pub available_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    #[serde(default)]
    pub substitutes: BTreeMap<String, String>,
}

impl Recipe {
    /// The substitute hint for a missing ingredient, or "필요" when none is known.
    pub fn substitute_for(&self, ingredient: &str) -> &str {
        self.substitutes
            .get(ingredient)
            .map(String::as_str)
            .unwrap_or("필요")
    }

    /// Whether the recipe needs anything the pantry lacks.
    pub fn needs_substitutes(&self) -> bool {
        !self.missing_ingredients.is_empty()
    }
}

/// A ranked entry of the trending board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingRecipe {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub image_url: String,
    pub views: u64,
    pub likes: u64,
    pub time: u32,
    pub servings: u32,
    pub cuisine: Cuisine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}
