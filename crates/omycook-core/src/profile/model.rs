//! Cooking profile domain model.
//!
//! The vocabularies below are closed: every option the setup flow offers is a
//! variant, so rendering code gets an exhaustive `match` instead of string
//! comparisons. Keys are the stable English identifiers; labels are what the
//! user sees.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::selection::MultiSelect;
use crate::error::{OmycookError, Result};

/// Self-assessed cooking skill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CookingLevel {
    #[strum(to_string = "beginner", serialize = "초급")]
    Beginner,
    #[strum(to_string = "intermediate", serialize = "중급")]
    Intermediate,
    #[strum(to_string = "advanced", serialize = "고급")]
    Advanced,
}

impl CookingLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "초급",
            Self::Intermediate => "중급",
            Self::Advanced => "고급",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Beginner => "라면, 계란 요리",
            Self::Intermediate => "볶음, 찌개",
            Self::Advanced => "모든 요리 가능",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Allergy {
    #[strum(to_string = "egg", serialize = "계란")]
    Egg,
    #[strum(to_string = "milk", serialize = "우유")]
    Milk,
    #[strum(to_string = "nuts", serialize = "견과류")]
    Nuts,
    #[strum(to_string = "shellfish", serialize = "갑각류")]
    Shellfish,
    #[strum(to_string = "wheat", serialize = "밀가루")]
    Wheat,
    #[strum(to_string = "soy", serialize = "대두")]
    Soy,
    #[strum(to_string = "fish", serialize = "생선")]
    Fish,
}

impl Allergy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Egg => "계란",
            Self::Milk => "우유",
            Self::Nuts => "견과류",
            Self::Shellfish => "갑각류",
            Self::Wheat => "밀가루",
            Self::Soy => "대두",
            Self::Fish => "생선",
        }
    }
}

/// Time budget for one meal, keyed by its upper bound in minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
pub enum CookingTime {
    #[serde(rename = "10")]
    #[strum(serialize = "10")]
    UpTo10,
    #[serde(rename = "30")]
    #[strum(serialize = "30")]
    UpTo30,
    #[serde(rename = "60")]
    #[strum(serialize = "60")]
    Over30,
}

impl CookingTime {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpTo10 => "10분 이하",
            Self::UpTo30 => "10-30분",
            Self::Over30 => "30분 이상",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KitchenTool {
    #[strum(to_string = "microwave", serialize = "전자레인지")]
    Microwave,
    #[strum(to_string = "induction", serialize = "인덕션")]
    Induction,
    #[strum(to_string = "gas_stove", serialize = "가스레인지")]
    GasStove,
    #[strum(to_string = "air_fryer", serialize = "에어프라이어")]
    AirFryer,
    #[strum(to_string = "oven", serialize = "오븐")]
    Oven,
    #[strum(to_string = "blender", serialize = "믹서기")]
    Blender,
}

impl KitchenTool {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Microwave => "전자레인지",
            Self::Induction => "인덕션",
            Self::GasStove => "가스레인지",
            Self::AirFryer => "에어프라이어",
            Self::Oven => "오븐",
            Self::Blender => "믹서기",
        }
    }
}

/// Preferred heat, 1 (mild) to 5 (very hot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpicyLevel(u8);

impl SpicyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(OmycookError::invalid_input(format!(
                "spicy level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "안 매워요",
            2 => "약간 매워요",
            3 => "보통이에요",
            4 => "매워요",
            _ => "아주 매워요",
        }
    }
}

impl Default for SpicyLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for SpicyLevel {
    type Error = OmycookError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SpicyLevel> for u8 {
    fn from(level: SpicyLevel) -> Self {
        level.0
    }
}

/// Preferences collected so far by the setup flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub cooking_level: Option<CookingLevel>,
    pub allergies: MultiSelect<Allergy>,
    pub spicy_level: SpicyLevel,
    pub cooking_time: Option<CookingTime>,
    pub kitchen_tools: MultiSelect<KitchenTool>,
}

impl ProfileDraft {
    /// Freezes the draft into a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first required field that is still
    /// unset (cooking level, cooking time, at least one kitchen tool).
    pub fn into_profile(self) -> Result<Profile> {
        let cooking_level = self
            .cooking_level
            .ok_or_else(|| OmycookError::invalid_input("cooking level is not selected"))?;
        let cooking_time = self
            .cooking_time
            .ok_or_else(|| OmycookError::invalid_input("cooking time is not selected"))?;
        if self.kitchen_tools.is_empty() {
            return Err(OmycookError::invalid_input("no kitchen tool is selected"));
        }

        Ok(Profile {
            cooking_level,
            allergies: self.allergies,
            spicy_level: self.spicy_level,
            cooking_time,
            kitchen_tools: self.kitchen_tools,
        })
    }
}

/// A completed cooking profile, handed to the session once setup finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub cooking_level: CookingLevel,
    pub allergies: MultiSelect<Allergy>,
    pub spicy_level: SpicyLevel,
    pub cooking_time: CookingTime,
    pub kitchen_tools: MultiSelect<KitchenTool>,
}
