//! Top-level screens.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// One of the eight mutually exclusive top-level views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    Login,
    ProfileSetup,
    Ingredients,
    Recipes,
    Chat,
    Trending,
    ReceiptScan,
}

impl Screen {
    /// Parses a screen id, falling back to `Home` for anything unknown.
    pub fn parse_or_home(id: &str) -> Self {
        id.trim().parse().unwrap_or_default()
    }

    /// The kebab-case id (`"profile-setup"`, `"receipt-scan"`, ...).
    pub fn id(&self) -> &str {
        self.as_ref()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "오마이쿡",
            Self::Login => "로그인",
            Self::ProfileSetup => "프로필 설정",
            Self::Ingredients => "재료 관리",
            Self::Recipes => "AI 추천 레시피",
            Self::Chat => "요리 채팅",
            Self::Trending => "인기 요리",
            Self::ReceiptScan => "영수증 스캔",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!(Screen::parse_or_home("profile-setup"), Screen::ProfileSetup);
        assert_eq!(Screen::parse_or_home("receipt-scan"), Screen::ReceiptScan);
        assert_eq!(Screen::parse_or_home(" chat "), Screen::Chat);
    }

    #[test]
    fn test_unknown_id_falls_back_to_home() {
        assert_eq!(Screen::parse_or_home("bogus"), Screen::Home);
        assert_eq!(Screen::parse_or_home(""), Screen::Home);
    }

    #[test]
    fn test_ids_round_trip() {
        assert_eq!(Screen::iter().count(), 8);
        for screen in Screen::iter() {
            assert_eq!(Screen::parse_or_home(screen.id()), screen);
        }
    }
}
