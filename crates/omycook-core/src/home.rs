//! Home screen content.

use crate::navigation::Screen;

pub const APP_TITLE: &str = "오마이쿡";
pub const APP_SUBTITLE: &str = "냉장고 재료로 만드는 AI 맞춤 레시피";
pub const LOGIN_PROMPT: &str = "로그인 / 회원가입";

/// A tile on the home screen linking to another screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Screen,
}

/// The six feature cards, in display order.
pub fn feature_cards() -> [FeatureCard; 6] {
    [
        FeatureCard {
            title: "프로필",
            description: "맞춤 설정",
            target: Screen::ProfileSetup,
        },
        FeatureCard {
            title: "재료 관리",
            description: "냉장고 속 재료",
            target: Screen::Ingredients,
        },
        FeatureCard {
            title: "AI 추천",
            description: "오늘의 레시피",
            target: Screen::Recipes,
        },
        FeatureCard {
            title: "요리 채팅",
            description: "AI 어시스턴트",
            target: Screen::Chat,
        },
        FeatureCard {
            title: "인기 요리",
            description: "트렌드 레시피",
            target: Screen::Trending,
        },
        FeatureCard {
            title: "영수증 스캔",
            description: "자동 재료 등록",
            target: Screen::ReceiptScan,
        },
    ]
}

/// The login call-to-action is only offered to guests.
pub fn shows_login_prompt(is_logged_in: bool) -> bool {
    !is_logged_in
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_cover_every_feature_screen() {
        let targets: Vec<Screen> = feature_cards().iter().map(|c| c.target).collect();
        assert_eq!(targets.len(), 6);
        assert!(!targets.contains(&Screen::Home));
        assert!(!targets.contains(&Screen::Login));
        assert!(targets.contains(&Screen::ReceiptScan));
    }

    #[test]
    fn test_login_prompt_only_for_guests() {
        assert!(shows_login_prompt(false));
        assert!(!shows_login_prompt(true));
    }
}
