//! Session state and navigation transitions.

use serde::{Deserialize, Serialize};

use super::screen::Screen;
use crate::profile::Profile;

/// A navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Switch to a screen unconditionally.
    Navigate(Screen),
    /// Mark the session logged in and start profile setup.
    Login { email: String },
    /// Store a finished profile and return home.
    CompleteProfile(Profile),
}

/// Volatile session state.
///
/// Created with defaults at start-up (home, logged out, no profile) and only
/// ever replaced through [`Session::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_screen: Screen,
    pub is_logged_in: bool,
    pub user_profile: Option<Profile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` and returns the next session.
    pub fn reduce(self, action: NavAction) -> Self {
        match action {
            NavAction::Navigate(screen) => Self {
                current_screen: screen,
                ..self
            },
            NavAction::Login { email } => {
                tracing::info!(email = %email, "Session logged in");
                Self {
                    current_screen: Screen::ProfileSetup,
                    is_logged_in: true,
                    ..self
                }
            }
            NavAction::CompleteProfile(profile) => Self {
                current_screen: Screen::Home,
                user_profile: Some(profile),
                ..self
            },
        }
    }

    pub fn navigate(self, screen: Screen) -> Self {
        self.reduce(NavAction::Navigate(screen))
    }

    pub fn login(self, email: impl Into<String>) -> Self {
        self.reduce(NavAction::Login {
            email: email.into(),
        })
    }

    pub fn complete_profile(self, profile: Profile) -> Self {
        self.reduce(NavAction::CompleteProfile(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CookingLevel, CookingTime, KitchenTool, ProfileDraft};

    fn sample_profile() -> Profile {
        let mut draft = ProfileDraft::default();
        draft.cooking_level = Some(CookingLevel::Beginner);
        draft.cooking_time = Some(CookingTime::UpTo10);
        draft.kitchen_tools.toggle(KitchenTool::Microwave);
        draft.into_profile().unwrap()
    }

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.current_screen, Screen::Home);
        assert!(!session.is_logged_in);
        assert!(session.user_profile.is_none());
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let session = Session::new().navigate(Screen::ReceiptScan);
        assert_eq!(session.current_screen, Screen::ReceiptScan);
        assert!(!session.is_logged_in);

        let session = session.navigate(Screen::ProfileSetup);
        assert_eq!(session.current_screen, Screen::ProfileSetup);
    }

    #[test]
    fn test_login_routes_to_profile_setup() {
        let session = Session::new().navigate(Screen::Login).login("cook@example.com");
        assert!(session.is_logged_in);
        assert_eq!(session.current_screen, Screen::ProfileSetup);
        assert!(session.user_profile.is_none());
    }

    #[test]
    fn test_complete_profile_routes_home() {
        let profile = sample_profile();
        let session = Session::new()
            .login("cook@example.com")
            .complete_profile(profile.clone());
        assert_eq!(session.current_screen, Screen::Home);
        assert_eq!(session.user_profile, Some(profile));
        assert!(session.is_logged_in);
    }
}
