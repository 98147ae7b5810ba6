//! Per-screen state.
//!
//! Each variant owns what its screen needs and is dropped on leaving it.
//! The pantry itself is not here: it outlives every screen.

use omycook_core::catalog::{RecipeBrowser, TrendingBrowser};
use omycook_core::ingredient::{CategoryFilter, Ingredient, IngredientList};
use omycook_core::login::LoginForm;
use omycook_core::navigation::Screen;
use omycook_core::profile::ProfileWizard;

use crate::chat_service::ChatService;
use crate::scan_service::ScanService;

/// Search box and category tab of the ingredient screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientView {
    pub search: String,
    pub filter: CategoryFilter,
}

impl IngredientView {
    /// The rows currently on screen, in list order.
    pub fn visible<'a>(&self, list: &'a IngredientList) -> Vec<&'a Ingredient> {
        list.filter(&self.search, self.filter)
    }
}

pub enum ScreenState {
    Home,
    Login(LoginForm),
    ProfileSetup(ProfileWizard),
    Ingredients(IngredientView),
    Recipes(RecipeBrowser),
    Chat(ChatService),
    Trending(TrendingBrowser),
    ReceiptScan(ScanService),
}

impl ScreenState {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Home,
            Self::Login(_) => Screen::Login,
            Self::ProfileSetup(_) => Screen::ProfileSetup,
            Self::Ingredients(_) => Screen::Ingredients,
            Self::Recipes(_) => Screen::Recipes,
            Self::Chat(_) => Screen::Chat,
            Self::Trending(_) => Screen::Trending,
            Self::ReceiptScan(_) => Screen::ReceiptScan,
        }
    }

    /// Releases anything a deferred job could still deliver into.
    pub async fn teardown(&self) {
        match self {
            Self::Chat(chat) => chat.shutdown().await,
            Self::ReceiptScan(scan) => scan.reset().await,
            _ => {}
        }
    }
}
