//! The application root.
//!
//! `OmycookApp` holds the session, the pantry and the state of the screen on
//! display. Every screen change goes through the session reducer; leaving a
//! screen tears its state down and, unless configured otherwise, cancels the
//! deferred jobs it started.

use std::sync::Arc;

use omycook_core::catalog::{RecipeBrowser, TrendingBrowser};
use omycook_core::chat::{ResponseGenerator, SendOutcome};
use omycook_core::config::AppConfig;
use omycook_core::home::feature_cards;
use omycook_core::ingredient::{Category, CategoryFilter, Ingredient, IngredientList};
use omycook_core::login::LoginForm;
use omycook_core::navigation::{NavAction, Screen, Session};
use omycook_core::profile::{BackTransition, NextTransition, ProfileWizard};
use omycook_core::receipt::{ReceiptRecognizer, UploadedImage};
use omycook_execution::DeferredExecutor;
use omycook_interaction::{CannedReceiptRecognizer, CannedResponseGenerator};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::chat_service::ChatService;
use crate::event::AppEvent;
use crate::scan_service::ScanService;
use crate::screen::{IngredientView, ScreenState};

pub struct OmycookApp {
    config: AppConfig,
    session: Session,
    ingredients: IngredientList,
    screen: ScreenState,
    executor: Arc<DeferredExecutor>,
    generator: Arc<dyn ResponseGenerator>,
    recognizer: Arc<dyn ReceiptRecognizer>,
    events: UnboundedSender<AppEvent>,
}

impl OmycookApp {
    /// Creates the app on the home screen with the starter pantry.
    ///
    /// The receiver yields the [`AppEvent`]s of deferred jobs.
    pub fn new(
        config: AppConfig,
        generator: Arc<dyn ResponseGenerator>,
        recognizer: Arc<dyn ReceiptRecognizer>,
    ) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let app = Self {
            config,
            session: Session::new(),
            ingredients: IngredientList::with_starter_items(),
            screen: ScreenState::Home,
            executor: Arc::new(DeferredExecutor::new()),
            generator,
            recognizer,
            events,
        };
        (app, receiver)
    }

    /// Creates the app with the canned chat and receipt capabilities, timed
    /// from `config`.
    pub fn with_canned_capabilities(config: AppConfig) -> (Self, UnboundedReceiver<AppEvent>) {
        let generator = Arc::new(CannedResponseGenerator::new(config.chat_reply_delay()));
        let recognizer = Arc::new(CannedReceiptRecognizer::new(config.scan_processing_delay()));
        Self::new(config, generator, recognizer)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_screen(&self) -> Screen {
        self.session.current_screen
    }

    pub fn screen_state(&self) -> &ScreenState {
        &self.screen
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    /// Deferred jobs still running.
    pub fn pending_jobs(&self) -> usize {
        self.executor.pending()
    }

    // Navigation

    pub async fn navigate(&mut self, screen: Screen) {
        self.dispatch(NavAction::Navigate(screen)).await;
    }

    /// Follows home feature card `index` (0-based).
    pub async fn open_feature(&mut self, index: usize) -> Option<Screen> {
        let target = feature_cards().get(index)?.target;
        self.navigate(target).await;
        Some(target)
    }

    pub async fn login(&mut self, email: impl Into<String>) {
        self.dispatch(NavAction::Login {
            email: email.into(),
        })
        .await;
    }

    async fn dispatch(&mut self, action: NavAction) {
        let previous = self.session.current_screen;
        self.session = std::mem::take(&mut self.session).reduce(action);
        let next = self.session.current_screen;
        if previous == next {
            return;
        }

        self.screen.teardown().await;
        if self.config.navigation.cancel_pending_on_leave {
            self.executor.cancel_all();
        }
        self.screen = self.enter(next);
        tracing::debug!(from = previous.id(), to = next.id(), "Screen changed");
    }

    fn enter(&self, screen: Screen) -> ScreenState {
        match screen {
            Screen::Home => ScreenState::Home,
            Screen::Login => ScreenState::Login(LoginForm::new()),
            Screen::ProfileSetup => ScreenState::ProfileSetup(ProfileWizard::new()),
            Screen::Ingredients => ScreenState::Ingredients(IngredientView::default()),
            Screen::Recipes => ScreenState::Recipes(RecipeBrowser::default()),
            Screen::Chat => ScreenState::Chat(ChatService::new(
                Arc::clone(&self.generator),
                Arc::clone(&self.executor),
                self.events.clone(),
            )),
            Screen::Trending => ScreenState::Trending(TrendingBrowser::default()),
            Screen::ReceiptScan => ScreenState::ReceiptScan(ScanService::new(
                Arc::clone(&self.recognizer),
                Arc::clone(&self.executor),
                self.events.clone(),
            )),
        }
    }

    // Login

    pub fn login_form_mut(&mut self) -> Option<&mut LoginForm> {
        match &mut self.screen {
            ScreenState::Login(form) => Some(form),
            _ => None,
        }
    }

    /// Submits the login form; on success the session logs in and profile
    /// setup starts.
    pub async fn submit_login(&mut self) -> Option<String> {
        let email = match &self.screen {
            ScreenState::Login(form) => form.submit()?,
            _ => return None,
        };
        self.login(email.clone()).await;
        Some(email)
    }

    // Profile setup

    pub fn wizard(&self) -> Option<&ProfileWizard> {
        match &self.screen {
            ScreenState::ProfileSetup(wizard) => Some(wizard),
            _ => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut ProfileWizard> {
        match &mut self.screen {
            ScreenState::ProfileSetup(wizard) => Some(wizard),
            _ => None,
        }
    }

    /// Advances the wizard; a completed profile is stored and home is shown.
    pub async fn wizard_next(&mut self) -> Option<NextTransition> {
        let transition = self.wizard_mut()?.next();
        if let NextTransition::Completed(profile) = &transition {
            self.dispatch(NavAction::CompleteProfile(profile.clone())).await;
        }
        Some(transition)
    }

    /// Steps the wizard back; backing out of the first step returns home.
    pub async fn wizard_back(&mut self) -> Option<BackTransition> {
        let transition = self.wizard_mut()?.back();
        if transition == BackTransition::Exited {
            self.navigate(Screen::Home).await;
        }
        Some(transition)
    }

    // Ingredients

    pub fn ingredient_view(&self) -> Option<&IngredientView> {
        match &self.screen {
            ScreenState::Ingredients(view) => Some(view),
            _ => None,
        }
    }

    pub fn ingredient_view_mut(&mut self) -> Option<&mut IngredientView> {
        match &mut self.screen {
            ScreenState::Ingredients(view) => Some(view),
            _ => None,
        }
    }

    /// Rows of the ingredient screen with its search and tab applied.
    pub fn visible_ingredients(&self) -> Vec<&Ingredient> {
        match &self.screen {
            ScreenState::Ingredients(view) => view.visible(&self.ingredients),
            _ => self.ingredients.filter("", CategoryFilter::All),
        }
    }

    pub fn add_ingredient(
        &mut self,
        name: &str,
        category: Category,
        quantity: Option<String>,
    ) -> Option<Ingredient> {
        let added = self.ingredients.add(name.trim(), category, quantity)?.clone();
        tracing::info!(name = %added.name, category = added.category.label(), "Ingredient added");
        Some(added)
    }

    /// Removes the `position`-th visible row (0-based).
    pub fn remove_visible_ingredient(&mut self, position: usize) -> Option<Ingredient> {
        let target = self.visible_ingredients().get(position).map(|i| (*i).clone())?;
        self.ingredients.remove(&target.id).then_some(target)
    }

    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        self.ingredients.remove(id)
    }

    // Chat

    pub fn chat(&self) -> Option<&ChatService> {
        match &self.screen {
            ScreenState::Chat(chat) => Some(chat),
            _ => None,
        }
    }

    /// Sends `text` on the chat screen.
    pub async fn send_chat(&self, text: impl Into<String>) -> Option<SendOutcome> {
        Some(self.chat()?.send(Some(text.into())).await)
    }

    // Receipt scan

    pub fn scan(&self) -> Option<&ScanService> {
        match &self.screen {
            ScreenState::ReceiptScan(scan) => Some(scan),
            _ => None,
        }
    }

    pub async fn upload_receipt(&self, image: UploadedImage) -> Option<bool> {
        Some(self.scan()?.upload(image).await)
    }

    /// Commits the confirmed scan results to the pantry and opens the
    /// ingredient screen. Returns how many items were added.
    pub async fn save_scan(&mut self) -> Option<usize> {
        let additions = self.scan()?.save().await?;
        let added = self.ingredients.extend(additions);
        tracing::info!(added, "Scan results saved to pantry");
        self.navigate(Screen::Ingredients).await;
        Some(added)
    }

    // Browsers

    pub fn recipes(&self) -> Option<&RecipeBrowser> {
        match &self.screen {
            ScreenState::Recipes(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn recipes_mut(&mut self) -> Option<&mut RecipeBrowser> {
        match &mut self.screen {
            ScreenState::Recipes(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn trending(&self) -> Option<&TrendingBrowser> {
        match &self.screen {
            ScreenState::Trending(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn trending_mut(&mut self) -> Option<&mut TrendingBrowser> {
        match &mut self.screen {
            ScreenState::Trending(browser) => Some(browser),
            _ => None,
        }
    }

    /// Leaves an open recipe for the chat screen.
    pub async fn ask_about_recipe(&mut self) -> bool {
        if self.recipes().and_then(RecipeBrowser::selected).is_none() {
            return false;
        }
        self.navigate(Screen::Chat).await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omycook_core::profile::{CookingLevel, CookingTime, KitchenTool, WizardStep};

    fn app() -> OmycookApp {
        OmycookApp::with_canned_capabilities(AppConfig::default()).0
    }

    #[tokio::test]
    async fn test_starts_home_with_starter_pantry() {
        let app = app();
        assert_eq!(app.current_screen(), Screen::Home);
        assert!(!app.session().is_logged_in);
        assert_eq!(app.ingredients().len(), 5);
    }

    #[tokio::test]
    async fn test_login_flow_reaches_profile_setup() {
        let mut app = app();
        app.navigate(Screen::Login).await;
        assert!(app.submit_login().await.is_none());

        let form = app.login_form_mut().unwrap();
        form.set_email("cook@example.com");
        form.set_password("pw");
        assert_eq!(app.submit_login().await.as_deref(), Some("cook@example.com"));

        assert!(app.session().is_logged_in);
        assert_eq!(app.current_screen(), Screen::ProfileSetup);
        assert!(app.wizard().is_some());
    }

    #[tokio::test]
    async fn test_wizard_completion_stores_profile() {
        let mut app = app();
        app.navigate(Screen::ProfileSetup).await;

        app.wizard_mut().unwrap().select_cooking_level(CookingLevel::Beginner);
        for _ in 0..3 {
            assert!(matches!(app.wizard_next().await, Some(NextTransition::Advanced(_))));
        }
        app.wizard_mut().unwrap().select_cooking_time(CookingTime::UpTo10);
        assert_eq!(
            app.wizard_next().await,
            Some(NextTransition::Advanced(WizardStep::KitchenTools))
        );
        app.wizard_mut().unwrap().toggle_kitchen_tool(KitchenTool::Microwave);

        assert!(matches!(app.wizard_next().await, Some(NextTransition::Completed(_))));
        assert_eq!(app.current_screen(), Screen::Home);
        let profile = app.session().user_profile.as_ref().unwrap();
        assert_eq!(profile.cooking_level, CookingLevel::Beginner);
        assert!(app.wizard_next().await.is_none());
    }

    #[tokio::test]
    async fn test_wizard_back_from_first_step_goes_home() {
        let mut app = app();
        app.navigate(Screen::ProfileSetup).await;
        assert_eq!(app.wizard_back().await, Some(BackTransition::Exited));
        assert_eq!(app.current_screen(), Screen::Home);
        assert!(app.session().user_profile.is_none());
    }

    #[tokio::test]
    async fn test_leaving_a_screen_resets_its_state() {
        let mut app = app();
        app.navigate(Screen::Ingredients).await;
        app.ingredient_view_mut().unwrap().search = "양".into();
        app.navigate(Screen::Ingredients).await;
        assert_eq!(app.ingredient_view().unwrap().search, "양");

        app.navigate(Screen::Home).await;
        app.navigate(Screen::Ingredients).await;
        assert_eq!(app.ingredient_view().unwrap().search, "");
    }

    #[tokio::test]
    async fn test_remove_by_visible_position() {
        let mut app = app();
        app.navigate(Screen::Ingredients).await;
        app.ingredient_view_mut().unwrap().filter = CategoryFilter::Only(Category::Vegetable);

        let removed = app.remove_visible_ingredient(1).unwrap();
        assert_eq!(removed.name, "당근");
        assert_eq!(app.ingredients().len(), 4);
        assert!(app.remove_visible_ingredient(5).is_none());
    }

    #[tokio::test]
    async fn test_add_ingredient_ignores_blank_name() {
        let mut app = app();
        assert!(app.add_ingredient("  ", Category::Meat, None).is_none());
        let added = app.add_ingredient("닭가슴살", Category::Meat, Some("200g".into())).unwrap();
        assert_eq!(added.quantity.as_deref(), Some("200g"));
        assert_eq!(app.ingredients().len(), 6);
    }

    #[tokio::test]
    async fn test_open_feature_and_ask_about_recipe() {
        let mut app = app();
        assert_eq!(app.open_feature(2).await, Some(Screen::Recipes));
        assert!(!app.ask_about_recipe().await);

        app.recipes_mut().unwrap().select("3");
        assert!(app.ask_about_recipe().await);
        assert_eq!(app.current_screen(), Screen::Chat);
        assert!(app.open_feature(6).await.is_none());
    }

    #[tokio::test]
    async fn test_screen_specific_calls_off_screen() {
        let app = app();
        assert!(app.chat().is_none());
        assert!(app.send_chat("hi").await.is_none());
        assert!(app.scan().is_none());
        assert!(app.trending().is_none());
    }
}
