//! Browsing state for the recommendation and trending screens.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{Recipe, TrendingRecipe};
use super::preset::{recommended_recipes, trending_recipes};
use crate::error::OmycookError;

/// What a browser currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserView<'a, T> {
    Grid,
    Detail(&'a T),
}

/// Renders a view or like count, `1000` and above as `x.yK`.
pub fn format_count(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}K", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Recommended recipes with an optional selection.
#[derive(Debug, Clone)]
pub struct RecipeBrowser {
    recipes: Vec<Recipe>,
    selected: Option<usize>,
}

impl Default for RecipeBrowser {
    fn default() -> Self {
        Self::new(recommended_recipes())
    }
}

impl RecipeBrowser {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            selected: None,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Opens the detail view of recipe `id`. Unknown ids leave the view as is.
    pub fn select(&mut self, id: &str) -> Option<&Recipe> {
        let index = self.recipes.iter().position(|r| r.id == id)?;
        self.selected = Some(index);
        self.recipes.get(index)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.and_then(|i| self.recipes.get(i))
    }

    pub fn view(&self) -> BrowserView<'_, Recipe> {
        match self.selected() {
            Some(recipe) => BrowserView::Detail(recipe),
            None => BrowserView::Grid,
        }
    }
}

/// Ranking period of the trending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
    Month,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [Self::Day, Self::Week, Self::Month];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "오늘",
            Self::Week => "이번 주",
            Self::Month => "이번 달",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = OmycookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day" | "today" | "오늘" => Ok(Self::Day),
            "week" | "이번 주" | "이번주" => Ok(Self::Week),
            "month" | "이번 달" | "이번달" => Ok(Self::Month),
            other => Err(OmycookError::invalid_input(format!(
                "unknown time window: {}",
                other
            ))),
        }
    }
}

/// The trending board with a selection and a time window.
///
/// The window is remembered for display only; every window shows the same board.
#[derive(Debug, Clone)]
pub struct TrendingBrowser {
    recipes: Vec<TrendingRecipe>,
    selected: Option<usize>,
    window: TimeWindow,
}

impl Default for TrendingBrowser {
    fn default() -> Self {
        Self::new(trending_recipes())
    }
}

impl TrendingBrowser {
    pub fn new(mut recipes: Vec<TrendingRecipe>) -> Self {
        recipes.sort_by_key(|r| r.rank);
        Self {
            recipes,
            selected: None,
            window: TimeWindow::default(),
        }
    }

    pub fn recipes(&self) -> &[TrendingRecipe] {
        &self.recipes
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        tracing::debug!(window = window.label(), "Trending window changed");
        self.window = window;
    }

    /// Ranks 1 to 3.
    pub fn podium(&self) -> &[TrendingRecipe] {
        let end = self.recipes.iter().take_while(|r| r.rank <= 3).count();
        &self.recipes[..end]
    }

    /// Everything below the podium.
    pub fn rest(&self) -> &[TrendingRecipe] {
        &self.recipes[self.podium().len()..]
    }

    pub fn select(&mut self, id: &str) -> Option<&TrendingRecipe> {
        let index = self.recipes.iter().position(|r| r.id == id)?;
        self.selected = Some(index);
        self.recipes.get(index)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&TrendingRecipe> {
        self.selected.and_then(|i| self.recipes.get(i))
    }

    pub fn view(&self) -> BrowserView<'_, TrendingRecipe> {
        match self.selected() {
            Some(recipe) => BrowserView::Detail(recipe),
            None => BrowserView::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(15234), "15.2K");
        assert_eq!(format_count(1000), "1.0K");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_recipe_selection() {
        let mut browser = RecipeBrowser::default();
        assert_eq!(browser.view(), BrowserView::Grid);

        let name = browser.select("2").map(|r| r.name.clone());
        assert_eq!(name.as_deref(), Some("돼지고기 야채볶음"));
        assert!(matches!(browser.view(), BrowserView::Detail(r) if r.id == "2"));

        assert!(browser.select("nope").is_none());
        assert_eq!(browser.selected().map(|r| r.id.as_str()), Some("2"));

        browser.deselect();
        assert_eq!(browser.view(), BrowserView::Grid);
    }

    #[test]
    fn test_window_does_not_change_board() {
        let mut browser = TrendingBrowser::default();
        assert_eq!(browser.window(), TimeWindow::Week);
        let before = browser.recipes().to_vec();

        browser.set_window(TimeWindow::Day);
        assert_eq!(browser.window(), TimeWindow::Day);
        assert_eq!(browser.recipes(), &before[..]);
    }

    #[test]
    fn test_podium_and_rest() {
        let browser = TrendingBrowser::default();
        let podium: Vec<_> = browser.podium().iter().map(|r| r.rank).collect();
        let rest: Vec<_> = browser.rest().iter().map(|r| r.rank).collect();
        assert_eq!(podium, vec![1, 2, 3]);
        assert_eq!(rest, vec![4, 5, 6]);
    }

    #[test]
    fn test_time_window_parse() {
        assert_eq!("오늘".parse::<TimeWindow>().unwrap(), TimeWindow::Day);
        assert_eq!("month".parse::<TimeWindow>().unwrap(), TimeWindow::Month);
        assert!("year".parse::<TimeWindow>().unwrap_err().is_invalid_input());
    }
}
