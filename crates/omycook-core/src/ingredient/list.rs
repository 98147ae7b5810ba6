//! In-memory pantry.

use uuid::Uuid;

use super::model::{Category, CategoryFilter, Ingredient, NewIngredient};

/// Ordered collection of pantry items with unique ids.
#[derive(Debug, Clone, Default)]
pub struct IngredientList {
    items: Vec<Ingredient>,
}

impl IngredientList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding the five starter items a fresh pantry shows.
    pub fn with_starter_items() -> Self {
        let mut list = Self::new();
        for (name, category, quantity) in [
            ("양파", Category::Vegetable, "2개"),
            ("돼지고기", Category::Meat, "300g"),
            ("계란", Category::Dairy, "10개"),
            ("김치", Category::Pickled, "500g"),
            ("당근", Category::Vegetable, "3개"),
        ] {
            list.add(name, category, Some(quantity.to_string()));
        }
        list
    }

    /// Appends a new item with a fresh id.
    ///
    /// Returns `None` without touching the list when `name` is empty.
    /// An empty quantity string is stored as `None`.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: Category,
        quantity: Option<String>,
    ) -> Option<&Ingredient> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }

        let ingredient = Ingredient {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            quantity: quantity.filter(|q| !q.is_empty()),
        };
        tracing::debug!(id = %ingredient.id, name = %ingredient.name, "Ingredient added");
        self.items.push(ingredient);
        self.items.last()
    }

    /// Adds every item of a batch, returning how many were added.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = NewIngredient>) -> usize {
        batch
            .into_iter()
            .filter_map(|item| self.add(item.name, item.category, item.quantity).map(|_| ()))
            .count()
    }

    /// Removes the item with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Items whose name contains `search_term` (case-insensitively) and whose
    /// category passes `category`.
    pub fn filter(&self, search_term: &str, category: CategoryFilter) -> Vec<&Ingredient> {
        let needle = search_term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .filter(|item| category.matches(item.category))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
