//! Receipt scan state machine: `Idle -> Scanning -> Reviewing`.

use super::model::{ScannedIngredient, UploadedImage};
use crate::ingredient::NewIngredient;

/// Scanner state, owning the uploaded image and any results.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning {
        image: UploadedImage,
        ticket: u64,
    },
    Reviewing {
        image: UploadedImage,
        items: Vec<ScannedIngredient>,
    },
}

/// Data-free view of [`ScanState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Reviewing,
}

#[derive(Debug, Clone)]
pub struct ReceiptScanner {
    state: ScanState,
    next_ticket: u64,
}

impl Default for ReceiptScanner {
    fn default() -> Self {
        Self {
            state: ScanState::Idle,
            next_ticket: 1,
        }
    }
}

impl ReceiptScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn phase(&self) -> ScanPhase {
        match self.state {
            ScanState::Idle => ScanPhase::Idle,
            ScanState::Scanning { .. } => ScanPhase::Scanning,
            ScanState::Reviewing { .. } => ScanPhase::Reviewing,
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        match &self.state {
            ScanState::Idle => None,
            ScanState::Scanning { image, .. } | ScanState::Reviewing { image, .. } => Some(image),
        }
    }

    /// Results under review; empty unless reviewing.
    pub fn items(&self) -> &[ScannedIngredient] {
        match &self.state {
            ScanState::Reviewing { items, .. } => items,
            _ => &[],
        }
    }

    /// Starts scanning `image`. Only accepted while idle.
    ///
    /// Returns the ticket the recognition result must be delivered with.
    pub fn upload(&mut self, image: UploadedImage) -> Option<u64> {
        if self.state != ScanState::Idle {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        tracing::debug!(ticket, file = %image.file_name, "Receipt scan started");
        self.state = ScanState::Scanning { image, ticket };
        Some(ticket)
    }

    /// Moves to review with the recognised `items`.
    ///
    /// Ignored unless scanning with the same `ticket`.
    pub fn complete(&mut self, ticket: u64, items: Vec<ScannedIngredient>) -> bool {
        match std::mem::take(&mut self.state) {
            ScanState::Scanning { image, ticket: current } if current == ticket => {
                self.state = ScanState::Reviewing { image, items };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Drops back to idle after recognition for `ticket` failed.
    pub fn fail(&mut self, ticket: u64) -> bool {
        let matches = matches!(
            &self.state,
            ScanState::Scanning { ticket: current, .. } if *current == ticket
        );
        if matches {
            self.state = ScanState::Idle;
        }
        matches
    }

    /// Flips the confirmed flag of item `index`, returning the new value.
    pub fn toggle_confirm(&mut self, index: usize) -> Option<bool> {
        let ScanState::Reviewing { items, .. } = &mut self.state else {
            return None;
        };
        let item = items.get_mut(index)?;
        item.confirmed = !item.confirmed;
        Some(item.confirmed)
    }

    /// Deletes item `index` from the results.
    pub fn remove(&mut self, index: usize) -> Option<ScannedIngredient> {
        let ScanState::Reviewing { items, .. } = &mut self.state else {
            return None;
        };
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn confirmed_count(&self) -> usize {
        self.items().iter().filter(|item| item.confirmed).count()
    }

    /// Saving needs at least one confirmed item.
    pub fn can_save(&self) -> bool {
        self.confirmed_count() > 0
    }

    /// Takes the confirmed items for the pantry and returns to idle.
    ///
    /// Returns `None` and keeps the review open when nothing is confirmed.
    pub fn save(&mut self) -> Option<Vec<NewIngredient>> {
        if !self.can_save() {
            return None;
        }
        let additions: Vec<NewIngredient> = self
            .items()
            .iter()
            .filter(|item| item.confirmed)
            .map(ScannedIngredient::to_new_ingredient)
            .collect();
        self.state = ScanState::Idle;
        Some(additions)
    }

    /// Discards the image and all results.
    pub fn reset(&mut self) {
        self.state = ScanState::Idle;
    }
}
