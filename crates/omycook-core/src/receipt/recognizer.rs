//! Recognition capability for the receipt scanner.

use async_trait::async_trait;

use super::model::{ScannedIngredient, UploadedImage};
use crate::error::Result;

/// Turns a receipt image into candidate pantry items.
#[async_trait]
pub trait ReceiptRecognizer: Send + Sync {
    async fn recognize(&self, image: &UploadedImage) -> Result<Vec<ScannedIngredient>>;
}
