use std::time::Duration;

use async_trait::async_trait;
use omycook_core::Result;
use omycook_core::ingredient::Category;
use omycook_core::receipt::{ReceiptRecognizer, ScannedIngredient, UploadedImage};

/// Recognises every receipt as the same seven groceries after `delay`.
#[derive(Debug, Clone)]
pub struct CannedReceiptRecognizer {
    delay: Duration,
}

impl CannedReceiptRecognizer {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The fixed scan result, every item pre-confirmed.
    pub fn canned_items() -> Vec<ScannedIngredient> {
        [
            ("양파", "1개", Category::Vegetable),
            ("당근", "2개", Category::Vegetable),
            ("돼지고기", "300g", Category::Meat),
            ("우유", "1L", Category::Dairy),
            ("계란", "10개", Category::Dairy),
            ("간장", "500ml", Category::Seasoning),
            ("참기름", "100ml", Category::Seasoning),
        ]
        .into_iter()
        .map(|(name, quantity, category)| ScannedIngredient::confirmed(name, quantity, category))
        .collect()
    }
}

impl Default for CannedReceiptRecognizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl ReceiptRecognizer for CannedReceiptRecognizer {
    async fn recognize(&self, image: &UploadedImage) -> Result<Vec<ScannedIngredient>> {
        tracing::debug!(
            file = %image.file_name,
            mime = %image.mime,
            delay_ms = self.delay.as_millis() as u64,
            "Recognising receipt"
        );
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_recognize_returns_seven_confirmed_items() {
        let recognizer = CannedReceiptRecognizer::default();
        let image = UploadedImage::from_bytes("receipt.png", "image/png", b"\x89PNG").unwrap();
        let started = Instant::now();

        let items = recognizer.recognize(&image).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2500));
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|item| item.confirmed));
        assert_eq!(items[2].name, "돼지고기");
        assert_eq!(items[2].category, Category::Meat);
        assert_eq!(items[6].quantity.as_deref(), Some("100ml"));
    }
}
