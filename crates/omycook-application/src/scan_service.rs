//! Receipt scan scheduling.

use std::sync::Arc;

use omycook_core::ingredient::NewIngredient;
use omycook_core::receipt::{ReceiptRecognizer, ReceiptScanner, ScannedIngredient, UploadedImage};
use omycook_execution::DeferredExecutor;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::AppEvent;

/// Owns the scanner of one receipt-scan screen and runs recognition jobs.
pub struct ScanService {
    scanner: Arc<Mutex<ReceiptScanner>>,
    recognizer: Arc<dyn ReceiptRecognizer>,
    executor: Arc<DeferredExecutor>,
    events: UnboundedSender<AppEvent>,
}

impl ScanService {
    pub fn new(
        recognizer: Arc<dyn ReceiptRecognizer>,
        executor: Arc<DeferredExecutor>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            scanner: Arc::new(Mutex::new(ReceiptScanner::new())),
            recognizer,
            executor,
            events,
        }
    }

    pub async fn with_scanner<R>(&self, f: impl FnOnce(&ReceiptScanner) -> R) -> R {
        let scanner = self.scanner.lock().await;
        f(&scanner)
    }

    /// Starts scanning `image` and schedules its recognition.
    ///
    /// Returns `false` if a scan or review is already in progress.
    pub async fn upload(&self, image: UploadedImage) -> bool {
        let mut scanner = self.scanner.lock().await;
        let Some(ticket) = scanner.upload(image.clone()) else {
            return false;
        };
        drop(scanner);

        let scanner = Arc::clone(&self.scanner);
        let recognizer = Arc::clone(&self.recognizer);
        let events = self.events.clone();

        self.executor.spawn("receipt-scan", async move {
            let result = recognizer.recognize(&image).await;
            let mut scanner = scanner.lock().await;
            match result {
                Ok(items) => {
                    let item_count = items.len();
                    if scanner.complete(ticket, items) {
                        tracing::info!(item_count, "Receipt scan completed");
                        let _ = events.send(AppEvent::ScanCompleted { item_count });
                    }
                }
                Err(e) => {
                    tracing::warn!(ticket, "Receipt scan failed: {}", e);
                    if scanner.fail(ticket) {
                        let _ = events.send(AppEvent::ScanFailed(e.to_string()));
                    }
                }
            }
        });
        true
    }

    pub async fn toggle_confirm(&self, index: usize) -> Option<bool> {
        self.scanner.lock().await.toggle_confirm(index)
    }

    pub async fn remove(&self, index: usize) -> Option<ScannedIngredient> {
        self.scanner.lock().await.remove(index)
    }

    /// Takes the confirmed items; `None` when nothing is confirmed.
    pub async fn save(&self) -> Option<Vec<NewIngredient>> {
        self.scanner.lock().await.save()
    }

    /// Returns to idle. A recognition still running is discarded when it ends.
    pub async fn reset(&self) {
        self.scanner.lock().await.reset();
    }
}
