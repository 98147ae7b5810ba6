//! Chat scheduling.
//!
//! [`ChatService`] owns the engine of one chat screen. A successful send spawns
//! a job that asks the [`ResponseGenerator`] and feeds the answer back into the
//! engine under the ticket it was sent with.

use std::sync::Arc;

use omycook_core::chat::{ChatEngine, ResponseGenerator, SendOutcome};
use omycook_execution::DeferredExecutor;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::AppEvent;

pub struct ChatService {
    engine: Arc<Mutex<ChatEngine>>,
    generator: Arc<dyn ResponseGenerator>,
    executor: Arc<DeferredExecutor>,
    events: UnboundedSender<AppEvent>,
}

impl ChatService {
    pub fn new(
        generator: Arc<dyn ResponseGenerator>,
        executor: Arc<DeferredExecutor>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            engine: Arc::new(Mutex::new(ChatEngine::new())),
            generator,
            executor,
            events,
        }
    }

    /// Runs `f` against the engine while holding its lock.
    pub async fn with_engine<R>(&self, f: impl FnOnce(&ChatEngine) -> R) -> R {
        let engine = self.engine.lock().await;
        f(&engine)
    }

    pub async fn set_input(&self, input: impl Into<String>) {
        self.engine.lock().await.set_input(input);
    }

    /// Fills the input with suggested question `index`.
    pub async fn apply_suggestion(&self, index: usize) -> Option<String> {
        self.engine
            .lock()
            .await
            .apply_suggestion(index)
            .map(str::to_string)
    }

    /// Sends the current input, or `text` if given.
    ///
    /// On [`SendOutcome::Sent`] a reply job is already scheduled when this
    /// returns.
    pub async fn send(&self, text: Option<String>) -> SendOutcome {
        let mut engine = self.engine.lock().await;
        if let Some(text) = text {
            engine.set_input(text);
        }
        let outcome = engine.send();
        let SendOutcome::Sent(pending) = outcome.clone() else {
            return outcome;
        };

        let history = engine.messages().to_vec();
        drop(engine);

        let ticket = pending.ticket;
        let prompt = pending.prompt;
        let engine = Arc::clone(&self.engine);
        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();

        tracing::debug!(ticket, "Scheduling chat reply");
        self.executor.spawn("chat-reply", async move {
            let reply = generator.generate_reply(&prompt, &history).await;
            let mut engine = engine.lock().await;
            match reply {
                Ok(content) => {
                    if let Some(message) = engine.receive_reply(ticket, content) {
                        let _ = events.send(AppEvent::ChatReplied(message.clone()));
                    }
                }
                Err(e) => {
                    tracing::warn!(ticket, "Chat reply failed: {}", e);
                    if engine.fail_reply(ticket) {
                        let _ = events.send(AppEvent::ChatReplyFailed(e.to_string()));
                    }
                }
            }
        });

        outcome
    }

    /// Forgets the pending reply so a late answer is dropped.
    pub async fn shutdown(&self) {
        if let Some(pending) = self.engine.lock().await.cancel_pending() {
            tracing::debug!(ticket = pending.ticket, "Chat closed with a reply pending");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use omycook_core::chat::{ChatMessage, ChatRole};
    use omycook_core::{OmycookError, Result};
    use omycook_interaction::{CANNED_REPLIES, CannedResponseGenerator};
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct FailingGenerator;

    #[async_trait]
    impl ResponseGenerator for FailingGenerator {
        async fn generate_reply(&self, _prompt: &str, _history: &[ChatMessage]) -> Result<String> {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Err(OmycookError::capability("backend offline"))
        }
    }

    fn service(
        generator: Arc<dyn ResponseGenerator>,
    ) -> (ChatService, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = ChatService::new(generator, Arc::new(DeferredExecutor::new()), tx);
        (service, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_then_reply_after_delay() {
        let (service, mut rx) = service(Arc::new(CannedResponseGenerator::default()));

        let outcome = service.send(Some("양파는 어떻게 썰어요?".into())).await;
        assert!(matches!(outcome, SendOutcome::Sent(_)));
        assert_eq!(service.with_engine(|e| e.messages().len()).await, 2);
        assert!(service.with_engine(|e| e.is_typing()).await);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(service.with_engine(|e| e.messages().len()).await, 2);

        let Some(AppEvent::ChatReplied(reply)) = rx.recv().await else {
            panic!("expected a reply event");
        };
        assert_eq!(reply.role, ChatRole::Assistant);
        assert!(CANNED_REPLIES.contains(&reply.content.as_str()));
        assert_eq!(service.with_engine(|e| e.messages().len()).await, 3);
        assert!(!service.with_engine(|e| e.is_typing()).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_reply_clears_typing() {
        let (service, mut rx) = service(Arc::new(FailingGenerator));
        service.send(Some("질문".into())).await;

        let event = rx.recv().await;
        assert!(matches!(event, Some(AppEvent::ChatReplyFailed(_))));
        assert!(!service.with_engine(|e| e.is_typing()).await);
        assert_eq!(service.with_engine(|e| e.messages().len()).await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_drops_late_reply() {
        let (service, mut rx) = service(Arc::new(CannedResponseGenerator::new(
            Duration::from_millis(100),
        )));
        service.send(Some("질문".into())).await;
        service.shutdown().await;

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(service.with_engine(|e| e.messages().len()).await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_send_schedules_nothing() {
        let (service, _rx) = service(Arc::new(CannedResponseGenerator::default()));
        assert_eq!(service.send(Some("  ".into())).await, SendOutcome::EmptyInput);
        assert_eq!(service.executor.pending(), 0);
    }
}
