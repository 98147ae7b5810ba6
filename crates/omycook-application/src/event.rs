use omycook_core::chat::ChatMessage;

/// Notifications produced by deferred jobs.
///
/// Jobs whose screen was torn down produce nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ChatReplied(ChatMessage),
    ChatReplyFailed(String),
    ScanCompleted { item_count: usize },
    ScanFailed(String),
}
