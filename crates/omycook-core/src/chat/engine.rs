//! Chat state machine.

use super::message::{ChatMessage, ChatRole};

/// Opening assistant message of every chat.
pub const GREETING: &str = "안녕하세요! 요리 관련 질문이 있으시면 언제든 물어보세요. 재료 손질법, 조리 온도, 대체 재료 등 무엇이든 도와드리겠습니다.";

/// Prompts offered while the conversation holds only the greeting.
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "중불이 어느 정도인가요?",
    "대파 대신 다른 걸 써도 되나요?",
    "고기가 익었는지 어떻게 알아요?",
    "2인분으로 늘리려면?",
    "데치기와 삶기의 차이는?",
];

/// A reply the engine is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Matches the answer to the request; stale answers are dropped.
    pub ticket: u64,
    /// The user message that asked for it.
    pub prompt: String,
}

/// Result of [`ChatEngine::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The user message was appended; a reply is now pending.
    Sent(PendingReply),
    /// Input was empty or whitespace.
    EmptyInput,
    /// A reply is still being typed; the input is left untouched.
    AwaitingReply,
}

/// Append-only conversation with a single in-flight reply.
#[derive(Debug, Clone)]
pub struct ChatEngine {
    messages: Vec<ChatMessage>,
    input: String,
    pending: Option<PendingReply>,
    next_ticket: u64,
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
            pending: None,
            next_ticket: 1,
        }
    }
}

impl ChatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Whether the assistant is "typing", i.e. a reply is pending.
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    /// Suggested prompts, offered only before the first exchange.
    pub fn suggestions(&self) -> Option<&'static [&'static str]> {
        (self.messages.len() == 1).then_some(&SUGGESTED_QUESTIONS[..])
    }

    /// Copies suggestion `index` into the input box.
    pub fn apply_suggestion(&mut self, index: usize) -> Option<&str> {
        let question = self.suggestions()?.get(index)?;
        self.input = (*question).to_string();
        Some(self.input.as_str())
    }

    /// Sends the current input.
    ///
    /// On success the user message is appended, the input cleared and the
    /// typing flag raised until [`ChatEngine::receive_reply`] or
    /// [`ChatEngine::fail_reply`] is called with the returned ticket.
    pub fn send(&mut self) -> SendOutcome {
        if self.input.trim().is_empty() {
            return SendOutcome::EmptyInput;
        }
        if self.pending.is_some() {
            return SendOutcome::AwaitingReply;
        }

        let prompt = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(prompt.clone()));

        let pending = PendingReply {
            ticket: self.next_ticket,
            prompt,
        };
        self.next_ticket += 1;
        self.pending = Some(pending.clone());
        SendOutcome::Sent(pending)
    }

    /// Sets the input to `text` and sends it.
    pub fn send_text(&mut self, text: impl Into<String>) -> SendOutcome {
        self.set_input(text);
        self.send()
    }

    /// Appends the assistant reply for `ticket` and clears the typing flag.
    ///
    /// Returns `None` and changes nothing if `ticket` is not the pending one.
    pub fn receive_reply(&mut self, ticket: u64, content: impl Into<String>) -> Option<&ChatMessage> {
        if !self.take_pending(ticket) {
            tracing::debug!(ticket, "Dropping stale chat reply");
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::Assistant, content));
        self.messages.last()
    }

    /// Clears the typing flag after the reply for `ticket` failed.
    pub fn fail_reply(&mut self, ticket: u64) -> bool {
        self.take_pending(ticket)
    }

    /// Forgets the pending reply, if any.
    pub fn cancel_pending(&mut self) -> Option<PendingReply> {
        self.pending.take()
    }

    fn take_pending(&mut self, ticket: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
