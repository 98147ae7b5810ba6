use std::time::Duration;

use async_trait::async_trait;
use omycook_core::Result;
use omycook_core::chat::{ChatMessage, ResponseGenerator};
use rand::seq::SliceRandom;

/// Reply pool of the canned chat assistant.
pub const CANNED_REPLIES: [&str; 5] = [
    "좋은 질문이에요! 중불은 가스레인지 다이얼 기준 5-6단계 정도입니다. 손을 프라이팬 위 10cm 정도 위치에 두었을 때 뜨겁지만 참을 수 있는 정도면 적당해요.",
    "네, 가능합니다! 대파 대신 양파나 쪽파를 사용하셔도 됩니다. 양파를 사용할 경우 조금 더 단맛이 나지만 충분히 맛있게 만들 수 있어요.",
    "고기가 익었는지 확인하는 방법은 색깔 변화를 보는 것입니다. 돼지고기는 분홍색이 완전히 사라지고 회백색이 되면 익은 것이고, 닭고기는 투명했던 육즙이 맑아지면 익은 거예요.",
    "2인분으로 늘리시려면 모든 재료를 2배로 늘려주세요. 다만 소금, 간장 같은 간 재료는 1.5배 정도만 넣고 맛을 보면서 조절하시는 게 좋습니다.",
    "데치기는 끓는 물에 재료를 짧게 넣었다 빼는 것이고, 삶기는 재료가 완전히 익을 때까지 끓이는 거예요. 데치기는 보통 30초~2분 정도만 하고, 삶기는 재료에 따라 10분 이상 걸릴 수 있어요.",
];

/// Answers every prompt with a random entry of [`CANNED_REPLIES`] after `delay`.
///
/// The prompt and history are ignored.
#[derive(Debug, Clone)]
pub struct CannedResponseGenerator {
    delay: Duration,
}

impl CannedResponseGenerator {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CannedResponseGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl ResponseGenerator for CannedResponseGenerator {
    async fn generate_reply(&self, prompt: &str, history: &[ChatMessage]) -> Result<String> {
        tracing::debug!(
            prompt_len = prompt.chars().count(),
            history = history.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Generating canned reply"
        );
        tokio::time::sleep(self.delay).await;

        let reply = CANNED_REPLIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(CANNED_REPLIES[0]);
        Ok(reply.to_string())
    }
}
