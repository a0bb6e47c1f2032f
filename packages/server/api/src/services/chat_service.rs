use crate::error::FaqResult;
use crate::services::completion::Completer;
use crate::services::search::embedding::{ensure_embeddable, Embedder};
use crate::services::search::engine::{FaqMatch, MatchingEngine};
use crate::services::store::FaqStore;
use shared::dto::{ChatResponse, DEFAULT_TONE};
use std::sync::Arc;

/// Score reported on the wire when a business has nothing to compare against.
pub const NO_MATCH_SCORE: f64 = -1.0;

const GROUNDED_PREAMBLE: &str =
    "You are a support assistant. Use this business FAQ to help answer questions:";
const UNGROUNDED_PROMPT: &str = "You are a support assistant. The user asked something, but no relevant FAQ was found. Respond helpfully but briefly.";

/// How a reply is produced. Decided once per chat; every response field that
/// depends on the decision is derived from this value.
#[derive(Debug)]
pub enum ResponseMode {
    /// The closest FAQ cleared the threshold and is injected into the prompt.
    Grounded(FaqMatch),
    /// No FAQ is injected. Carries the closest entry, if any, for reporting.
    Ungrounded(Option<FaqMatch>),
}

impl ResponseMode {
    pub fn decide(best: Option<FaqMatch>, threshold: f64) -> Self {
        match best {
            Some(m) if m.score >= threshold => ResponseMode::Grounded(m),
            other => ResponseMode::Ungrounded(other),
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, ResponseMode::Grounded(_))
    }

    pub fn closest(&self) -> Option<&FaqMatch> {
        match self {
            ResponseMode::Grounded(m) => Some(m),
            ResponseMode::Ungrounded(m) => m.as_ref(),
        }
    }

    pub fn system_prompt(&self, tone: &str) -> String {
        let base = match self {
            ResponseMode::Grounded(m) => format!(
                "{}\n\nQ: {}\nA: {}",
                GROUNDED_PREAMBLE, m.entry.question, m.entry.answer
            ),
            ResponseMode::Ungrounded(_) => UNGROUNDED_PROMPT.to_string(),
        };
        format!("{}\n\nRespond in a {} tone.", base, tone)
    }

    pub fn into_response(self, reply: String) -> ChatResponse {
        let used_faq = self.is_grounded();
        let (matched_faq, score) = match self {
            ResponseMode::Grounded(m) | ResponseMode::Ungrounded(Some(m)) => {
                (Some(m.entry.question), m.score)
            }
            ResponseMode::Ungrounded(None) => (None, NO_MATCH_SCORE),
        };

        ChatResponse {
            reply,
            matched_faq,
            score,
            used_faq,
        }
    }
}

pub struct ChatService {
    store: Arc<dyn FaqStore>,
    embedder: Arc<dyn Embedder>,
    completer: Arc<dyn Completer>,
    matcher: MatchingEngine,
}

impl ChatService {
    pub fn new(
        store: Arc<dyn FaqStore>,
        embedder: Arc<dyn Embedder>,
        completer: Arc<dyn Completer>,
    ) -> Self {
        let matcher = MatchingEngine::new(store.clone());
        Self {
            store,
            embedder,
            completer,
            matcher,
        }
    }

    /// Answers `message` for `business_id`, grounding the reply in the
    /// closest FAQ when its score reaches `threshold`.
    pub async fn handle_chat(
        &self,
        business_id: i64,
        message: &str,
        threshold: f64,
    ) -> FaqResult<ChatResponse> {
        ensure_embeddable(message)?;

        // An unknown business has no FAQs, so it is answered ungrounded.
        let tone = match self.store.find_business(business_id).await? {
            Some(business) => business.tone,
            None => {
                tracing::info!("Business {} is not onboarded", business_id);
                DEFAULT_TONE.to_string()
            }
        };

        let query = self.embedder.embed(message).await?;
        let best = self.matcher.find_best_match(business_id, &query).await?;
        let mode = ResponseMode::decide(best, threshold);

        match mode.closest() {
            Some(m) => tracing::info!(
                "Business {}: closest FAQ {} scored {:.4} (threshold {:.2}, grounded: {})",
                business_id,
                m.entry.id,
                m.score,
                threshold,
                mode.is_grounded()
            ),
            None => tracing::info!(
                "Business {}: no FAQ to compare against, answering ungrounded",
                business_id
            ),
        }

        let system_prompt = mode.system_prompt(&tone);
        let reply = self.completer.complete(&system_prompt, message).await?;

        Ok(mode.into_response(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaqError;
    use crate::services::search::embedding::serialize_embedding;
    use crate::services::testing::{faq, FakeCompleter, FakeEmbedder, InMemoryStore};

    const HOURS_Q: &str = "What are your hours?";
    const HOURS_A: &str = "9-5 Mon-Fri";
    const FAQ_VEC: [f32; 2] = [1.0, 0.0];

    /// Unit vector whose cosine similarity to `FAQ_VEC` is `cos`.
    fn at_similarity(cos: f32) -> Vec<f32> {
        vec![cos, (1.0 - cos * cos).sqrt()]
    }

    struct Fixture {
        store: Arc<InMemoryStore>,
        completer: Arc<FakeCompleter>,
        business_id: i64,
    }

    impl Fixture {
        fn hours_business() -> Self {
            let store = Arc::new(InMemoryStore::default());
            let business_id = store.seed_business("Acme", "friendly");
            store.seed_faq(
                business_id,
                HOURS_Q,
                HOURS_A,
                Some(serialize_embedding(&FAQ_VEC).unwrap()),
            );
            Self {
                store,
                completer: Arc::new(FakeCompleter::replying("We are open 9-5 on weekdays.")),
                business_id,
            }
        }

        fn service(&self, embedder: FakeEmbedder) -> ChatService {
            ChatService::new(self.store.clone(), Arc::new(embedder), self.completer.clone())
        }
    }

    #[tokio::test]
    async fn close_match_grounds_the_reply() {
        let fx = Fixture::hours_business();
        let embedder = FakeEmbedder::default().with("when are you open", &at_similarity(0.95));
        let service = fx.service(embedder);

        let response = service
            .handle_chat(fx.business_id, "when are you open", 0.80)
            .await
            .unwrap();

        assert!(response.used_faq);
        assert_eq!(response.matched_faq.as_deref(), Some(HOURS_Q));
        assert!((response.score - 0.95).abs() < 1e-4);
        assert_eq!(response.reply, "We are open 9-5 on weekdays.");

        let prompts = fx.completer.prompts();
        assert_eq!(prompts.len(), 1);
        let (system, user) = &prompts[0];
        assert!(system.contains("Q: What are your hours?\nA: 9-5 Mon-Fri"));
        assert!(system.contains("friendly tone"));
        assert_eq!(user, "when are you open");
    }

    #[tokio::test]
    async fn distant_match_is_reported_but_not_used() {
        let fx = Fixture::hours_business();
        let embedder = FakeEmbedder::default().with("do you sell gift cards", &at_similarity(0.40));
        let service = fx.service(embedder);

        let response = service
            .handle_chat(fx.business_id, "do you sell gift cards", 0.80)
            .await
            .unwrap();

        assert!(!response.used_faq);
        assert_eq!(response.matched_faq.as_deref(), Some(HOURS_Q));
        assert!((response.score - 0.40).abs() < 1e-4);

        let (system, _) = &fx.completer.prompts()[0];
        assert!(system.starts_with(UNGROUNDED_PROMPT));
        assert!(!system.contains(HOURS_A));
    }

    #[tokio::test]
    async fn score_equal_to_threshold_is_grounded() {
        let fx = Fixture::hours_business();
        let service = fx.service(FakeEmbedder::default().with("hours", &FAQ_VEC));

        let response = service.handle_chat(fx.business_id, "hours", 1.0).await.unwrap();
        assert!(response.used_faq);
        assert_eq!(response.score, 1.0);
    }

    #[tokio::test]
    async fn business_without_faqs_answers_ungrounded() {
        let store = Arc::new(InMemoryStore::default());
        let business_id = store.seed_business("Empty", "formal");
        let completer = Arc::new(FakeCompleter::replying("Happy to help."));
        let service = ChatService::new(
            store,
            Arc::new(FakeEmbedder::default().with("hello", &[0.2, 0.9])),
            completer.clone(),
        );

        let response = service.handle_chat(business_id, "hello", 0.80).await.unwrap();

        assert!(!response.used_faq);
        assert_eq!(response.matched_faq, None);
        assert_eq!(response.score, NO_MATCH_SCORE);
        assert!(completer.prompts()[0].0.contains("formal tone"));
    }

    #[tokio::test]
    async fn unknown_business_answers_ungrounded_in_default_tone() {
        let fx = Fixture::hours_business();
        let embedder = FakeEmbedder::default().with("hi", &FAQ_VEC);
        let service = fx.service(embedder);

        let response = service.handle_chat(999, "hi", 0.8).await.unwrap();

        assert!(!response.used_faq);
        assert_eq!(response.matched_faq, None);
        assert_eq!(response.score, NO_MATCH_SCORE);
        assert_eq!(response.reply, "We are open 9-5 on weekdays.");

        let (system, user) = &fx.completer.prompts()[0];
        assert!(system.starts_with(UNGROUNDED_PROMPT));
        assert!(system.ends_with("Respond in a friendly tone."));
        assert!(!system.contains(HOURS_A));
        assert_eq!(user, "hi");
    }

    #[tokio::test]
    async fn embedding_failure_aborts_without_completion() {
        let fx = Fixture::hours_business();
        let service = fx.service(FakeEmbedder::default().failing_on("hi"));

        let err = service.handle_chat(fx.business_id, "hi", 0.8).await.unwrap_err();

        assert!(matches!(err, FaqError::EmbeddingService(_)));
        assert!(fx.completer.prompts().is_empty());
    }

    #[tokio::test]
    async fn completion_failure_propagates() {
        let fx = Fixture::hours_business();
        let service = ChatService::new(
            fx.store.clone(),
            Arc::new(FakeEmbedder::default().with("hi", &FAQ_VEC)),
            Arc::new(FakeCompleter::failing()),
        );

        let err = service.handle_chat(fx.business_id, "hi", 0.8).await.unwrap_err();
        assert!(matches!(err, FaqError::CompletionService(_)));
    }

    #[test]
    fn used_faq_follows_the_decided_mode() {
        let close = FaqMatch {
            entry: faq(1, 1, "q", Some(&FAQ_VEC)),
            score: 0.9,
        };
        let far = FaqMatch {
            entry: faq(2, 1, "q2", Some(&FAQ_VEC)),
            score: 0.1,
        };

        let grounded = ResponseMode::decide(Some(close), 0.5).into_response(String::new());
        assert!(grounded.used_faq);

        let ungrounded = ResponseMode::decide(Some(far), 0.5).into_response(String::new());
        assert!(!ungrounded.used_faq);
        assert_eq!(ungrounded.matched_faq.as_deref(), Some("q2"));

        let empty = ResponseMode::decide(None, -1.0).into_response(String::new());
        assert!(!empty.used_faq);
        assert_eq!(empty.score, NO_MATCH_SCORE);
    }
}
