//! In-memory stand-ins for the storage and remote-model seams.

use crate::error::{FaqError, FaqResult};
use crate::services::completion::Completer;
use crate::services::search::embedding::{serialize_embedding, Embedder};
use crate::services::store::FaqStore;
use async_trait::async_trait;
use chrono::Utc;
use database::models::{Business, FaqEntry, NewBusiness, NewFaqEntry};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn faq(id: i64, business_id: i64, question: &str, embedding: Option<&[f32]>) -> FaqEntry {
    FaqEntry {
        id,
        question: question.to_string(),
        answer: format!("answer to {}", question),
        embedding: embedding.map(|v| serialize_embedding(v).unwrap()),
        business_id,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
struct StoreData {
    businesses: Vec<Business>,
    faqs: Vec<FaqEntry>,
    next_id: i64,
}

impl StoreData {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    data: Mutex<StoreData>,
    fail_writes: bool,
    unhealthy: bool,
}

impl InMemoryStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    pub fn seed_business(&self, name: &str, tone: &str) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.businesses.push(Business {
            id,
            name: name.to_string(),
            email: format!("{}@example.test", name.to_lowercase()),
            tone: tone.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn seed_faq(
        &self,
        business_id: i64,
        question: &str,
        answer: &str,
        embedding: Option<String>,
    ) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.faqs.push(FaqEntry {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            embedding,
            business_id,
            created_at: Utc::now(),
        });
        id
    }

    pub fn business_count(&self) -> usize {
        self.data.lock().unwrap().businesses.len()
    }

    pub fn faqs_of(&self, business_id: i64) -> Vec<FaqEntry> {
        self.data
            .lock()
            .unwrap()
            .faqs
            .iter()
            .filter(|f| f.business_id == business_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl FaqStore for InMemoryStore {
    async fn find_business(&self, id: i64) -> FaqResult<Option<Business>> {
        let data = self.data.lock().unwrap();
        Ok(data.businesses.iter().find(|b| b.id == id).cloned())
    }

    async fn list_faqs(&self, business_id: i64) -> FaqResult<Vec<FaqEntry>> {
        Ok(self.faqs_of(business_id))
    }

    async fn onboard(&self, business: NewBusiness, faqs: Vec<NewFaqEntry>) -> FaqResult<Business> {
        if self.fail_writes {
            return Err(FaqError::Storage("connection reset".to_string()));
        }

        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        let row = Business {
            id,
            name: business.name,
            email: business.email,
            tone: business.tone,
            created_at: Utc::now(),
        };
        data.businesses.push(row.clone());

        for faq in faqs {
            let faq_id = data.next_id();
            data.faqs.push(FaqEntry {
                id: faq_id,
                question: faq.question,
                answer: faq.answer,
                embedding: faq.embedding,
                business_id: id,
                created_at: Utc::now(),
            });
        }
        Ok(row)
    }

    async fn health_check(&self) -> FaqResult<()> {
        if self.unhealthy {
            return Err(FaqError::Storage("database unreachable".to_string()));
        }
        Ok(())
    }
}

/// Returns canned vectors per exact input text and records every call.
#[derive(Default)]
pub struct FakeEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeEmbedder {
    pub fn with(mut self, text: &str, vector: &[f32]) -> Self {
        self.vectors.insert(text.to_string(), vector.to_vec());
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.push(text.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Embedder for FakeEmbedder {
    async fn embed(&self, text: &str) -> FaqResult<Vec<f32>> {
        self.calls.lock().unwrap().push(text.to_string());

        if self.failing.iter().any(|t| t == text) {
            return Err(FaqError::EmbeddingService("quota exceeded".to_string()));
        }
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| FaqError::EmbeddingService(format!("no vector for '{}'", text)))
    }
}

/// Replies with a fixed text and records the prompts it was given.
pub struct FakeCompleter {
    reply: Option<String>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl FakeCompleter {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// `(system_prompt, user_message)` of every call so far.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completer for FakeCompleter {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> FaqResult<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));

        self.reply
            .clone()
            .ok_or_else(|| FaqError::CompletionService("model overloaded".to_string()))
    }
}
