use crate::services::completion::Completer;
use crate::services::search::embedding::Embedder;
use crate::services::store::FaqStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FaqStore>,
    pub embedder: Arc<dyn Embedder>,
    pub completer: Arc<dyn Completer>,
}
