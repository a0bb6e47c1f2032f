pub mod chat_service;
pub mod completion;
pub mod onboarding_service;
pub mod openai;
pub mod search;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
