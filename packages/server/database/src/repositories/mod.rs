pub mod business_repo;
pub mod faq_repo;

pub use business_repo::BusinessRepository;
pub use faq_repo::FaqRepository;
