pub mod embedding;
pub mod engine;
pub mod similarity;
