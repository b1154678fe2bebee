pub mod evaluator;
pub mod normalizer;
pub mod recognition;
pub mod session;
pub mod types;
pub mod word_bank;
