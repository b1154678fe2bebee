// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod progress;
pub mod random;
pub mod speech;

pub use crate::core::evaluator::{evaluate, threshold_for};
pub use crate::core::normalizer::normalize;
pub use crate::core::session::{SessionUpdate, TrainerSession};
pub use crate::core::types::{DifficultyMode, Rationale, Verdict, Word};
pub use crate::fuzzy::edit_distance;
