//! Dish analysis pipeline.
//!
//! This module provides the per-candidate processing components:
//! - **Normalizer**: Lowercases and strips punctuation from raw candidates
//! - **Words**: Splits normalized dishes on single spaces
//! - **Validator**: Decides whether a normalized string looks like a dish

pub mod normalizer;
pub mod validator;
pub mod words;

pub use normalizer::DishNormalizer;
pub use validator::DishValidator;
pub use words::Words;
