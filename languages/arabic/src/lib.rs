//! Arabic language support
//!
//! - Text normalization for comparison
//! - Edit-distance similarity scoring for pronunciation practice

pub mod normalizer;
pub mod processor;
pub mod similarity;

pub use normalizer::normalize;
pub use processor::ArabicProcessor;
pub use similarity::{arabic_similarity, levenshtein, similarity};
