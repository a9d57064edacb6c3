//! Text utilities shared by the pipeline

pub mod chunker;
pub mod text_stats;
