//! Summarization step: fetch transcript, invoke model, store summary

pub mod deliver;
pub mod handler;
pub mod summarize;

// Re-export the main handler for convenience
pub use handler::{SummaryWorker, handler};
