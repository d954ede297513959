//! Small helpers shared across modules

pub mod s3_uri;

pub use s3_uri::{TranscriptLocation, summary_key};
