//! Client modules for external storage access

pub mod s3_client;

pub use s3_client::{ObjectStore, S3ObjectStore};
