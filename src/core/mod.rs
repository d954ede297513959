//! Configuration and wire models shared by every step

pub mod config;
pub mod models;
