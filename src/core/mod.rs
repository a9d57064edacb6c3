//! Configuration and request/response records

pub mod config;
pub mod models;
