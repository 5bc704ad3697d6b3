//! Configuration and per-request data types

pub mod config;
pub mod models;
