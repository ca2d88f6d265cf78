//! Data models shared by the scanner and its callers.

pub mod config;
pub mod period;
