//! Infrastructure concerns

pub mod config;
