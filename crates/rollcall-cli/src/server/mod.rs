//! HTTP API for running checks.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
