//! BetelBot HTTP service — library crate.
//!
//! Re-exports all modules so the binary (`main.rs`) and `bb-e2e-tests`
//! can build the router and state directly.

pub mod advice;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
