//! Bvexport - Bilibili cache export tool
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod processor;
pub mod scanner;
