//! Nearby Core - Shared types library.
//!
//! This crate provides the types shared by all Nearby components:
//! - `classifier` - Hybrid (AI + rule-based) classification engine
//! - `cli` - Command-line front end for the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP clients. This keeps
//! it lightweight and lets any front end depend on it directly.
//!
//! # Modules
//!
//! - [`types`] - Categories, search filters, tag results and listing input

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
