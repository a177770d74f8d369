//! Zorglog Core - Shared types library.
//!
//! This crate provides common types used across all Zorglog components:
//! - `web` - The care-facility front-end (navigation, lists, admin panel)
//! - `integration-tests` - End-to-end tests against the running front-end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, credentials, and shifts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
