//! Core types for Zorglog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod email;
pub mod id;
pub mod shift;

pub use credential::Credential;
pub use email::{Email, EmailError};
pub use id::*;
pub use shift::Shift;
