//! Tradepost Core - Shared types library.
//!
//! This crate provides the common types used across all Tradepost
//! components:
//! - `web` - Public posting-and-browsing site
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no store access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The listing model, type-safe IDs, and prices
//! - [`html`] - Escaping for untrusted text embedded in markup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod html;
pub mod types;

pub use types::*;
