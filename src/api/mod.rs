//! Genius API integration
//!
//! Follows a strict boundary split:
//! - **DTOs** (`dto.rs`) - exact provider response shapes
//! - **Client** (`client.rs`) - HTTP transport with retry plus typed
//!   endpoint methods
//! - **Adapter** (`adapter.rs`) - the only place DTOs become domain types
//!
//! API docs: https://docs.genius.com

pub mod dto;
pub(crate) mod adapter;
mod client;

pub use client::{ApiClient, SortOrder};
