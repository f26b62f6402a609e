//! # Quill Core
//!
//! Core types, errors, and utilities for the Quill API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page/limit query parameters and response metadata
//!
//! # Example
//!
//! ```ignore
//! use quill_core::{AppError, PaginationParams};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Post not found"));
//!
//! let params = PaginationParams::default();
//! let offset = params.offset();
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use pagination::{PaginationMeta, PaginationParams};
