//! # Quill CLI
//!
//! Administrative helpers behind the `quill-cli` binary: account creation and
//! fake data for local development.
//!
//! ```ignore
//! use quill_cli::seeder::{seed_all, SeedConfig};
//!
//! seed_all(&pool, SeedConfig::new(10, 5)).await?;
//! ```

pub mod seeder;
pub mod users;
