//! SQLite storage implementation for lexwatch.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `lexwatch-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the onboarding flow's write targets
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates (`core`, `connect`) are database-agnostic and
//! work with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod jurisdictions;
pub mod knowledge;
pub mod onboarding;
pub mod topics;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from lexwatch-core for convenience
pub use lexwatch_core::errors::{DatabaseError, Error, Result};
