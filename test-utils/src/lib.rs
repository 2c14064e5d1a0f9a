//! Rankbot Test Utils
//!
//! Shared testing utilities for the rank sync bot. The crate offers a builder for test contexts
//! backed by in-memory SQLite databases, factories for the configuration store entities, and
//! factories for the serenity objects the rank sync engine consumes.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn finds_bindings() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_rank_sync_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let guild = factory::create_guild(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
