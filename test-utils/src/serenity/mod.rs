//! Test factories for creating Serenity API objects.
//!
//! These factories build valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_role, create_test_role_with_permissions};
//!
//! let officer = create_test_role(111111111, "Officer", 0xFF0000, 5);
//! let bot = create_test_role_with_permissions(222222222, "Bot", 0, 10, 1 << 28);
//! ```

pub mod role;

pub use role::{create_test_role, create_test_role_with_permissions};
