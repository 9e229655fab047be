//! Shared utilities:
//!
//! - [`errors`]: application error types and the HTTP status mapping
//! - [`jwt`]: token creation and verification
//! - [`pagination`]: offset-based pagination parameters
//! - [`password`]: bcrypt hashing and verification

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
