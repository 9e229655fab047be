//! Configuration modules, each loaded from environment variables with
//! workable development defaults:
//!
//! - [`cors`]: allowed origins for the static front-end
//! - [`database`]: SQLite pool, migrations, and admin bootstrap
//! - [`jwt`]: token signing secret and lifetime

pub mod cors;
pub mod database;
pub mod jwt;
