//! # PREP HUB API
//!
//! A course-catalog marketplace REST API built with Rust, Axum, and
//! SQLite: registration and JWT login, a filterable/sortable course
//! catalog, per-user favorites, and a small admin surface for course
//! and user management.
//!
//! ## Architecture
//!
//! The codebase follows a modular, NestJS-inspired layout:
//!
//! ```text
//! src/
//! ├── cli/              # CLI commands (create-admin)
//! ├── config/           # Configuration (JWT, database, CORS)
//! ├── middleware/       # Auth extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration, login, profile
//! │   ├── users/       # Admin user management
//! │   ├── courses/     # Catalog queries and admin CRUD
//! │   └── favorites/   # User ↔ course bookmarks
//! └── utils/           # Errors, JWT, password hashing, pagination
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs`
//! (HTTP handlers), `service.rs` (business logic), `model.rs` (entities
//! and DTOs), `router.rs` (route wiring).
//!
//! ## Authentication
//!
//! Stateless JWT bearer tokens (7-day lifetime) carrying the user id,
//! email, and role. Three access policies exist:
//!
//! - required auth: 401 without a token, 403 when it fails verification
//! - optional auth: list/detail endpoints personalize output when a
//!   valid token is present and fall back to anonymous otherwise
//! - admin-only: required auth plus an `admin` role check
//!
//! ## Roles
//!
//! | Role  | Description                                       |
//! |-------|---------------------------------------------------|
//! | user  | Default for registered accounts; can favorite     |
//! | admin | Course CRUD, role management, user deletion       |
//!
//! Admins are created by the bootstrap seed or the `create-admin` CLI
//! command, never through registration.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://data/prephub.db
//! JWT_SECRET=your-secure-secret-key
//! cargo run
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.
//!
//! ## Security Considerations
//!
//! - Passwords are hashed with bcrypt
//! - Login failures are indistinguishable for unknown email vs wrong
//!   password
//! - `JWT_SECRET` has a compiled-in development fallback; deployments
//!   must override it or tokens are forgeable

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
