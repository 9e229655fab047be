//! SQLite pool initialization.
//!
//! The store is a single file-backed SQLite database. The pool is built
//! once at startup, migrations run before the first request, and the
//! bootstrap admin account is guaranteed to exist afterwards. The pool
//! is injected through [`crate::state::AppState`]; nothing holds a
//! global handle.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string
//!   (default: `sqlite://data/prephub.db`)
//! - `ADMIN_EMAIL` / `ADMIN_PASSWORD`: bootstrap admin credentials
//!   (defaults: `admin@prephub.com` / `admin123`)

use std::env;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use tracing::info;

use crate::modules::users::model::UserRole;
use crate::utils::password::hash_password;

/// Opens the database, runs migrations, and seeds the bootstrap admin.
///
/// # Panics
///
/// Panics if the database cannot be opened or migrated; the server is
/// useless without its store, so startup aborts.
pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/prephub.db".to_string());

    if let Some(dir) = database_url
        .strip_prefix("sqlite://")
        .and_then(|path| std::path::Path::new(path).parent())
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        std::fs::create_dir_all(dir).expect("Failed to create database directory");
    }

    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to open database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    bootstrap_admin(&pool)
        .await
        .expect("Failed to seed bootstrap admin");

    pool
}

/// Ensures the bootstrap admin account exists.
///
/// Registration only ever creates `user`-role accounts, so without this
/// (or the `create-admin` CLI command) no one could reach the admin
/// routes on a fresh database.
pub async fn bootstrap_admin(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let admin_email =
        env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@prephub.com".to_string());

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(&admin_email)
            .fetch_one(pool)
            .await?;

    if exists {
        return Ok(());
    }

    let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    let hashed = hash_password(&admin_password)
        .map_err(|e| sqlx::Error::Protocol(e.to_string()))?;

    sqlx::query("INSERT INTO users (name, email, password, role, avatar) VALUES (?, ?, ?, ?, '👑')")
        .bind("Admin")
        .bind(&admin_email)
        .bind(&hashed)
        .bind(UserRole::Admin)
        .execute(pool)
        .await?;

    info!(email = %admin_email, "Bootstrap admin created");
    Ok(())
}
