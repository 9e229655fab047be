pub mod auth;
pub mod courses;
pub mod favorites;
pub mod users;
