use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Loads the signing configuration from the environment.
    ///
    /// SECURITY: the compiled-in `JWT_SECRET` fallback exists so a dev
    /// checkout runs without setup. Any real deployment must set
    /// `JWT_SECRET`; tokens signed with the fallback are forgeable by
    /// anyone who has read this source.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "prephub-secret-key-change-in-production".to_string()),
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
