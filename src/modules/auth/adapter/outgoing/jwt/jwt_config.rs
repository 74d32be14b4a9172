use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: &str) -> i64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load session signing configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("SESSION_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let session_expiry = Self::parse_expiry("SESSION_EXPIRY", "28800");
        if session_expiry <= 0 || session_expiry > 7 * 86400 {
            panic!("SESSION_EXPIRY must be between 1 and 604800 seconds (7 days)");
        }

        let issuer = env::var("SESSION_ISSUER").unwrap_or_else(|_| "dental-clinic".to_string());

        Self {
            secret_key,
            issuer,
            session_expiry,
        }
    }
}
