use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub const DEFAULT_COOKIE_NAME: &str = "clinic_session";

/// How the session token travels: an `HttpOnly`, `SameSite=Strict` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookieConfig {
    pub name: String,
    pub secure: bool,
    pub max_age_secs: i64,
}

impl SessionCookieConfig {
    pub fn from_env(max_age_secs: i64) -> Self {
        let name = std::env::var("SESSION_COOKIE_NAME")
            .ok()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

        let production = std::env::var("RUST_ENV").as_deref() == Ok("production");
        let secure = std::env::var("SESSION_COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(production);

        Self {
            name,
            secure,
            max_age_secs,
        }
    }

    pub fn build(&self, token: &str) -> Cookie<'static> {
        Cookie::build(self.name.clone(), token.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    /// An expired, empty cookie that makes the browser drop the session.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build(self.name.clone(), String::new())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::ZERO)
            .finish()
    }
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
            max_age_secs: 28_800,
        }
    }
}
