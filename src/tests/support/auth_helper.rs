use actix_web::cookie::Cookie;
use actix_web::test::TestRequest;

use crate::auth::adapter::incoming::web::session_cookie::DEFAULT_COOKIE_NAME;
use crate::auth::adapter::incoming::web::extractors::CSRF_HEADER;

/// Anti-forgery token carried by every stub session.
pub const TEST_CSRF: &str = "test-csrf-token";

/// Resolves to a deactivated account.
pub const TEST_INACTIVE_TOKEN: &str = "inactive";

pub fn with_session(req: TestRequest, token: &str) -> TestRequest {
    req.cookie(Cookie::new(DEFAULT_COOKIE_NAME, token.to_string()))
}

pub fn with_session_and_csrf(req: TestRequest, token: &str) -> TestRequest {
    with_session(req, token).insert_header((CSRF_HEADER, TEST_CSRF))
}
