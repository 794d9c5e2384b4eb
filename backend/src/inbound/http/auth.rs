//! Bearer-token authorisation for HTTP handlers.
//!
//! Handlers declare the access level they need by taking an [`AdminAccess`]
//! or [`UserAccess`] extractor. Admin routes accept only the admin token;
//! user routes accept either token. A token that is not configured never
//! matches.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::warn;

use crate::domain::Error;

use super::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";

/// Tokens accepted by the HTTP adapter.
#[derive(Clone, Default)]
pub struct AccessTokens {
    admin: Option<String>,
    user: Option<String>,
}

impl std::fmt::Debug for AccessTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokens")
            .field("admin", &self.admin.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AccessTokens {
    /// Build the token set; blank tokens are treated as unset.
    ///
    /// # Examples
    /// ```
    /// use reviewer_service::inbound::http::auth::AccessTokens;
    ///
    /// let tokens = AccessTokens::new(Some("admin-secret".into()), Some(" ".into()));
    /// assert!(tokens.admits_admin(Some("admin-secret")));
    /// assert!(!tokens.admits_user(Some(" ")));
    /// ```
    pub fn new(admin: Option<String>, user: Option<String>) -> Self {
        Self {
            admin: admin.filter(|token| !token.trim().is_empty()),
            user: user.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn admits_admin(&self, presented: Option<&str>) -> bool {
        matches(self.admin.as_deref(), presented)
    }

    pub fn admits_user(&self, presented: Option<&str>) -> bool {
        self.admits_admin(presented) || matches(self.user.as_deref(), presented)
    }
}

fn matches(expected: Option<&str>, presented: Option<&str>) -> bool {
    match (expected, presented) {
        (Some(expected), Some(presented)) => expected == presented,
        _ => false,
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

fn authorise(
    req: &HttpRequest,
    check: fn(&AccessTokens, Option<&str>) -> bool,
    message: &'static str,
) -> Result<(), Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    if check(&state.tokens, bearer_token(req)) {
        Ok(())
    } else {
        warn!(path = %req.path(), "rejected request with invalid token");
        Err(Error::unauthorized(message))
    }
}

/// Proof that the request carried the admin token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl FromRequest for AdminAccess {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorise(req, AccessTokens::admits_admin, "admin token required").map(|()| Self))
    }
}

/// Proof that the request carried the admin or the user token.
#[derive(Debug, Clone, Copy)]
pub struct UserAccess;

impl FromRequest for UserAccess {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorise(req, AccessTokens::admits_user, "token required").map(|()| Self))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::{App, HttpResponse};
    use rstest::rstest;

    use super::*;
    use crate::inbound::http::test_utils::{ADMIN_TOKEN, USER_TOKEN, memory_state};

    #[rstest]
    #[case(Some("a"), Some("a"), true)]
    #[case(Some("a"), Some("b"), false)]
    #[case(Some("a"), None, false)]
    #[case(None, Some(""), false)]
    #[case(None, None, false)]
    fn token_matching(
        #[case] expected: Option<&str>,
        #[case] presented: Option<&str>,
        #[case] admitted: bool,
    ) {
        assert_eq!(matches(expected, presented), admitted);
    }

    #[test]
    fn blank_tokens_are_unset() {
        let tokens = AccessTokens::new(Some(String::new()), Some("  ".into()));
        assert!(!tokens.admits_admin(Some("")));
        assert!(!tokens.admits_user(Some("  ")));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let tokens = AccessTokens::new(Some("secret".into()), None);
        assert!(!format!("{tokens:?}").contains("secret"));
    }

    #[rstest]
    #[case("/admin", Some(ADMIN_TOKEN), StatusCode::OK)]
    #[case("/admin", Some(USER_TOKEN), StatusCode::UNAUTHORIZED)]
    #[case("/admin", None, StatusCode::UNAUTHORIZED)]
    #[case("/user", Some(ADMIN_TOKEN), StatusCode::OK)]
    #[case("/user", Some(USER_TOKEN), StatusCode::OK)]
    #[case("/user", Some("wrong"), StatusCode::UNAUTHORIZED)]
    #[actix_web::test]
    async fn extractors_enforce_roles(
        #[case] path: &str,
        #[case] token: Option<&str>,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state()))
                .route(
                    "/admin",
                    web::get().to(|_: AdminAccess| async { HttpResponse::Ok().finish() }),
                )
                .route(
                    "/user",
                    web::get().to(|_: UserAccess| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await;

        let mut request = actix_test::TestRequest::get().uri(path);
        if let Some(token) = token {
            request = request.insert_header((AUTHORIZATION, format!("Bearer {token}")));
        }
        let response = actix_test::call_service(&app, request.to_request()).await;

        assert_eq!(response.status(), expected);
    }
}
