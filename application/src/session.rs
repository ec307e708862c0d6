//! [`CurrentSession`]-related definitions.

use axum::{
    async_trait,
    extract::FromRequestParts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use service::domain::Session;

/// Path unauthenticated requests are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// [`Session`] of the [`User`] performing the current HTTP request.
///
/// Rejects the request with a redirect to the [`LOGIN_PATH`] when there is
/// no [`Session`] marker.
///
/// [`User`]: service::domain::User
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

impl CurrentSession {
    /// Looks up the [`Session`] marker in the provided [`CookieJar`].
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Option<Self> {
        jar.get(Session::KEY)
            .and_then(|c| Session::restore(c.value()))
            .map(Self)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        Self::from_jar(&CookieJar::from_headers(&parts.headers))
            .ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}

/// Persists the provided [`Session`] marker in the [`CookieJar`].
#[must_use]
pub fn persist(jar: CookieJar, session: &Session) -> CookieJar {
    jar.add(
        Cookie::build((Session::KEY, session.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Removes the [`Session`] marker from the [`CookieJar`].
#[must_use]
pub fn forget(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(Session::KEY).path("/"))
}

#[cfg(test)]
mod spec {
    use axum_extra::extract::cookie::{Cookie, CookieJar};
    use service::domain::Session;

    use super::{forget, persist, CurrentSession};

    #[test]
    fn restores_persisted_marker() {
        let session = Session::restore("Emily").unwrap();
        let jar = persist(CookieJar::new(), &session);

        let cookie = jar.get("user").unwrap();
        assert_eq!(cookie.value(), "Emily");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));

        let current = CurrentSession::from_jar(&jar).unwrap();
        assert_eq!(current.0, session);
    }

    #[test]
    fn blank_marker_is_no_session() {
        let jar = CookieJar::new().add(Cookie::new("user", ""));

        assert!(CurrentSession::from_jar(&jar).is_none());
        assert!(CurrentSession::from_jar(&CookieJar::new()).is_none());
    }

    #[test]
    fn forgets_marker() {
        let session = Session::restore("Emily").unwrap();
        let jar = forget(persist(CookieJar::new(), &session));

        assert!(CurrentSession::from_jar(&jar).is_none());
    }
}
