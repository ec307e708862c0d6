//! Login page.

use std::time::Duration;

use askama::Template;
use axum::{
    response::{Html, IntoResponse as _, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::cookie::CookieJar;
use derive_more::Debug;
use secrecy::SecretBox;
use serde::Deserialize;
use service::command::{self, Command as _};
use tracing as log;

use crate::{define_error, render, session, AsError, Error, Service};

/// Message shown once the credentials are accepted.
const SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";

/// Delay between a successful login and the redirect to the recipes.
#[derive(Clone, Copy, Debug)]
pub struct RedirectDelay(pub Duration);

/// Login page.
#[derive(Clone, Debug, Default, Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    /// Username to prefill the form with.
    pub username: String,

    /// Error of the previous attempt.
    pub error: Option<String>,

    /// Success message of the previous attempt.
    pub success: Option<String>,

    /// Whole seconds to wait before redirecting to the recipes.
    pub redirect_after: Option<u64>,
}

/// Credentials submitted via the [`LoginPage`] form.
#[derive(Clone, Debug, Deserialize)]
pub struct Credentials {
    /// Entered username.
    #[serde(default)]
    pub username: String,

    /// Entered password.
    #[debug(skip)]
    #[serde(default)]
    pub password: String,
}

/// Renders an empty [`LoginPage`].
///
/// # Errors
///
/// If the page fails to render.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn form() -> Result<Html<String>, Error> {
    render::html(&LoginPage::default())
}

/// Checks the submitted [`Credentials`], persisting the [`Session`] marker on
/// success.
///
/// [`Session`]: service::domain::Session
///
/// # Errors
///
/// If the page fails to render.
#[tracing::instrument(skip_all, fields(username = %creds.username))]
pub async fn submit(
    Extension(service): Extension<Service>,
    Extension(RedirectDelay(delay)): Extension<RedirectDelay>,
    jar: CookieJar,
    Form(creds): Form<Credentials>,
) -> Result<Response, Error> {
    let Credentials { username, password } = creds;

    let res = service
        .execute(command::CreateUserSession {
            username: username.clone(),
            password: SecretBox::init_with(move || password.into()),
        })
        .await
        .map_err(AsError::into_error);

    match res {
        Ok(out) => {
            log::info!("`{}` logged in", out.user.username);
            let page = render::html(&LoginPage {
                username,
                success: Some(SUCCESS_MESSAGE.to_owned()),
                redirect_after: Some(redirect_secs(delay)),
                ..LoginPage::default()
            })?;
            Ok((session::persist(jar, &out.session), page).into_response())
        }
        Err(e) => {
            if e.status_code.is_server_error() {
                log::error!("{e}");
            } else {
                log::debug!("{e}");
            }
            let page = render::html(&LoginPage {
                username,
                error: Some(e.message),
                ..LoginPage::default()
            })?;
            Ok((e.status_code, page).into_response())
        }
    }
}

/// Returns the provided `delay` in whole seconds, rounded up.
fn redirect_secs(delay: Duration) -> u64 {
    delay
        .as_secs()
        .saturating_add(u64::from(delay.subsec_nanos() > 0))
}

/// Forgets the [`Session`] marker and redirects to the [`LoginPage`].
///
/// [`Session`]: service::domain::Session
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (session::forget(jar), Redirect::to(session::LOGIN_PATH))
}

impl AsError for command::create_user_session::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPTY_CREDENTIALS"]
                #[status = BAD_REQUEST]
                #[message = "Username and password cannot be empty."]
                EmptyCredentials,

                #[code = "WRONG_CREDENTIALS"]
                #[status = UNAUTHORIZED]
                #[message = "Invalid username or password."]
                WrongCredentials,

                #[code = "SOURCE_UNAVAILABLE"]
                #[status = BAD_GATEWAY]
                #[message = "Failed to fetch user data."]
                SourceUnavailable,
            }
        }

        Some(
            match self {
                Self::Source(_) => Error::SourceUnavailable,
                Self::EmptyCredentials => Error::EmptyCredentials,
                Self::WrongCredentials => Error::WrongCredentials,
            }
            .into(),
        )
    }
}

#[cfg(test)]
mod spec {
    use askama::Template as _;
    use service::{
        command::create_user_session::ExecutionError, infra::source,
    };

    use crate::AsError as _;

    use std::time::Duration;

    use super::{redirect_secs, LoginPage};

    #[test]
    fn maps_login_failures() {
        let empty = ExecutionError::EmptyCredentials.as_error();
        assert_eq!(empty.code, "EMPTY_CREDENTIALS");
        assert_eq!(empty.status_code, http::StatusCode::BAD_REQUEST);

        let wrong = ExecutionError::WrongCredentials.as_error();
        assert_eq!(wrong.code, "WRONG_CREDENTIALS");
        assert_eq!(wrong.message, "Invalid username or password.");

        let source = ExecutionError::Source(source::Error::Status(500));
        let source = source.as_error();
        assert_eq!(source.status_code, http::StatusCode::BAD_GATEWAY);
        assert_eq!(source.message, "Failed to fetch user data.");
    }

    #[test]
    fn rounds_redirect_delay_up() {
        assert_eq!(redirect_secs(Duration::ZERO), 0);
        assert_eq!(redirect_secs(Duration::from_millis(500)), 1);
        assert_eq!(redirect_secs(Duration::from_secs(1)), 1);
        assert_eq!(redirect_secs(Duration::from_millis(1500)), 2);
    }

    #[test]
    fn keeps_entered_username_on_error() {
        let html = LoginPage {
            username: "bob".to_owned(),
            error: Some("Invalid username or password.".to_owned()),
            ..LoginPage::default()
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"value="bob""#));
        assert!(html.contains("Invalid username or password."));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn redirects_after_success() {
        let html = LoginPage {
            success: Some(super::SUCCESS_MESSAGE.to_owned()),
            redirect_after: Some(1),
            ..LoginPage::default()
        }
        .render()
        .unwrap();

        assert!(html
            .contains(r#"<meta http-equiv="refresh" content="1;url=/">"#));
        assert!(html.contains("Login successful! Redirecting..."));
    }
}
