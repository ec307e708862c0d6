//! [`Command`] for creating a [`Session`].

use common::operations::{Select, Whole};
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret as _, SecretBox};
use tokio::time;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{user, Session, User},
    infra::{source, Source},
    query::users,
    Service,
};

use super::Command;

/// [`Command`] for creating a [`Session`] by [`User`] credentials.
///
/// Both credentials are trimmed before being checked. The [`User`]s are
/// looked up only after the configured authentication delay passes.
#[derive(Clone, Debug)]
pub struct CreateUserSession {
    /// Username of a [`User`], matched ignoring the letter case.
    pub username: String,

    /// [`user::Password`] of a [`User`], matched exactly.
    pub password: SecretBox<user::Password>,
}

/// Output of [`CreateUserSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Created [`Session`].
    pub session: Session,

    /// [`User`] whose [`Session`] has been created.
    pub user: User,
}

impl<Src> Command<CreateUserSession> for Service<Src>
where
    Src: Source<
        Select<Whole<Vec<User>>>,
        Ok = Vec<User>,
        Err = Traced<source::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let username = cmd.username.trim();
        let password = cmd.password.expose_secret().trimmed();
        if username.is_empty() || password.is_empty() {
            return Err(tracerr::new!(E::EmptyCredentials));
        }

        time::sleep(self.config().authentication_delay).await;

        let users = self
            .execute(users::All::all())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let user = users
            .into_iter()
            .find(|u| {
                u.username.matches(username) && u.password.matches(password)
            })
            .ok_or_else(|| tracerr::new!(E::WrongCredentials))?;
        log::debug!("`User(id: {})` logged in as `{}`", user.id, user.username);

        Ok(Output {
            session: Session::from(&user),
            user,
        })
    }
}

/// Error of [`CreateUserSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Source`] error.
    #[display("`Source` operation failed: {_0}")]
    Source(source::Error),

    /// Username or password is empty.
    #[display("Empty `User` credentials")]
    #[from(ignore)]
    EmptyCredentials,

    /// No [`User`] matches the provided credentials.
    #[display("Wrong `User` credentials")]
    #[from(ignore)]
    WrongCredentials,
}

#[cfg(test)]
mod spec {
    use std::{sync::atomic::Ordering, time::Duration};

    use secrecy::SecretBox;
    use tokio::time::Instant;

    use crate::{
        test::{user, Memory},
        Command as _, Config, Service,
    };

    use super::{CreateUserSession, ExecutionError};

    fn service() -> Service<Memory> {
        Service::new(
            Config::default(),
            Memory {
                users: vec![
                    user("emilys", "emilyspass", "Emily"),
                    user("bob", "Secret", "Bob"),
                ],
                ..Memory::default()
            },
        )
    }

    fn login(username: &str, password: &str) -> CreateUserSession {
        let password = password.to_owned();
        CreateUserSession {
            username: username.to_owned(),
            password: SecretBox::init_with(move || password.into()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn matches_username_ignoring_case() {
        let out = service().execute(login("Bob", "Secret")).await.unwrap();

        assert_eq!(out.session.to_string(), "Bob");
        assert_eq!(out.user.username.as_ref(), "bob");
    }

    #[tokio::test(start_paused = true)]
    async fn matches_password_exactly() {
        let err = service()
            .execute(login("bob", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::WrongCredentials));
    }

    #[tokio::test(start_paused = true)]
    async fn trims_credentials() {
        let out = service()
            .execute(login("  emilys ", " emilyspass\t"))
            .await
            .unwrap();

        assert_eq!(out.session.to_string(), "Emily");
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_empty_fields_before_lookup() {
        let service = service();
        let started = Instant::now();

        for (username, password) in [("bob", ""), ("", "Secret"), (" ", " ")] {
            let err = service
                .execute(login(username, password))
                .await
                .unwrap_err();
            assert!(matches!(err.as_ref(), ExecutionError::EmptyCredentials));
        }

        assert_eq!(service.source().fetches.load(Ordering::SeqCst), 0);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn looks_up_after_authentication_delay() {
        let service = service();
        let started = Instant::now();

        _ = service.execute(login("bob", "Secret")).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
        assert_eq!(service.source().fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reports_unavailable_source() {
        let service = Service::new(
            Config::default(),
            Memory {
                unavailable: true,
                ..Memory::default()
            },
        );

        let err = service
            .execute(login("bob", "Secret"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Source(_)));
    }
}
