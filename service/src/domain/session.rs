//! [`Session`] definitions.

use derive_more::Display;

#[cfg(doc)]
use crate::domain::User;
use crate::domain::user;

/// Session marker of a logged in [`User`].
///
/// Its mere presence signals an authenticated [`User`]. The only data it
/// carries is the display name.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{name}")]
pub struct Session {
    /// Display name of the [`User`] owning this [`Session`].
    pub name: user::FirstName,
}

impl Session {
    /// Key this [`Session`] is persisted under.
    pub const KEY: &'static str = "user";

    /// Restores a [`Session`] out of its persisted `marker`.
    ///
    /// Blank markers denote no [`Session`].
    #[must_use]
    pub fn restore(marker: &str) -> Option<Self> {
        user::FirstName::new(marker).map(|name| Self { name })
    }
}

impl From<&user::User> for Session {
    fn from(user: &user::User) -> Self {
        Self {
            name: user.first_name.clone(),
        }
    }
}
