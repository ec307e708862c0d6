//! [`User`] definitions.

use derive_more::{AsRef, Debug, Display, From, Into};
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::Deserialize;

/// User allowed to browse recipes.
///
/// [`User`]s are only ever read from the [`Source`] and never persisted as a
/// whole: a successful login keeps only their [`FirstName`].
///
/// [`Source`]: crate::infra::Source
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Username`] of this [`User`].
    pub username: Username,

    /// [`Password`] of this [`User`].
    #[debug(skip)]
    pub password: Password,

    /// [`FirstName`] of this [`User`].
    pub first_name: FirstName,
}

/// ID of a [`User`].
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Into, PartialEq,
)]
pub struct Id(u64);

/// Username of a [`User`].
///
/// Matched case-insensitively.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq)]
#[as_ref(str)]
pub struct Username(String);

impl Username {
    /// Checks whether the provided `input` denotes this [`Username`],
    /// ignoring the letter case.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.0.to_lowercase() == input.to_lowercase()
    }
}

/// Password of a [`User`].
///
/// Matched exactly.
#[derive(Clone, Debug, Deserialize, Eq, From, PartialEq)]
#[debug("***")]
#[from(&str, String)]
pub struct Password(String);

impl Password {
    /// Returns this [`Password`] with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    /// Checks whether the provided `input` is exactly this [`Password`].
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// First name of a [`User`], used as their display name.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq)]
#[as_ref(str)]
pub struct FirstName(String);

impl FirstName {
    /// Creates a new [`FirstName`] if the given `name` is not blank.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.trim().is_empty()).then_some(Self(name))
    }
}
