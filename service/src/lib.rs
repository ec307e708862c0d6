//! Service contains the business logic of the recipe browser.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod task;

use std::time::Duration;

use smart_default::SmartDefault;

#[cfg(doc)]
use infra::Source;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Artificial delay before checking [`User`] credentials.
    ///
    /// [`User`]: domain::User
    #[default(Duration::from_secs(1))]
    pub authentication_delay: Duration,

    /// Window in which consecutive search term changes are collapsed into
    /// a single one.
    #[default(Duration::from_millis(300))]
    pub search_debounce: Duration,

    /// Number of [`Recipe`]s revealed initially and on each "show more".
    ///
    /// [`Recipe`]: domain::Recipe
    #[default(9)]
    pub page_size: usize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Src> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Source`] of this [`Service`].
    source: Src,
}

impl<Src> Service<Src> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, source: Src) -> Self {
        Self { config, source }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Source`] of this [`Service`].
    #[must_use]
    pub fn source(&self) -> &Src {
        &self.source
    }
}
