//! [DummyJSON] [`Source`] implementation.
//!
//! [DummyJSON]: https://dummyjson.com

use std::time::Duration;

use common::operations::{Select, Whole};
use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Deserialize};
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;
use url::Url;

use crate::{
    domain::{Recipe, User},
    infra::{source, Source},
};

/// [`DummyJson`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL the endpoints are resolved against.
    #[default("https://dummyjson.com".to_owned())]
    pub base_url: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(10))]
    pub timeout: Duration,
}

/// [DummyJSON] HTTP client.
///
/// [DummyJSON]: https://dummyjson.com
#[derive(Clone, Debug)]
pub struct DummyJson {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL the endpoints are resolved against.
    base_url: Url,
}

impl DummyJson {
    /// Creates a new [`DummyJson`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the configured base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(conf: &Config) -> Result<Self, Traced<source::Error>> {
        let mut base_url = Url::parse(&conf.base_url)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(|e| tracerr::new!(Error::Client(e)))
            .map_err(tracerr::map_from)?;

        Ok(Self { client, base_url })
    }

    /// Fetches and decodes the JSON document at the provided `endpoint`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, Traced<source::Error>> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))
            .map_err(tracerr::map_from)?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("`{endpoint}` responded with `{status}` status");
            return Err(tracerr::new!(source::Error::Status(status.as_u16())));
        }

        resp.json()
            .await
            .map_err(|e| tracerr::new!(Error::Decode(e)))
            .map_err(tracerr::map_from)
    }
}

impl Source<Select<Whole<Vec<User>>>> for DummyJson {
    type Ok = Vec<User>;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        _: Select<Whole<Vec<User>>>,
    ) -> Result<Self::Ok, Self::Err> {
        /// `GET /users` response body.
        #[derive(Deserialize)]
        struct Body {
            /// Fetched [`User`]s.
            users: Vec<User>,
        }

        self.fetch::<Body>("users")
            .await
            .map(|b| b.users)
            .map_err(tracerr::wrap!())
    }
}

impl Source<Select<Whole<Vec<Recipe>>>> for DummyJson {
    type Ok = Vec<Recipe>;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        _: Select<Whole<Vec<Recipe>>>,
    ) -> Result<Self::Ok, Self::Err> {
        /// `GET /recipes` response body.
        #[derive(Deserialize)]
        struct Body {
            /// Fetched [`Recipe`]s.
            recipes: Vec<Recipe>,
        }

        self.fetch::<Body>("recipes")
            .await
            .map(|b| b.recipes)
            .map_err(tracerr::wrap!())
    }
}

/// [`DummyJson`] error.
#[derive(Debug, Display, derive_more::From, StdError)]
pub enum Error {
    /// Configured base URL is invalid.
    #[display("Invalid URL: {_0}")]
    Url(url::ParseError),

    /// HTTP client cannot be built.
    #[display("Failed to build HTTP client: {_0}")]
    #[from(ignore)]
    Client(reqwest::Error),

    /// HTTP request failed to complete.
    #[display("HTTP request failed: {_0}")]
    #[from(ignore)]
    Request(reqwest::Error),

    /// Response body cannot be decoded.
    #[display("Failed to decode response body: {_0}")]
    #[from(ignore)]
    Decode(reqwest::Error),
}
