//! [`Recipe`] read models definitions.
//!
//! Pure transformations over an in-memory [`Recipe`] collection: filtering,
//! "show more" pagination, cuisine catalog derivation and detail lookup.
//!
//! [`Recipe`]: crate::domain::Recipe

pub mod browser;
pub mod catalog;
pub mod filter;

pub use self::{
    browser::{Browser, Summary},
    catalog::Catalog,
    filter::{Filter, SearchTerm},
};
