//! [`Catalog`] definitions.

use itertools::Itertools as _;

use crate::domain::{recipe, Recipe};

/// Distinct [`recipe::Cuisine`]s of a [`Recipe`] collection, sorted in
/// ascending order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog(Vec<recipe::Cuisine>);

impl Catalog {
    /// Derives a new [`Catalog`] out of the provided `recipes`.
    #[must_use]
    pub fn new(recipes: &[Recipe]) -> Self {
        Self(
            recipes
                .iter()
                .map(|r| &r.cuisine)
                .unique()
                .sorted()
                .cloned()
                .collect(),
        )
    }

    /// Returns [`recipe::Cuisine`]s of this [`Catalog`].
    #[must_use]
    pub fn as_slice(&self) -> &[recipe::Cuisine] {
        &self.0
    }
}
