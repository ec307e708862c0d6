//! [`Query`] collection related to multiple [`Recipe`]s.

use common::operations::{Select, Whole};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Recipe,
    infra::{source, Source},
    read::recipe::Browser,
    Service,
};

use super::{Query, SourceQuery};

/// Queries all the [`Recipe`]s known to the [`Source`].
pub type All = SourceQuery<Whole<Vec<Recipe>>>;

/// Queries a fresh [`Browser`] over all the [`Recipe`]s known to the
/// [`Source`].
///
/// The cuisine catalog is derived right after the fetch and the filter is
/// left at its defaults.
#[derive(Clone, Copy, Debug)]
pub struct Browse;

impl<Src> Query<Browse> for Service<Src>
where
    Src: Source<
        Select<Whole<Vec<Recipe>>>,
        Ok = Vec<Recipe>,
        Err = Traced<source::Error>,
    >,
{
    type Ok = Browser;
    type Err = Traced<source::Error>;

    async fn execute(&self, _: Browse) -> Result<Self::Ok, Self::Err> {
        let recipes = self
            .execute(All::all())
            .await
            .map_err(tracerr::wrap!())?;
        log::debug!("fetched {} recipes", recipes.len());

        Ok(Browser::new(recipes, self.config().page_size))
    }
}
