//! [`Query`] definition.

pub mod recipes;
pub mod users;

use common::operations::{Select, Whole};
use tracerr::Traced;

use crate::{
    infra::{source, Source},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Source`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct SourceQuery<T>(T);

impl<W> SourceQuery<Whole<W>> {
    /// Creates a new [`SourceQuery`] selecting a whole `W` collection.
    #[must_use]
    pub fn all() -> Self {
        Self(Whole::new())
    }
}

impl<Src, W> Query<SourceQuery<Whole<W>>> for Service<Src>
where
    Src: Source<Select<Whole<W>>, Ok = W, Err = Traced<source::Error>>,
{
    type Ok = W;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        SourceQuery(whole): SourceQuery<Whole<W>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.source()
            .execute(Select(whole))
            .await
            .map_err(tracerr::wrap!())
    }
}
