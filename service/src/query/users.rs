//! [`Query`] collection related to multiple [`User`]s.

use common::operations::Whole;

use crate::domain::User;
#[cfg(doc)]
use crate::Query;

use super::SourceQuery;

/// Queries all the [`User`]s known to the [`Source`].
///
/// [`Source`]: crate::infra::Source
pub type All = SourceQuery<Whole<Vec<User>>>;
