//! Abstract operations.

use std::marker::PhantomData;

/// Operation to select a value.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Selector of a whole `W` collection.
#[derive(Clone, Copy, Debug)]
pub struct Whole<W>(PhantomData<W>);

impl<W> Whole<W> {
    /// Creates a new [`Whole`] selector.
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<W> Default for Whole<W> {
    fn default() -> Self {
        Self::new()
    }
}
