//! Abstractions for "show more" pagination.
//!
//! Items are revealed through a growing [`Window`]: it starts at one `step`
//! and grows by another `step` on each [`Window::advance()`]. The window is
//! never capped explicitly, a [`Page`] simply truncates to the number of
//! items available.

/// Growing pagination window.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Window {
    /// Number of items this [`Window`] grows by.
    step: usize,

    /// Number of items currently revealed by this [`Window`].
    shown: usize,
}

impl Window {
    /// Creates a new [`Window`] revealing the first `step` items.
    ///
    /// Zero `step` is coerced to `1`, so the [`Window`] always makes
    /// progress.
    #[must_use]
    pub const fn new(step: usize) -> Self {
        let step = if step == 0 { 1 } else { step };
        Self { step, shown: step }
    }

    /// Returns number of items this [`Window`] grows by.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns number of items currently revealed by this [`Window`].
    ///
    /// May exceed the number of items actually available.
    #[must_use]
    pub const fn shown(&self) -> usize {
        self.shown
    }

    /// Grows this [`Window`] by one step.
    pub fn advance(&mut self) {
        self.shown = self.shown.saturating_add(self.step);
    }

    /// Shrinks this [`Window`] back to its initial size.
    pub fn reset(&mut self) {
        self.shown = self.step;
    }

    /// Indicates whether `total` items don't fit into this [`Window`].
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        total > self.shown
    }
}

/// Items visible through a [`Window`].
#[derive(Clone, Debug)]
pub struct Page<I> {
    /// Nodes in this [`Page`].
    pub nodes: Vec<I>,

    /// Total number of items the [`Page`] was cut from.
    pub total: usize,

    /// Indicator whether there are more items beyond this [`Page`].
    pub has_more: bool,
}

impl<I> Page<I> {
    /// Cuts a new [`Page`] out of the provided `items` with the given
    /// [`Window`].
    #[must_use]
    pub fn new<It>(window: &Window, items: It) -> Self
    where
        It: IntoIterator<Item = I, IntoIter: ExactSizeIterator>,
    {
        let items = items.into_iter();
        let total = items.len();
        Self {
            nodes: items.take(window.shown()).collect(),
            total,
            has_more: window.has_more(total),
        }
    }

    /// Returns number of nodes in this [`Page`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Indicates whether this [`Page`] has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Pagination selector.
#[derive(Clone, Debug)]
pub struct Selector<F> {
    /// Pagination [`Window`].
    pub window: Window,

    /// Filter being applied to the items before pagination.
    pub filter: F,
}

impl<F> Selector<F> {
    /// Creates a new [`Selector`] with the provided `filter` and a fresh
    /// [`Window`] of the given `step`.
    #[must_use]
    pub fn new(step: usize, filter: F) -> Self {
        Self {
            window: Window::new(step),
            filter,
        }
    }

    /// Replaces the filter of this [`Selector`], resetting its [`Window`].
    pub fn refilter(&mut self, filter: F) {
        self.filter = filter;
        self.window.reset();
    }
}
