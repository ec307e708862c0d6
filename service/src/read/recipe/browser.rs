//! [`Browser`] definitions.

use common::pagination::{Page, Selector};
use derive_more::Display;

use crate::domain::{recipe, Recipe};

use super::{filter, Catalog, Filter, SearchTerm};

/// Browsing state over a fetched [`Recipe`] collection.
///
/// Owns the whole collection, the [`Catalog`] derived from it once, the
/// current [`Filter`] with its pagination window, and the filtered subset
/// recomputed on every [`Filter`] change.
#[derive(Clone, Debug)]
pub struct Browser {
    /// Whole [`Recipe`] collection, in source order.
    recipes: Vec<Recipe>,

    /// [`Catalog`] of the whole collection.
    catalog: Catalog,

    /// Current [`Filter`] and pagination window.
    selector: Selector<Filter>,

    /// Indices of [`Recipe`]s satisfying the current [`Filter`].
    filtered: Vec<usize>,
}

impl Browser {
    /// Creates a new [`Browser`] over the provided `recipes`, revealing
    /// `page_size` of them at a time.
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, page_size: usize) -> Self {
        let catalog = Catalog::new(&recipes);
        let filtered = (0..recipes.len()).collect();
        Self {
            recipes,
            catalog,
            selector: Selector::new(page_size, Filter::default()),
            filtered,
        }
    }

    /// Returns [`Catalog`] of the whole [`Recipe`] collection.
    #[must_use]
    pub fn cuisines(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current display count.
    ///
    /// May exceed the number of filtered [`Recipe`]s.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.selector.window.shown()
    }

    /// Replaces the current [`Filter`], recomputing the filtered subset and
    /// resetting the display count.
    pub fn apply(&mut self, filter: Filter) {
        self.filtered = self
            .recipes
            .iter()
            .enumerate()
            .filter_map(|(i, r)| filter.matches(r).then_some(i))
            .collect();
        self.selector.refilter(filter);
    }

    /// Replaces the current [`SearchTerm`], keeping the cuisine selection.
    pub fn set_search(&mut self, input: impl AsRef<str>) {
        self.apply(Filter {
            search: SearchTerm::new(input),
            cuisine: self.selector.filter.cuisine.clone(),
        });
    }

    /// Replaces the current cuisine selection, keeping the [`SearchTerm`].
    ///
    /// An empty `selection` means all cuisines.
    pub fn set_cuisine(&mut self, selection: impl Into<String>) {
        self.apply(Filter {
            search: self.selector.filter.search.clone(),
            cuisine: filter::cuisine(selection),
        });
    }

    /// Reveals one more page of filtered [`Recipe`]s.
    pub fn show_more(&mut self) {
        self.selector.window.advance();
    }

    /// Returns all the [`Recipe`]s satisfying the current [`Filter`].
    pub fn filtered(
        &self,
    ) -> impl ExactSizeIterator<Item = &Recipe> + Clone + '_ {
        self.filtered.iter().map(|&i| &self.recipes[i])
    }

    /// Returns the currently revealed [`Page`] of filtered [`Recipe`]s.
    #[must_use]
    pub fn page(&self) -> Page<&Recipe> {
        Page::new(&self.selector.window, self.filtered())
    }

    /// Returns the [`Summary`] of what is currently revealed.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let found = self.filtered.len();
        let shown = self.shown().min(found);
        if found == self.recipes.len() {
            Summary::All {
                shown,
                total: found,
            }
        } else {
            Summary::Found { found, shown }
        }
    }

    /// Looks up a [`Recipe`] in the whole collection by its [`recipe::Id`].
    #[must_use]
    pub fn recipe(&self, id: recipe::Id) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

/// Summary of the [`Recipe`]s revealed by a [`Browser`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Summary {
    /// Nothing is filtered out.
    #[display("Showing {shown} of {total} recipes")]
    All {
        /// Number of revealed [`Recipe`]s.
        shown: usize,

        /// Number of all [`Recipe`]s.
        total: usize,
    },

    /// Some [`Recipe`]s are filtered out.
    #[display("Found {found} recipes, showing {shown}")]
    Found {
        /// Number of [`Recipe`]s satisfying the [`Filter`].
        found: usize,

        /// Number of revealed [`Recipe`]s.
        shown: usize,
    },
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{recipe, Recipe},
        test::recipe,
    };

    use super::{Browser, Summary};

    fn recipes(count: u64) -> Vec<Recipe> {
        (1..=count)
            .map(|id| {
                let cuisine = if id % 2 == 0 { "Italian" } else { "Mexican" };
                recipe(id, &format!("Dish #{id}"), cuisine, &["salt"], &[])
            })
            .collect()
    }

    #[test]
    fn reveals_pages_of_nine() {
        let mut browser = Browser::new(recipes(25), 9);

        let page = browser.page();
        assert_eq!(page.len(), 9);
        assert!(page.has_more);

        browser.show_more();
        let page = browser.page();
        assert_eq!(page.len(), 18);
        assert!(page.has_more);

        browser.show_more();
        let page = browser.page();
        assert_eq!(browser.shown(), 27);
        assert_eq!(page.len(), 25);
        assert!(!page.has_more);
    }

    #[test]
    fn filter_change_resets_display_count() {
        let mut browser = Browser::new(recipes(25), 9);
        browser.show_more();
        browser.show_more();

        browser.set_search("dish");
        assert_eq!(browser.shown(), 9);

        browser.show_more();
        browser.set_cuisine("Italian");
        assert_eq!(browser.shown(), 9);

        browser.show_more();
        browser.set_cuisine("");
        assert_eq!(browser.shown(), 9);
    }

    #[test]
    fn keeps_other_predicate_on_change() {
        let mut browser = Browser::new(recipes(25), 9);

        browser.set_cuisine("Italian");
        browser.set_search("#1");

        let ids = browser
            .filtered()
            .map(|r| u64::from(r.id))
            .collect::<Vec<_>>();
        assert_eq!(ids, [10, 12, 14, 16, 18]);
    }

    #[test]
    fn page_preserves_source_order() {
        let mut browser = Browser::new(recipes(25), 9);
        browser.set_cuisine("Mexican");

        let ids = browser
            .page()
            .nodes
            .iter()
            .map(|r| u64::from(r.id))
            .collect::<Vec<_>>();
        assert_eq!(ids, [1, 3, 5, 7, 9, 11, 13, 15, 17]);
    }

    #[test]
    fn empty_result_hides_show_more() {
        let mut browser = Browser::new(recipes(25), 9);
        browser.set_search("nothing like this");

        let page = browser.page();
        assert!(page.is_empty());
        assert!(!page.has_more);
        assert_eq!(
            browser.summary(),
            Summary::Found { found: 0, shown: 0 },
        );
    }

    #[test]
    fn summarizes_revealed_recipes() {
        let mut browser = Browser::new(recipes(25), 9);
        assert_eq!(
            browser.summary().to_string(),
            "Showing 9 of 25 recipes",
        );

        browser.set_cuisine("Italian");
        assert_eq!(
            browser.summary().to_string(),
            "Found 12 recipes, showing 9",
        );

        browser.show_more();
        assert_eq!(
            browser.summary().to_string(),
            "Found 12 recipes, showing 12",
        );
    }

    #[test]
    fn derives_catalog_once() {
        let mut browser = Browser::new(recipes(4), 9);
        browser.set_cuisine("Italian");

        let cuisines = browser
            .cuisines()
            .as_slice()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(cuisines, ["Italian", "Mexican"]);
    }

    #[test]
    fn looks_up_recipe_by_id() {
        let mut browser = Browser::new(recipes(25), 9);
        browser.set_cuisine("Italian");

        let found = browser.recipe(recipe::Id::from(3)).unwrap();
        assert_eq!(found.name.as_ref(), "Dish #3");

        assert!(browser.recipe(recipe::Id::from(404)).is_none());
    }
}
