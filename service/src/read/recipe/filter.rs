//! [`Filter`] definitions.

use crate::domain::{recipe, Recipe};

/// Search term matched as a case-insensitive substring.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Creates a new [`SearchTerm`] out of the provided user `input`.
    ///
    /// Surrounding whitespace is significant.
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Self {
        Self(input.as_ref().to_lowercase())
    }

    /// Indicates whether this [`SearchTerm`] matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether this [`SearchTerm`] occurs in the given `text`,
    /// ignoring the letter case.
    #[must_use]
    pub fn occurs_in(&self, text: impl AsRef<str>) -> bool {
        text.as_ref().to_lowercase().contains(&self.0)
    }

    /// Checks whether the given [`Recipe`] matches this [`SearchTerm`].
    ///
    /// An empty [`SearchTerm`] matches any [`Recipe`]. Otherwise, it must
    /// occur in the name, the cuisine, any ingredient or any tag.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.is_empty()
            || self.occurs_in(&recipe.name)
            || self.occurs_in(&recipe.cuisine)
            || recipe.ingredients.iter().any(|i| self.occurs_in(i))
            || recipe.tags.iter().any(|t| self.occurs_in(t))
    }
}

/// Filter of a [`Recipe`] collection.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// [`SearchTerm`] to match.
    pub search: SearchTerm,

    /// [`recipe::Cuisine`] to match exactly, if any.
    ///
    /// [`None`] means all cuisines.
    pub cuisine: Option<recipe::Cuisine>,
}

impl Filter {
    /// Checks whether the given [`Recipe`] satisfies both the search and
    /// the cuisine predicates of this [`Filter`].
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.search.matches(recipe)
            && self.cuisine.as_ref().map_or(true, |c| *c == recipe.cuisine)
    }
}

/// Parses a cuisine selection, treating an empty one as "all cuisines".
#[must_use]
pub fn cuisine(selection: impl Into<String>) -> Option<recipe::Cuisine> {
    let selection = selection.into();
    (!selection.is_empty()).then(|| selection.into())
}

#[cfg(test)]
mod spec {
    use itertools::Itertools as _;

    use crate::{domain::Recipe, test::recipe};

    use super::{cuisine, Filter, SearchTerm};

    fn recipes() -> Vec<Recipe> {
        vec![
            recipe(1, "Chocolate Cake", "American", &["flour", "sugar"], &[]),
            recipe(2, "Pasta", "Italian", &["penne", "basil"], &["Dinner"]),
            recipe(
                3,
                "Cookies",
                "American",
                &["Chocolate Chips", "butter"],
                &["Dessert"],
            ),
            recipe(4, "Tacos", "Mexican", &["tortilla"], &["Street food"]),
            recipe(5, "Tiramisu", "Italian", &["mascarpone"], &["dessert"]),
        ]
    }

    fn ids(filter: &Filter, recipes: &[Recipe]) -> Vec<u64> {
        recipes
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.id.into())
            .collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let recipes = recipes();

        assert_eq!(ids(&Filter::default(), &recipes), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn searches_name_and_ingredients() {
        let recipes = recipes();
        let filter = Filter {
            search: SearchTerm::new("choco"),
            cuisine: None,
        };

        assert_eq!(ids(&filter, &recipes), [1, 3]);
    }

    #[test]
    fn searches_cuisine_and_tags_ignoring_case() {
        let recipes = recipes();
        let by = |term: &str| Filter {
            search: SearchTerm::new(term),
            cuisine: None,
        };

        assert_eq!(ids(&by("MEXICAN"), &recipes), [4]);
        assert_eq!(ids(&by("Dessert"), &recipes), [3, 5]);
    }

    #[test]
    fn cuisine_matches_exactly() {
        let recipes = recipes();
        let filter = Filter {
            search: SearchTerm::default(),
            cuisine: cuisine("Italian"),
        };
        assert_eq!(ids(&filter, &recipes), [2, 5]);

        let filter = Filter {
            search: SearchTerm::default(),
            cuisine: cuisine("italian"),
        };
        assert_eq!(ids(&filter, &recipes), Vec::<u64>::new());
    }

    #[test]
    fn empty_cuisine_means_all() {
        assert_eq!(cuisine(""), None);
    }

    #[test]
    fn combines_predicates_with_and() {
        let recipes = recipes();
        let filter = Filter {
            search: SearchTerm::new("dessert"),
            cuisine: cuisine("Italian"),
        };

        assert_eq!(ids(&filter, &recipes), [5]);
    }

    #[test]
    fn result_is_ordered_subset_satisfying_both_predicates() {
        let recipes = recipes();
        for (term, cuisine) in ["", "a", "choco", "dessert", "zzz", " "]
            .into_iter()
            .cartesian_product(["", "Italian", "American", "Thai"])
        {
            let filter = Filter {
                search: SearchTerm::new(term),
                cuisine: super::cuisine(cuisine),
            };

            let found = ids(&filter, &recipes);
            let again = ids(&filter, &recipes);
            assert_eq!(found, again, "not deterministic");

            let expected = recipes
                .iter()
                .filter(|r| {
                    let t = term.to_lowercase();
                    let search = t.is_empty()
                        || r.name.as_ref().to_lowercase().contains(&t)
                        || r.cuisine.as_ref().to_lowercase().contains(&t)
                        || r.ingredients
                            .iter()
                            .chain(&r.tags)
                            .any(|s| s.to_lowercase().contains(&t));
                    let cuisine =
                        cuisine.is_empty() || r.cuisine.as_ref() == cuisine;
                    search && cuisine
                })
                .map(|r| u64::from(r.id))
                .collect::<Vec<_>>();
            assert_eq!(found, expected, "term: {term:?}, cuisine: {cuisine:?}");
        }
    }
}
