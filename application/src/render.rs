//! Rendering of [`Recipe`] markup fragments.

use askama::Template;
use axum::response::Html;
use itertools::Itertools as _;
use service::{
    domain::{recipe, Recipe},
    read::recipe::Catalog,
};

use crate::{AsError, Error};

/// Number of ingredients previewed on a [`Card`].
const PREVIEWED_INGREDIENTS: usize = 3;

/// Renders the provided [`Template`] into an HTML response body.
///
/// # Errors
///
/// If the [`Template`] fails to render.
pub fn html(template: &impl Template) -> Result<Html<String>, Error> {
    template.render().map(Html).map_err(AsError::into_error)
}

/// Options of the cuisine dropdown.
#[derive(Clone, Copy, Debug, Template)]
#[template(path = "fragments/cuisines.html")]
pub struct Cuisines<'c> {
    /// [`Catalog`] to list.
    pub catalog: &'c Catalog,
}

/// Grid of [`Card`]s.
#[derive(Clone, Debug, Template)]
#[template(path = "fragments/grid.html")]
pub struct Grid<'r> {
    /// [`Card`]s to show, in order.
    pub cards: Vec<Card<'r>>,
}

impl<'r> Grid<'r> {
    /// Creates a new [`Grid`] out of the provided [`Recipe`]s.
    pub fn new(recipes: impl IntoIterator<Item = &'r Recipe>) -> Self {
        Self {
            cards: recipes.into_iter().map(Card::new).collect(),
        }
    }
}

/// Summary card of a single [`Recipe`].
#[derive(Clone, Debug)]
pub struct Card<'r> {
    /// [`Recipe`] to summarize.
    pub recipe: &'r Recipe,

    /// CSS class of the [`recipe::Difficulty`].
    pub difficulty_class: String,

    /// Preview of the first ingredients.
    pub ingredients: String,

    /// [`recipe::Rating`] as stars.
    pub stars: String,
}

impl<'r> Card<'r> {
    /// Creates a new [`Card`] of the provided [`Recipe`].
    #[must_use]
    pub fn new(recipe: &'r Recipe) -> Self {
        Self {
            recipe,
            difficulty_class: difficulty_class(&recipe.difficulty),
            ingredients: preview(&recipe.ingredients),
            stars: stars(recipe.rating),
        }
    }
}

/// Body of the detail modal of a single [`Recipe`].
#[derive(Clone, Debug, Template)]
#[template(path = "fragments/modal.html")]
pub struct Modal<'r> {
    /// [`Recipe`] to detail.
    pub recipe: &'r Recipe,

    /// [`recipe::Rating`] as stars.
    pub stars: String,
}

impl<'r> Modal<'r> {
    /// Creates a new [`Modal`] of the provided [`Recipe`].
    #[must_use]
    pub fn new(recipe: &'r Recipe) -> Self {
        Self {
            recipe,
            stars: stars(recipe.rating),
        }
    }
}

/// Returns CSS class of the provided [`recipe::Difficulty`].
///
/// Whitespace of an unknown level is replaced with dashes.
#[must_use]
pub fn difficulty_class(difficulty: &recipe::Difficulty) -> String {
    let level = difficulty.to_string().to_lowercase();
    format!("difficulty-{}", level.split_whitespace().join("-"))
}

/// Returns the provided [`recipe::Rating`] as a row of stars.
#[must_use]
pub fn stars(rating: recipe::Rating) -> String {
    "★".repeat(rating.stars())
}

/// Returns a short preview of the provided `ingredients`.
#[must_use]
pub fn preview(ingredients: &[String]) -> String {
    let head = ingredients.iter().take(PREVIEWED_INGREDIENTS).join(", ");
    match ingredients.len().checked_sub(PREVIEWED_INGREDIENTS) {
        Some(rest) if rest > 0 => format!("{head} +{rest} more"),
        _ => head,
    }
}
