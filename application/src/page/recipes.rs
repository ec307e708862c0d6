//! Recipes page.

use askama::Template;
use axum::response::Html;

use crate::{render, CurrentSession, Error};

/// Shell of the recipes page, filled in by the [`live`] controller.
///
/// [`live`]: crate::live
#[derive(Clone, Debug, Template)]
#[template(path = "recipes.html")]
pub struct RecipesPage {
    /// Display name of the logged in user.
    pub name: String,
}

/// Renders the [`RecipesPage`] for the [`CurrentSession`].
///
/// # Errors
///
/// If the page fails to render.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn index(
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, Error> {
    render::html(&RecipesPage {
        name: session.to_string(),
    })
}
