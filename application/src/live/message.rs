//! Messages exchanged over a live connection.

use serde::{Deserialize, Serialize};
use service::domain::recipe;

/// Event reported by the client.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Search input has changed.
    Search {
        /// Current search input.
        term: String,
    },

    /// Cuisine selection has changed.
    Cuisine {
        /// Selected cuisine, empty meaning all.
        value: String,
    },

    /// "Show more" is requested.
    ShowMore,

    /// Details of a [`Recipe`] are requested.
    ///
    /// [`Recipe`]: service::domain::Recipe
    View {
        /// ID of the requested [`Recipe`].
        ///
        /// [`Recipe`]: service::domain::Recipe
        id: recipe::Id,
    },

    /// Detail modal is dismissed.
    CloseModal,
}

/// Update of the page pushed to the client.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Update {
    /// Replaces inner markup of the [`Target`].
    Html {
        /// Element to update.
        target: Target,

        /// New inner markup.
        html: String,
    },

    /// Replaces text of the [`Target`].
    Text {
        /// Element to update.
        target: Target,

        /// New text.
        text: String,
    },

    /// Shows or hides the [`Target`].
    Display {
        /// Element to update.
        target: Target,

        /// Whether the element is shown.
        visible: bool,
    },
}

impl Update {
    /// Creates an [`Update::Html`].
    #[must_use]
    pub fn html(target: Target, html: impl Into<String>) -> Self {
        Self::Html {
            target,
            html: html.into(),
        }
    }

    /// Creates an [`Update::Text`].
    #[must_use]
    pub fn text(target: Target, text: impl ToString) -> Self {
        Self::Text {
            target,
            text: text.to_string(),
        }
    }

    /// Creates an [`Update::Display`].
    #[must_use]
    pub fn display(target: Target, visible: bool) -> Self {
        Self::Display { target, visible }
    }
}

/// Element of the recipes page, serialized as its ID.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// Cuisine dropdown.
    CuisineFilter,

    /// Recipe cards.
    RecipesGrid,

    /// Line counting the shown recipes.
    RecipeCount,

    /// "Show more" control.
    ShowMoreContainer,

    /// Notice shown while the recipes are being fetched.
    LoadingMessage,

    /// Area of the fetch error.
    ErrorMessage,

    /// Detail modal.
    RecipeModal,

    /// Title of the detail modal.
    ModalTitle,

    /// Body of the detail modal.
    ModalBody,
}

#[cfg(test)]
mod spec {
    use service::domain::recipe;

    use super::{Event, Target, Update};

    #[test]
    fn parses_events() {
        let parse = |s: &str| serde_json::from_str::<Event>(s).unwrap();

        assert_eq!(
            parse(r#"{"type":"search","term":"choco"}"#),
            Event::Search {
                term: "choco".to_owned(),
            },
        );
        assert_eq!(
            parse(r#"{"type":"cuisine","value":""}"#),
            Event::Cuisine {
                value: String::new(),
            },
        );
        assert_eq!(parse(r#"{"type":"showMore"}"#), Event::ShowMore);
        assert_eq!(
            parse(r#"{"type":"view","id":7}"#),
            Event::View {
                id: recipe::Id::from(7),
            },
        );
        assert_eq!(parse(r#"{"type":"closeModal"}"#), Event::CloseModal);
    }

    #[test]
    fn rejects_unknown_events() {
        assert!(serde_json::from_str::<Event>(r#"{"type":"reload"}"#).is_err());
        assert!(serde_json::from_str::<Event>("not json").is_err());
    }

    #[test]
    fn serializes_updates_with_element_ids() {
        let json = serde_json::to_value([
            Update::text(Target::RecipeCount, "Showing 9 of 30 recipes"),
            Update::display(Target::ShowMoreContainer, true),
        ])
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "op": "text",
                    "target": "recipeCount",
                    "text": "Showing 9 of 30 recipes",
                },
                {
                    "op": "display",
                    "target": "showMoreContainer",
                    "visible": true,
                },
            ]),
        );
    }
}
