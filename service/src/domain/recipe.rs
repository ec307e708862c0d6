//! [`Recipe`] definitions.

use std::str::FromStr as _;

use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Deserializer};
use strum::EnumString;

/// Cooking recipe.
///
/// [`Recipe`]s are immutable once fetched from the [`Source`].
///
/// [`Source`]: crate::infra::Source
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// ID of this [`Recipe`].
    pub id: Id,

    /// [`Name`] of this [`Recipe`].
    pub name: Name,

    /// [`Cuisine`] this [`Recipe`] belongs to.
    pub cuisine: Cuisine,

    /// [`Difficulty`] of cooking this [`Recipe`].
    pub difficulty: Difficulty,

    /// Preparation time in minutes.
    pub prep_time_minutes: u32,

    /// Cooking time in minutes.
    pub cook_time_minutes: u32,

    /// Number of servings.
    pub servings: u32,

    /// Calories per a single serving.
    pub calories_per_serving: u32,

    /// [`Rating`] of this [`Recipe`].
    pub rating: Rating,

    /// Number of reviews the [`Rating`] is based on.
    pub review_count: u32,

    /// URL of this [`Recipe`]'s image.
    pub image: String,

    /// Ingredients, in order.
    pub ingredients: Vec<String>,

    /// Tags, in order.
    pub tags: Vec<String>,

    /// Instructions, in order.
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Returns total time (preparation and cooking) in minutes.
    #[must_use]
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

/// ID of a [`Recipe`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

/// Name of a [`Recipe`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

/// Cuisine of a [`Recipe`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[as_ref(str)]
pub struct Cuisine(String);

/// Difficulty of a [`Recipe`].
///
/// Known levels are recognized ignoring the letter case. Any other value is
/// kept as is, so a single odd [`Recipe`] doesn't spoil the whole collection.
#[derive(Clone, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Easy to cook.
    Easy,

    /// Requires some experience.
    Medium,

    /// Requires a lot of experience.
    Hard,

    /// Level unknown to this application, displayed verbatim.
    #[display("{_0}")]
    #[strum(disabled)]
    Other(String),
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Ok(Self::from_str(&s).unwrap_or(Self::Other(s)))
    }
}

/// Rating of a [`Recipe`] on a `0..=5` scale.
#[derive(Clone, Copy, Debug, Deserialize, Display, From, PartialEq)]
pub struct Rating(f64);

impl Rating {
    /// Highest possible [`Rating`].
    pub const MAX: f64 = 5.0;

    /// Returns the number of whole stars this [`Rating`] rounds to.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to `0..=5`"
    )]
    #[must_use]
    pub fn stars(self) -> usize {
        self.0.clamp(0.0, Self::MAX).round() as usize
    }
}

#[cfg(test)]
mod spec {
    use super::{Difficulty, Rating, Recipe};

    #[test]
    fn rating_rounds_to_stars() {
        assert_eq!(Rating::from(4.6).stars(), 5);
        assert_eq!(Rating::from(4.5).stars(), 5);
        assert_eq!(Rating::from(4.4).stars(), 4);
        assert_eq!(Rating::from(0.0).stars(), 0);
        assert_eq!(Rating::from(7.0).stars(), 5);
    }

    #[test]
    fn rating_displays_as_number() {
        assert_eq!(Rating::from(4.6).to_string(), "4.6");
        assert_eq!(Rating::from(5.0).to_string(), "5");
    }

    #[test]
    fn difficulty_parses_ignoring_case() {
        let parse = |s| serde_json::from_str::<Difficulty>(s).unwrap();

        assert_eq!(parse(r#""Easy""#), Difficulty::Easy);
        assert_eq!(parse(r#""medium""#), Difficulty::Medium);
        assert_eq!(parse(r#""HARD""#), Difficulty::Hard);
    }

    #[test]
    fn difficulty_keeps_unknown_level() {
        let parsed: Difficulty = serde_json::from_str(r#""Expert""#).unwrap();

        assert_eq!(parsed, Difficulty::Other("Expert".into()));
        assert_eq!(parsed.to_string(), "Expert");
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }

    #[test]
    fn deserializes_remote_record() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Classic Margherita Pizza",
                "ingredients": ["Pizza dough", "Tomato sauce"],
                "instructions": ["Preheat the oven.", "Bake."],
                "prepTimeMinutes": 20,
                "cookTimeMinutes": 15,
                "servings": 4,
                "difficulty": "Easy",
                "cuisine": "Italian",
                "caloriesPerServing": 300,
                "tags": ["Pizza", "Italian"],
                "userId": 166,
                "image": "https://cdn.dummyjson.com/recipe-images/1.webp",
                "rating": 4.6,
                "reviewCount": 98,
                "mealType": ["Dinner"]
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.name.as_ref(), "Classic Margherita Pizza");
        assert_eq!(recipe.cuisine.as_ref(), "Italian");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.total_time_minutes(), 35);
        assert_eq!(recipe.rating.stars(), 5);
        assert_eq!(recipe.ingredients.len(), 2);
    }
}
