//! Recipe entities exchanged with the recipe service.
//!
//! The bridge never persists or renumbers recipes. [`NewRecipe`] is the typed
//! body of an `addRecipe` call after validation; [`Recipe`] is what the
//! service hands back once it has assigned an id.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// One cooking step. `number` is whatever the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub number: Number,
    pub description: String,
}

/// Body of `POST /recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_cooked: Option<Number>,
    pub ingredient_sections: Vec<IngredientSection>,
    pub steps: Vec<RecipeStep>,
}

/// A stored recipe as returned by the service.
///
/// Decoding is lenient: search listings may omit sections and steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub times_cooked: Option<Number>,
    #[serde(default)]
    pub ingredient_sections: Vec<IngredientSection>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn label(&self) -> String {
        format!("recipe #{} {}", self.id, self.title)
    }
}

/// Result of a search: the service collapses a single hit into the full
/// recipe instead of a one-element list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchMatches {
    Many(Vec<Recipe>),
    Single(Box<Recipe>),
}

impl SearchMatches {
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn len(&self) -> usize {
        match self {
            SearchMatches::Many(recipes) => recipes.len(),
            SearchMatches::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> String {
        match self {
            SearchMatches::Single(recipe) => format!("single match: {}", recipe.label()),
            SearchMatches::Many(recipes) if recipes.is_empty() => "no matching recipes".into(),
            SearchMatches::Many(recipes) => {
                let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
                format!("found {} recipes: {}", recipes.len(), titles.join(", "))
            }
        }
    }
}
