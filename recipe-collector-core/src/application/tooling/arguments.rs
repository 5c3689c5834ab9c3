use super::contract::ToolKind;
use crate::domain::recipe::NewRecipe;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecipesArgs {
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRecipeByIdArgs {
    pub id: u64,
}

/// Arguments that passed validation, tagged by the tool they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArguments {
    SearchRecipes(SearchRecipesArgs),
    GetRecipeById(GetRecipeByIdArgs),
    AddRecipe(NewRecipe),
}

impl ToolArguments {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolArguments::SearchRecipes(_) => ToolKind::SearchRecipes,
            ToolArguments::GetRecipeById(_) => ToolKind::GetRecipeById,
            ToolArguments::AddRecipe(_) => ToolKind::AddRecipe,
        }
    }

    /// Decode structurally valid arguments into the typed form for `kind`.
    pub(super) fn decode(kind: ToolKind, arguments: Value) -> Result<Self, serde_json::Error> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        Ok(match kind {
            ToolKind::SearchRecipes => {
                ToolArguments::SearchRecipes(serde_json::from_value(arguments)?)
            }
            ToolKind::GetRecipeById => {
                ToolArguments::GetRecipeById(serde_json::from_value(arguments)?)
            }
            ToolKind::AddRecipe => ToolArguments::AddRecipe(serde_json::from_value(arguments)?),
        })
    }
}
