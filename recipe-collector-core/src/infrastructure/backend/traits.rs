use super::error::BackendError;
use crate::domain::recipe::NewRecipe;
use async_trait::async_trait;
use serde_json::Value;

/// Operations the recipe service offers.
///
/// Successful calls return the decoded response body untouched.
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    /// `GET /recipes/search?query=<term>`
    async fn search_recipes(&self, term: &str) -> Result<Value, BackendError>;

    /// `GET /recipes/{id}`
    async fn get_recipe(&self, id: u64) -> Result<Value, BackendError>;

    /// `POST /recipes`
    async fn add_recipe(&self, recipe: &NewRecipe) -> Result<Value, BackendError>;
}
