use super::arguments::ToolArguments;
use super::registry::ToolRegistry;
use super::result::ToolCallResult;
use crate::domain::types::ToolCallRequest;
use crate::infrastructure::backend::RecipeBackend;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs validated tool calls against the recipe service.
///
/// Whatever happens, the caller gets a [`ToolCallResult`]: validation,
/// unknown-tool and backend failures are all folded into the result.
#[derive(Clone)]
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
    backend: Arc<dyn RecipeBackend>,
}

impl ToolExecutor {
    pub fn new(registry: Arc<ToolRegistry>, backend: Arc<dyn RecipeBackend>) -> Self {
        Self { registry, backend }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Validate `request` against the registry, then execute it.
    pub async fn invoke(&self, request: &ToolCallRequest) -> ToolCallResult {
        match self.registry.validate(&request.tool_name, &request.arguments) {
            Ok(arguments) => self.execute(arguments).await,
            Err(err) => {
                debug!(tool = %request.tool_name, call_id = %request.id, %err, "Tool call refused");
                ToolCallResult::failure(request.tool_name.clone(), err)
            }
        }
    }

    /// Execute already-validated arguments. Each call is attempted once.
    pub async fn execute(&self, arguments: ToolArguments) -> ToolCallResult {
        let kind = arguments.kind();
        debug!(tool = %kind, mutating = kind.is_mutating(), "Dispatching tool to recipe service");

        let outcome = match &arguments {
            ToolArguments::SearchRecipes(args) => self.backend.search_recipes(&args.term).await,
            ToolArguments::GetRecipeById(args) => self.backend.get_recipe(args.id).await,
            ToolArguments::AddRecipe(recipe) => self.backend.add_recipe(recipe).await,
        };

        match outcome {
            Ok(payload) => {
                let result = ToolCallResult::success(kind.name(), payload);
                info!(tool = %kind, success = true, summary = %result.summary(), "Tool executed");
                result
            }
            Err(err) => {
                warn!(tool = %kind, status = ?err.status_code(), %err, "Tool execution failed");
                ToolCallResult::failure(kind.name(), &err)
            }
        }
    }
}
