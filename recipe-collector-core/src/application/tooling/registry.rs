use super::arguments::ToolArguments;
use super::contract::{ToolContract, ToolKind};
use super::error::{RegistryError, ToolError};
use super::validation::{FieldViolation, ValidationError, check_arguments};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A tool as presented to a model or an external client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub input_schema: Value,
}

impl From<&ToolContract> for ToolDescriptor {
    fn from(contract: &ToolContract) -> Self {
        Self {
            name: contract.name().to_string(),
            title: contract.title().map(ToOwned::to_owned),
            description: contract.description().to_string(),
            input_schema: contract.input_schema().to_json_schema(),
        }
    }
}

/// Name → contract mapping, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    contracts: Vec<ToolContract>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the given built-in recipe contracts.
    pub fn with_kinds(kinds: &[ToolKind]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register(ToolContract::recipe(*kind))?;
        }
        Ok(registry)
    }

    /// All three recipe tools, as exposed to the agent loop.
    pub fn recipe_tools() -> Result<Self, RegistryError> {
        Self::with_kinds(&ToolKind::ALL)
    }

    /// The read-only subset exposed by the stdio server.
    pub fn read_only_recipe_tools() -> Result<Self, RegistryError> {
        Self::with_kinds(&[ToolKind::SearchRecipes, ToolKind::GetRecipeById])
    }

    pub fn register(&mut self, contract: ToolContract) -> Result<(), RegistryError> {
        let name = contract.name().to_string();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateToolName(name));
        }
        debug!(tool = %name, "Registering tool contract");
        self.index.insert(name, self.contracts.len());
        self.contracts.push(contract);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolContract> {
        self.index.get(name).map(|&position| &self.contracts[position])
    }

    pub fn contracts(&self) -> &[ToolContract] {
        &self.contracts
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.contracts.iter().map(ToolDescriptor::from).collect()
    }

    /// Validate raw arguments for `tool_name`, returning every violated
    /// field on failure. Never performs I/O.
    pub fn validate(&self, tool_name: &str, arguments: &Value) -> Result<ToolArguments, ToolError> {
        let Some(contract) = self.get(tool_name) else {
            warn!(requested_tool = %tool_name, "Unknown tool requested");
            return Err(ToolError::UnknownTool(tool_name.to_string()));
        };

        let violations = check_arguments(contract.input_schema(), arguments);
        if !violations.is_empty() {
            warn!(
                tool = %tool_name,
                violations = violations.len(),
                "Tool arguments failed validation"
            );
            return Err(ValidationError {
                tool: tool_name.to_string(),
                violations,
            }
            .into());
        }

        ToolArguments::decode(contract.kind(), arguments.clone()).map_err(|err| {
            ToolError::Validation(ValidationError {
                tool: tool_name.to_string(),
                violations: vec![FieldViolation {
                    field: String::new(),
                    message: err.to_string(),
                }],
            })
        })
    }
}
