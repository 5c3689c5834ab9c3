//! Tool contracts and their input schemas.
//!
//! A contract is the single declaration both host protocols share: the model
//! sees it as a function definition, the stdio server lists it under
//! `tools/list`, and the registry validates incoming arguments against it.

use serde_json::{Map, Value, json};
use std::fmt;

/// The fixed set of operations the bridge knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    SearchRecipes,
    GetRecipeById,
    AddRecipe,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [
        ToolKind::SearchRecipes,
        ToolKind::GetRecipeById,
        ToolKind::AddRecipe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::SearchRecipes => "searchRecipes",
            ToolKind::GetRecipeById => "getRecipeById",
            ToolKind::AddRecipe => "addRecipe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether a successful call changes state in the recipe service.
    pub fn is_mutating(self) -> bool {
        matches!(self, ToolKind::AddRecipe)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Url,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String { format: Option<StringFormat> },
    Integer { minimum: Option<i64> },
    Number,
    Array(Box<FieldType>),
    Object(Vec<FieldSpec>),
}

impl FieldType {
    pub fn string() -> Self {
        FieldType::String { format: None }
    }

    pub fn url() -> Self {
        FieldType::String {
            format: Some(StringFormat::Url),
        }
    }

    pub fn integer_min(minimum: i64) -> Self {
        FieldType::Integer {
            minimum: Some(minimum),
        }
    }

    pub fn array_of(items: FieldType) -> Self {
        FieldType::Array(Box::new(items))
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::String { .. } => "string",
            FieldType::Integer { .. } => "integer",
            FieldType::Number => "number",
            FieldType::Array(_) => "array",
            FieldType::Object(_) => "object",
        }
    }

    fn to_json_schema(&self) -> Value {
        match self {
            FieldType::String { format } => match format {
                Some(StringFormat::Url) => json!({ "type": "string", "format": "uri" }),
                None => json!({ "type": "string" }),
            },
            FieldType::Integer { minimum } => match minimum {
                Some(min) => json!({ "type": "integer", "minimum": min }),
                None => json!({ "type": "integer" }),
            },
            FieldType::Number => json!({ "type": "number" }),
            FieldType::Array(items) => json!({ "type": "array", "items": items.to_json_schema() }),
            FieldType::Object(fields) => object_schema(fields),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub ty: FieldType,
}

impl FieldSpec {
    pub fn required(
        name: impl Into<String>,
        ty: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            ty,
        }
    }

    pub fn optional(
        name: impl Into<String>,
        ty: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, ty, description)
        }
    }

    fn to_json_schema(&self) -> Value {
        let mut schema = self.ty.to_json_schema();
        if let Value::Object(map) = &mut schema {
            map.insert(
                "description".to_string(),
                Value::String(self.description.clone()),
            );
        }
        schema
    }
}

/// Top-level argument shape of a tool: always an object.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSchema {
    pub fields: Vec<FieldSpec>,
}

impl InputSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn to_json_schema(&self) -> Value {
        object_schema(&self.fields)
    }
}

fn object_schema(fields: &[FieldSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in fields {
        properties.insert(field.name.clone(), field.to_json_schema());
        if field.required {
            required.push(Value::String(field.name.clone()));
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Name, description and input schema of one tool. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolContract {
    kind: ToolKind,
    title: Option<String>,
    description: String,
    input_schema: InputSchema,
}

impl ToolContract {
    pub fn new(kind: ToolKind, description: impl Into<String>, input_schema: InputSchema) -> Self {
        Self {
            kind,
            title: None,
            description: description.into(),
            input_schema,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }

    /// Built-in contract for one of the recipe operations.
    pub fn recipe(kind: ToolKind) -> Self {
        match kind {
            ToolKind::SearchRecipes => search_recipes_contract(),
            ToolKind::GetRecipeById => get_recipe_by_id_contract(),
            ToolKind::AddRecipe => add_recipe_contract(),
        }
    }
}

fn search_recipes_contract() -> ToolContract {
    ToolContract::new(
        ToolKind::SearchRecipes,
        "Retrieves a list of recipes that have the search term in their title or in their \
         ingredients list. If there is only one recipe that matches the search term, the full \
         recipe details are returned instead of a list.",
        InputSchema::new(vec![FieldSpec::required(
            "term",
            FieldType::string(),
            "The search term to filter recipes.",
        )]),
    )
    .with_title("Search recipes by term")
}

fn get_recipe_by_id_contract() -> ToolContract {
    ToolContract::new(
        ToolKind::GetRecipeById,
        "Retrieves a recipe by its unique ID. The response includes the recipe's title, \
         ingredients, and steps. It may also include a description, time to cook, servings, \
         URL and extra notes.",
        InputSchema::new(vec![FieldSpec::required(
            "id",
            FieldType::integer_min(1),
            "The unique ID of the recipe.",
        )]),
    )
    .with_title("Get recipe by ID")
}

fn add_recipe_contract() -> ToolContract {
    let ingredient_section = FieldType::Object(vec![
        FieldSpec::optional(
            "heading",
            FieldType::string(),
            "Optional heading for this ingredient section.",
        ),
        FieldSpec::required(
            "ingredients",
            FieldType::array_of(FieldType::string()),
            "List of ingredients.",
        ),
    ]);
    let step = FieldType::Object(vec![
        FieldSpec::required("number", FieldType::Number, "Step number."),
        FieldSpec::required("description", FieldType::string(), "Description of the step."),
    ]);

    ToolContract::new(
        ToolKind::AddRecipe,
        "Adds a new recipe to the collection. Provide recipe details including title, \
         ingredients, and cooking steps. Once added, returns the full recipe data including its \
         unique ID.",
        InputSchema::new(vec![
            FieldSpec::required("title", FieldType::string(), "The title of the recipe."),
            FieldSpec::optional(
                "description",
                FieldType::string(),
                "A description of the recipe.",
            ),
            FieldSpec::optional(
                "time",
                FieldType::string(),
                "The time required to make the recipe (e.g., \"30 minutes\").",
            ),
            FieldSpec::optional(
                "servings",
                FieldType::string(),
                "Number of servings the recipe makes.",
            ),
            FieldSpec::optional("url", FieldType::url(), "URL to the original recipe."),
            FieldSpec::optional(
                "notes",
                FieldType::string(),
                "Additional notes about the recipe.",
            ),
            FieldSpec::optional(
                "timesCooked",
                FieldType::Number,
                "Number of times this recipe has been cooked.",
            ),
            FieldSpec::required(
                "ingredientSections",
                FieldType::array_of(ingredient_section),
                "Sections of ingredients for the recipe.",
            ),
            FieldSpec::required(
                "steps",
                FieldType::array_of(step),
                "Cooking steps for the recipe.",
            ),
        ]),
    )
    .with_title("Add a recipe")
}
