pub mod recipe;
pub mod types;
