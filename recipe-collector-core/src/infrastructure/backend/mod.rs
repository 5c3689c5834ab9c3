//! Recipe service client
//!
//! # Structure
//! - `traits` - [`RecipeBackend`], the seam the executor talks to
//! - `error` - [`BackendError`], non-2xx and transport failures
//! - `http` - [`HttpRecipeBackend`], the reqwest implementation

pub mod error;
pub mod http;
pub mod traits;

pub use error::BackendError;
pub use http::HttpRecipeBackend;
pub use traits::RecipeBackend;
