pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, tooling};
pub use config::{AppConfig, ConfigError, ModelProviderConfig};
pub use domain::{recipe, types};
pub use infrastructure::{backend, model, rpc};
