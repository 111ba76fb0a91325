use thiserror::Error;

use super::config::GameModule;

/// Errors raised while validating manifests or parsing catalog input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("card {name:?} appears more than once in the {module} manifest")]
    DuplicateCard { module: GameModule, name: String },
    #[error("unknown game module: {0:?}")]
    UnknownModule(String),
}
