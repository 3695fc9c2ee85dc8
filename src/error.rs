use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid country code {0:?}: expected two uppercase ASCII letters")]
    InvalidCode(String),

    #[error("duplicate country code: {0}")]
    DuplicateCode(String),

    #[error("duplicate country name: {0}")]
    DuplicateName(String),

    #[error("duplicate capital: {0}")]
    DuplicateCapital(String),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
