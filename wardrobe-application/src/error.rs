use thiserror::Error;
use wardrobe_domain::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("asset not found: {group}/{asset}")]
    AssetNotFound { group: String, asset: String },
    #[error("unknown lock kind '{0}'")]
    UnknownLockKind(String),
    #[error("outfit '{0}' not found")]
    OutfitNotFound(String),
    #[error("outfit name must not be empty")]
    EmptyName,
    #[error("an outfit named '{0}' already exists")]
    NameCollision(String),
    #[error("no outfit named '{0}'")]
    NotFound(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownLockKind(kind) => AppError::UnknownLockKind(kind),
            DomainError::AssetNotFound { group, asset } => AppError::AssetNotFound { group, asset },
        }
    }
}
