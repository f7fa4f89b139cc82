use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown lock kind '{0}'")]
    UnknownLockKind(String),
    #[error("asset not found: {group}/{asset}")]
    AssetNotFound { group: String, asset: String },
}
