use thiserror::Error;

use crate::kernel::kernelerror::KernelError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("'functions' array is empty or missing")]
    EmptyFunctionList,
    #[error("call has no 'function' name")]
    MissingFunctionName,
    #[error("'args' must be an array, got {0}")]
    InvalidArgumentList(serde_json::Value),
    #[error(transparent)]
    KernelError(#[from] KernelError)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    /// Whether the call never reached a kernel: it has no usable name, or
    /// names nothing in the registry.
    pub fn is_skip(&self) -> bool {
        matches!(self, ManagerError::MissingFunctionName | ManagerError::NameNotFoundError(_))
    }
}
