//! Application result alias.

use crate::error::AppError;

/// Convenience alias used by every crate in the workspace.
pub type AppResult<T> = Result<T, AppError>;
