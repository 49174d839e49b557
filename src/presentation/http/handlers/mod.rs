pub mod document_handler;
pub mod workspace_handler;

pub use document_handler::DocumentHandler;
pub use workspace_handler::WorkspaceHandler;

use crate::presentation::http::errors::AppError;

/// `user_id` query values must be present and numeric.
pub(crate) fn required_user_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| AppError::BadRequest("user_id query parameter is required".to_string()))?;

    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("user_id must be numeric, got '{}'", raw)))
}
