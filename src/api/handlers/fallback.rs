use crate::error::AppError;

/// No route matches the path.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// The path matches but no handler exists for the method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
