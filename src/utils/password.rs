use crate::utils::error::AppError;

/// bcrypt work factor for stored credentials.
pub const HASH_COST: u32 = 10;

/// Hashes a plaintext password off the async workers.
pub async fn hash_password(plaintext: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, HASH_COST))
        .await
        .map_err(|e| AppError::internal("Error adding user", format!("Task join error: {}", e)))?
        .map_err(|e| AppError::internal("Error adding user", format!("Password hashing error: {}", e)))
}
