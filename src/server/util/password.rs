use crate::server::error::AppError;

/// bcrypt work factor. Tests use the minimum so hashing stays fast.
const HASH_COST: u32 = if cfg!(test) { 4 } else { 10 };

/// Hashes a plain text password with bcrypt on the blocking thread pool.
///
/// # Arguments
/// - `plain` - Password as submitted by the user
///
/// # Returns
/// - `Ok(String)` - bcrypt hash including salt and cost
/// - `Err(AppError::Bcrypt)` - Hashing failed
/// - `Err(AppError::Join)` - Hashing task panicked
pub async fn hash_password(plain: &str) -> Result<String, AppError> {
    let plain = plain.to_string();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain, HASH_COST)).await??;

    Ok(hash)
}

/// Checks a plain text password against a stored bcrypt hash on the blocking
/// thread pool.
///
/// A malformed stored hash is treated as a mismatch.
pub async fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    let plain = plain.to_string();
    let hash = hash.to_string();

    let matches = tokio::task::spawn_blocking(move || {
        bcrypt::verify(plain, &hash).unwrap_or_else(|e| {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        })
    })
    .await?;

    Ok(matches)
}
