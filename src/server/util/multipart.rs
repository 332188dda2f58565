use axum::extract::Multipart;

use crate::server::{error::AppError, service::upload::ImageUpload};

/// Multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

/// Reads the `file` field of a multipart body, skipping any other fields.
///
/// # Returns
/// - `Ok(ImageUpload)` - File name and contents
/// - `Err(AppError::BadRequest)` - No `file` field was sent
/// - `Err(AppError::Multipart)` - Body could not be parsed
pub async fn read_image(mut multipart: Multipart) -> Result<ImageUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        return Ok(ImageUpload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::BadRequest(format!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}
