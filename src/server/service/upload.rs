//! Image upload storage.
//!
//! Uploaded images are written to `<public_dir>/<folder>/img-<millis>-<random>.<ext>`
//! and referenced by the public path `/public/<folder>/<file>`, which the router
//! serves statically.

use std::path::Path;

use chrono::Utc;

use crate::server::error::AppError;

/// Folders created under the public directory at startup.
pub const UPLOAD_FOLDERS: [&str; 2] = [
    UploadFolder::Locations.as_str(),
    UploadFolder::Rooms.as_str(),
];

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

const MIB: usize = 1024 * 1024;

/// Destination of an upload, which also decides its size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    Locations,
    Rooms,
}

impl UploadFolder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::Rooms => "rooms",
        }
    }

    pub const fn max_bytes(self) -> usize {
        match self {
            Self::Locations => 5 * MIB,
            Self::Rooms => 2 * MIB,
        }
    }
}

/// Image file read from a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct UploadService<'a> {
    public_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(public_dir: &'a Path) -> Self {
        Self { public_dir }
    }

    /// Validates and writes an image, returning its public path.
    ///
    /// # Returns
    /// - `Ok(String)` - Path such as `/public/rooms/img-1718000000000-42.png`
    /// - `Err(AppError::BadRequest)` - Empty file, oversized file or extension not allowed
    /// - `Err(AppError::Io)` - Writing the file failed
    pub async fn save(&self, folder: UploadFolder, upload: ImageUpload) -> Result<String, AppError> {
        let extension = validate(folder, &upload)?;
        let file_name = generate_file_name(&extension);

        let dir = self.public_dir.join(folder.as_str());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), &upload.bytes).await?;

        tracing::info!(
            "Stored upload {} ({} bytes) as {}/{}",
            upload.file_name,
            upload.bytes.len(),
            folder.as_str(),
            file_name
        );

        Ok(format!("/public/{}/{}", folder.as_str(), file_name))
    }
}

/// Checks an upload against the folder's rules and returns its lowercase extension.
pub fn validate(folder: UploadFolder, upload: &ImageUpload) -> Result<String, AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    if upload.bytes.len() > folder.max_bytes() {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} MiB limit",
            folder.max_bytes() / MIB
        )));
    }

    match extension_of(&upload.file_name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(AppError::BadRequest(format!(
            "Only {} images are allowed",
            ALLOWED_EXTENSIONS.join(", ")
        ))),
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn generate_file_name(extension: &str) -> String {
    format!(
        "img-{}-{}.{}",
        Utc::now().timestamp_millis(),
        rand::random_range(0..1_000_000_000u32),
        extension
    )
}
