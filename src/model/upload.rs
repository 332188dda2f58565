use utoipa::ToSchema;

/// Multipart body accepted by the image upload endpoints.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
