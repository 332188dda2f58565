pub mod multipart;
pub mod password;
