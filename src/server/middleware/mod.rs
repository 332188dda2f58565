//! Request guards and response processing.
//!
//! - `auth` - Bearer token authentication and permission checks used by controllers
//! - `response` - Wraps successful JSON responses in the API envelope

pub mod auth;
pub mod response;

#[cfg(test)]
mod test;
