use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

/// Query string of the `/pagination` endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// 1-based page number. Values below 1 are treated as 1.
    #[serde(default = "default_page")]
    #[param(default = 1)]
    pub page: i64,
    /// Items per page. Values below 1 fall back to 10, values above 100 are capped.
    #[serde(default = "default_page_size")]
    #[param(default = 10)]
    pub page_size: i64,
    /// Substring filter. Empty matches everything.
    #[serde(default)]
    pub keyword: String,
}

impl PaginationParam {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

/// Query string of the `/search` endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParam {
    #[serde(default)]
    pub keyword: String,
}
