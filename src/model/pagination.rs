use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a paginated listing.
///
/// `page` is 1-based and `total_pages` is `ceil(total_items / page_size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub items: Vec<T>,
}
