pub mod allocator;
pub mod expand;
pub mod filter;
pub mod guard;

pub use allocator::{create_with_next_id, next_candidate, DEFAULT_MAX_ATTEMPTS};
pub use filter::{active_only, apply_filters, paginate, ListPage, PageQuery, DEFAULT_PER_PAGE};
pub use guard::{require_token, verify_token};
