pub mod cache;
pub mod item;
pub mod layout;

pub use cache::present_cache_rebuild;
pub use item::{present_recent_list, present_search_results};
pub use layout::present_layout_list;
