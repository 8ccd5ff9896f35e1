pub mod global_context;
pub mod top_header;

pub use global_context::{use_account_store, AccountStore};
pub use top_header::TopHeader;
