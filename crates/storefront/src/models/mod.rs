//! Request and session models for the storefront.

pub mod page_state;
pub mod session;

pub use page_state::{PageQuery, PageState};
pub use session as session_keys;
