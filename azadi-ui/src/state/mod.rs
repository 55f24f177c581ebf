//! State Management
//!
//! Page-level state and the browser storage backend for the wishes wall.

pub mod global;
pub mod storage;

pub use global::{provide_page_state, PageState};
pub use storage::LocalStore;
