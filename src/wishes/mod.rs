//! Azadi Wishes Wall
//!
//! Append-only wall of user messages mirrored into a single storage record:
//!
//! - **types**: `Wish` and the form draft `WishDraft`
//! - **age**: Relative-age bucketing ("just now", "3 hours ago")
//! - **store**: `WishStore` seam plus in-memory and file-backed stores
//! - **board**: `WishBoard`, the owner of the list and its storage mirror
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! load:    store.get_item(key) → parse → Vec<Wish>   (missing / malformed → empty)
//! submit:  validate → prepend → persist
//! persist: Vec<Wish> → JSON → store.set_item(key)    (failures swallowed)
//! ```
//!
//! # Example
//!
//! ```rust
//! use azadi::wishes::{MemoryStore, WishBoard};
//!
//! let mut board = WishBoard::load(MemoryStore::new());
//! board.submit("Ayesha", "Pakistan Zindabad!");
//!
//! for view in board.render_list(chrono::Utc::now().timestamp_millis()) {
//!     println!("{} ({}): {}", view.wish.author, view.age, view.wish.message);
//! }
//! ```

pub mod age;
pub mod board;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use age::RelativeAge;
pub use board::{WishBoard, WishView, STORAGE_KEY};
pub use error::{WishError, WishResult};
pub use store::{MemoryStore, WishStore};
pub use types::{Wish, WishDraft, GUEST_NAME};

#[cfg(feature = "native")]
pub use store::FileStore;
