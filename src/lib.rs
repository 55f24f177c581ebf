//! # Azadi
//!
//! Independence Day celebration page. The stateful parts of the page live here
//! as plain Rust so they can be driven from the browser UI (`azadi-ui`), from
//! the command line, or from tests.
//!
//! ## Modules
//!
//! - [`wishes`]: Wishes wall with a pluggable storage mirror
//! - [`trivia`]: Fixed-question quiz state machine
//! - [`share`]: Share-sheet / clipboard policy
//! - [`page`]: Static page content (hero, milestones, clock formatting)
//! - `config`, `logging`, `server`: native-only configuration, tracing setup
//!   and the static page server (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust
//! use azadi::trivia::QuizSession;
//! use azadi::wishes::{MemoryStore, WishBoard};
//!
//! let mut board = WishBoard::load(MemoryStore::new());
//! board.submit("", "Azadi Mubarak");
//! assert_eq!(board.wishes()[0].author, "Guest");
//!
//! let mut quiz = QuizSession::builtin();
//! quiz.select(1).unwrap();
//! quiz.advance().unwrap();
//! assert_eq!(quiz.score(), 1);
//! ```

pub mod page;
pub mod share;
pub mod trivia;
pub mod wishes;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;

// Re-export top-level types for convenience
pub use wishes::{
    MemoryStore, RelativeAge, Wish, WishBoard, WishDraft, WishError, WishResult, WishStore,
    WishView, STORAGE_KEY,
};

pub use trivia::{Advance, QuizQuestion, QuizSession, QuizState, TriviaError, TriviaResult, QUESTIONS};

pub use share::{share_page, ShareError, SharePayload, SharePlatform, ShareOutcome, COPIED_FLASH_MS};

pub use page::{Milestone, MILESTONES};

#[cfg(feature = "native")]
pub use wishes::FileStore;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, ConfigSource, LoggingConfig, ServerConfig, StorageConfig};

#[cfg(feature = "native")]
pub use server::{build_router, serve, ServerError};
