//! UI Components
//!
//! Sections of the page and the quiz modal.

pub mod hero;
pub mod quiz_modal;
pub mod timeline;
pub mod wishes_wall;

pub use hero::Hero;
pub use quiz_modal::QuizModal;
pub use timeline::Timeline;
pub use wishes_wall::WishesWall;
