//! Azadi Quick Quiz
//!
//! A fixed, ordered set of multiple-choice questions driven through a linear
//! state machine:
//!
//! ```text
//! InProgress(0, 0, none) ──select──▶ InProgress(i, s, Some(o))
//!        ▲                               │ advance
//!        │ restart                       ▼
//!        └──────────── Finished(s) ◀── last question
//! ```
//!
//! Nothing here is persisted: a session lives as long as the quiz modal is
//! open.

pub mod error;
pub mod question;
pub mod session;

pub use error::{TriviaError, TriviaResult};
pub use question::{QuizQuestion, QUESTIONS};
pub use session::{Advance, QuizSession, QuizState};
