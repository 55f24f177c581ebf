//! Quiz error types

use thiserror::Error;

/// Errors returned by quiz session transitions
///
/// Every error leaves the session unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    /// A session needs at least one question
    #[error("Quiz has no questions")]
    NoQuestions,

    /// The chosen option does not exist on the current question
    #[error("Option {option} out of range (question has {available} options)")]
    OptionOutOfRange { option: usize, available: usize },

    /// The quiz is over; only restart is accepted
    #[error("Quiz already finished")]
    AlreadyFinished,
}

/// Result type alias for quiz operations
pub type TriviaResult<T> = Result<T, TriviaError>;
