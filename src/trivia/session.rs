//! Quiz session state machine

use super::error::{TriviaError, TriviaResult};
use super::question::{QuizQuestion, QUESTIONS};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        current_index: usize,
        score: usize,
        selected: Option<usize>,
    },
    Finished {
        score: usize,
    },
}

impl QuizState {
    const INITIAL: QuizState = QuizState::InProgress {
        current_index: 0,
        score: 0,
        selected: None,
    };
}

/// What `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Nothing selected yet, the session is unchanged
    NoSelection,
    /// Moved on to the question at this index
    Next { index: usize },
    /// Last question answered
    Finished { score: usize },
}

/// One opening of the quiz modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    state: QuizState,
}

impl QuizSession {
    /// Start a session over the given questions
    pub fn new(questions: &'static [QuizQuestion]) -> TriviaResult<Self> {
        if questions.is_empty() {
            return Err(TriviaError::NoQuestions);
        }
        Ok(Self {
            questions,
            state: QuizState::INITIAL,
        })
    }

    /// Start a session over the built-in questions
    pub fn builtin() -> Self {
        Self {
            questions: &QUESTIONS,
            state: QuizState::INITIAL,
        }
    }

    /// Tentatively choose an option for the current question
    pub fn select(&mut self, option: usize) -> TriviaResult<()> {
        let available = self.current_question().options.len();
        match &mut self.state {
            QuizState::Finished { .. } => Err(TriviaError::AlreadyFinished),
            QuizState::InProgress { .. } if option >= available => {
                Err(TriviaError::OptionOutOfRange { option, available })
            }
            QuizState::InProgress { selected, .. } => {
                *selected = Some(option);
                Ok(())
            }
        }
    }

    /// Lock in the selection and move to the next question, or finish
    pub fn advance(&mut self) -> TriviaResult<Advance> {
        let last_index = self.questions.len() - 1;
        let (current_index, score, option) = match self.state {
            QuizState::Finished { .. } => return Err(TriviaError::AlreadyFinished),
            QuizState::InProgress { selected: None, .. } => return Ok(Advance::NoSelection),
            QuizState::InProgress {
                current_index,
                score,
                selected: Some(option),
            } => (current_index, score, option),
        };

        let score = if self.questions[current_index].is_correct(option) {
            score + 1
        } else {
            score
        };

        if current_index == last_index {
            tracing::debug!(score, total = self.questions.len(), "Quiz finished");
            self.state = QuizState::Finished { score };
            Ok(Advance::Finished { score })
        } else {
            let index = current_index + 1;
            self.state = QuizState::InProgress {
                current_index: index,
                score,
                selected: None,
            };
            Ok(Advance::Next { index })
        }
    }

    /// Back to the first question with no score, from any state
    pub fn restart(&mut self) {
        self.state = QuizState::INITIAL;
    }

    /// End the session; nothing is kept
    pub fn close(self) {}

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question on screen; the last one once finished
    pub fn current_index(&self) -> usize {
        match self.state {
            QuizState::InProgress { current_index, .. } => current_index,
            QuizState::Finished { .. } => self.questions.len() - 1,
        }
    }

    pub fn current_question(&self) -> &'static QuizQuestion {
        &self.questions[self.current_index()]
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::InProgress { score, .. } | QuizState::Finished { score } => score,
        }
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { selected, .. } => selected,
            QuizState::Finished { .. } => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished { .. })
    }

    /// Whether advancing from here finishes the quiz ("Finish" vs "Next")
    pub fn is_last_question(&self) -> bool {
        self.current_index() + 1 == self.questions.len()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::builtin()
    }
}
