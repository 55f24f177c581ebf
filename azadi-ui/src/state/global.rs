//! Page State
//!
//! Reactive wrappers around the wishes board and the quiz session. All
//! transitions happen in the `azadi` types; signals only notify the view.

use azadi::share::COPIED_FLASH_MS;
use azadi::trivia::QuizSession;
use azadi::wishes::{WishBoard, WishDraft};
use chrono::{DateTime, Utc};
use leptos::*;

use super::storage::LocalStore;

/// Clock tick, also refreshes the wish ages
const CLOCK_TICK_MS: u32 = 1000;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct PageState {
    /// Wishes wall mirrored into local storage
    pub board: RwSignal<WishBoard<LocalStore>>,
    /// Open quiz, `None` while the modal is closed
    pub quiz: RwSignal<Option<QuizSession>>,
    /// "Copied!" acknowledgment after a clipboard share
    pub copied: RwSignal<bool>,
    /// Current time, ticking once a second
    pub now: RwSignal<DateTime<Utc>>,
}

/// Provide page state to the component tree
///
/// Loads the wishes wall once, before anything renders it.
pub fn provide_page_state() {
    let state = PageState {
        board: create_rw_signal(WishBoard::load(LocalStore::new())),
        quiz: create_rw_signal(None),
        copied: create_rw_signal(false),
        now: create_rw_signal(Utc::now()),
    };

    provide_context(state);
}

impl PageState {
    /// Post the form contents; clears the message on success
    pub fn submit_wish(&self, draft: &mut WishDraft) -> bool {
        let mut posted = false;
        self.board.update(|board| posted = board.submit_draft(draft));
        posted
    }

    /// Open the quiz modal with a fresh session
    pub fn open_quiz(&self) {
        self.quiz.set(Some(QuizSession::builtin()));
    }

    /// Close the quiz modal, discarding the session
    pub fn close_quiz(&self) {
        self.quiz.update(|quiz| {
            if let Some(session) = quiz.take() {
                session.close();
            }
        });
    }

    /// Apply a transition to the open quiz, if any
    pub fn with_quiz(&self, f: impl FnOnce(&mut QuizSession)) {
        self.quiz.update(|quiz| {
            if let Some(session) = quiz.as_mut() {
                f(session);
            }
        });
    }

    /// Show the copied acknowledgment (auto-clears after timeout)
    pub fn flash_copied(&self) {
        self.copied.set(true);

        let copied_signal = self.copied;
        gloo_timers::callback::Timeout::new(COPIED_FLASH_MS, move || {
            copied_signal.set(false);
        })
        .forget();
    }

    /// Tick `now` every second until the page goes away
    pub fn start_clock(&self) {
        let now_signal = self.now;
        let interval = gloo_timers::callback::Interval::new(CLOCK_TICK_MS, move || {
            now_signal.set(Utc::now());
        });

        on_cleanup(move || drop(interval));
    }
}
