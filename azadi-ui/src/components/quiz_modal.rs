//! Quiz Modal Component
//!
//! Renders whatever state the open `QuizSession` is in. Clicking the backdrop
//! or "Close" discards the session.

use azadi::page::QUIZ_OUTRO;
use azadi::trivia::QuizSession;
use leptos::*;

use crate::state::PageState;

/// Quiz modal, mounted while `PageState::quiz` holds a session
#[component]
pub fn QuizModal() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    view! {
        <div class="fixed inset-0 z-50 grid place-items-center px-4">
            <div class="absolute inset-0 bg-black/60" on:click=move |_| state.close_quiz() />
            <div class="relative w-full max-w-lg rounded-2xl bg-emerald-900 border border-white/10 p-6
                        text-white shadow-2xl pop-in">
                <div class="flex items-center justify-between">
                    <h3 class="text-xl font-bold">"Azadi Quick Quiz"</h3>
                    <button
                        on:click=move |_| state.close_quiz()
                        class="rounded-xl px-3 py-1 bg-white/10 hover:bg-white/20"
                    >
                        "Close"
                    </button>
                </div>

                {move || {
                    state.quiz.get().map(|session| {
                        if session.is_finished() {
                            view! { <QuizResult state=state session=session /> }.into_view()
                        } else {
                            view! { <QuizQuestionView state=state session=session /> }.into_view()
                        }
                    })
                }}
            </div>
        </div>
    }
}

/// Current question, its options and the Next/Finish button
#[component]
fn QuizQuestionView(state: PageState, session: QuizSession) -> impl IntoView {
    let question = session.current_question();
    let selected = session.selected_option();
    let advance_label = if session.is_last_question() { "Finish" } else { "Next" };

    view! {
        <div class="mt-4">
            <div class="text-sm text-emerald-200/80">
                {format!("Question {} / {}", session.current_index() + 1, session.total())}
            </div>
            <div class="mt-2 text-lg font-semibold">{question.prompt}</div>

            <div class="mt-3 grid gap-2">
                {question.options.iter().enumerate().map(|(index, option)| {
                    let class = option_class(selected == Some(index));
                    view! {
                        <button
                            on:click=move |_| state.with_quiz(|quiz| {
                                // Indexes come from the question itself
                                let _ = quiz.select(index);
                            })
                            class=class
                        >
                            {*option}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="mt-4 flex items-center justify-between">
                <div class="text-emerald-200/80">{format!("Score: {}", session.score())}</div>
                <button
                    on:click=move |_| state.with_quiz(|quiz| {
                        // Advancing with nothing selected is a no-op
                        let _ = quiz.advance();
                    })
                    class="rounded-xl bg-white text-emerald-900 px-4 py-2 font-semibold"
                >
                    {advance_label}
                </button>
            </div>
        </div>
    }
}

/// Final score with restart/close
#[component]
fn QuizResult(state: PageState, session: QuizSession) -> impl IntoView {
    view! {
        <div class="mt-6 text-center">
            <div class="text-2xl font-bold">
                {format!("Mubarak! Score: {} / {}", session.score(), session.total())}
            </div>
            <p class="mt-2 text-emerald-100/80">{QUIZ_OUTRO}</p>
            <div class="mt-4 flex justify-center gap-2">
                <button
                    on:click=move |_| state.with_quiz(QuizSession::restart)
                    class="rounded-xl bg-white text-emerald-900 px-4 py-2 font-semibold"
                >
                    "Restart"
                </button>
                <button
                    on:click=move |_| state.close_quiz()
                    class="rounded-xl bg-white/10 px-4 py-2"
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "text-left rounded-xl border px-4 py-3 transition bg-white text-emerald-900 border-white"
    } else {
        "text-left rounded-xl border px-4 py-3 transition bg-white/5 border-white/15 hover:bg-white/10"
    }
}
