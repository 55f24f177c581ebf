//! App Root Component
//!
//! Page layout and the page-level state provider.

use leptos::*;

use azadi::page::FOOTER_CREDIT;

use crate::components::{Hero, QuizModal, Timeline, WishesWall};
use crate::state::{provide_page_state, PageState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide page state to all components
    provide_page_state();

    let state = use_context::<PageState>().expect("PageState not found");
    state.start_clock();

    view! {
        <main class="min-h-screen bg-gradient-to-b from-emerald-700 via-emerald-700 to-emerald-900 text-white relative overflow-hidden">
            <Hero />

            <Timeline />

            <WishesWall />

            <Footer />

            // Quiz modal, mounted only while a session exists
            {move || {
                if state.quiz.with(Option::is_some) {
                    view! { <QuizModal /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </main>
    }
}

/// Footer with credits
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="px-6 py-10 border-t border-white/10 text-center text-emerald-100/80">
            {FOOTER_CREDIT}
        </footer>
    }
}
