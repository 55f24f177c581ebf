//! Wishes Wall Component
//!
//! Submission form on the left, wishes newest-first on the right.

use azadi::page::{EMPTY_WALL, MESSAGE_PLACEHOLDER, WISHES_ANCHOR};
use azadi::wishes::{Wish, WishDraft, GUEST_NAME};
use chrono::{DateTime, Utc};
use leptos::*;

use crate::state::PageState;

/// Wishes wall section
#[component]
pub fn WishesWall() -> impl IntoView {
    view! {
        <section id=WISHES_ANCHOR class="px-6 py-12 md:py-16 max-w-6xl mx-auto">
            <h2 class="text-2xl md:text-3xl font-bold mb-4 flex items-center gap-2">
                <span>"🤍"</span>
                "Azadi Wishes Wall"
            </h2>
            <div class="grid md:grid-cols-3 gap-6">
                <WishForm />
                <WishList />
            </div>
        </section>
    }
}

/// Name + message form
#[component]
fn WishForm() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    let (name, set_name) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());

    let on_post = move |_| {
        let mut draft = WishDraft::new(name.get_untracked(), message.get_untracked());
        // Blank messages are ignored silently
        if state.submit_wish(&mut draft) {
            set_message.set(draft.message);
        }
    };

    view! {
        <div class="md:col-span-1 rounded-2xl bg-white/5 border border-white/10 p-5 backdrop-blur">
            <label class="text-sm text-emerald-100/90">"Your name"</label>
            <input
                type="text"
                placeholder=GUEST_NAME
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
                class="mt-1 w-full rounded-xl bg-white/10 border border-white/20 px-3 py-2
                       outline-none focus:ring-2 ring-emerald-400"
            />

            <label class="text-sm text-emerald-100/90 mt-4 block">"Message"</label>
            <textarea
                placeholder=MESSAGE_PLACEHOLDER
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
                class="mt-1 w-full rounded-xl bg-white/10 border border-white/20 px-3 py-3 h-28
                       outline-none focus:ring-2 ring-emerald-400"
            />

            <button
                on:click=on_post
                class="mt-3 inline-flex items-center gap-2 rounded-xl bg-white text-emerald-900 px-4 py-2
                       font-semibold shadow hover:shadow-md"
            >
                <span>"➤"</span>
                "Post Wish"
            </button>
        </div>
    }
}

/// The wall itself
///
/// Cards are keyed by wish id, so posting adds one node and the clock tick
/// only rewrites each card's age text.
#[component]
fn WishList() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let has_wishes = move || state.board.with(|board| !board.is_empty());

    view! {
        <div class="md:col-span-2 grid gap-4 max-h-[360px] overflow-auto pr-2">
            <Show
                when=has_wishes
                fallback=|| view! { <div class="text-emerald-100/70">{EMPTY_WALL}</div> }
            >
                <For
                    each=move || state.board.with(|board| board.wishes().to_vec())
                    key=|wish: &Wish| wish.id.clone()
                    children=move |wish: Wish| view! { <WishCard wish=wish now=state.now /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn WishCard(wish: Wish, now: RwSignal<DateTime<Utc>>) -> impl IntoView {
    let author = wish.author.clone();
    let message = wish.message.clone();
    let age = move || wish.age_at(now.get().timestamp_millis()).to_string();

    view! {
        <div class="rounded-2xl bg-white/5 border border-white/10 p-4 fade-up">
            <div class="flex justify-between text-sm">
                <span class="font-semibold text-emerald-200">{author}</span>
                <span class="text-emerald-100/60">{age}</span>
            </div>
            <p class="mt-1 text-emerald-50">{message}</p>
        </div>
    }
}
