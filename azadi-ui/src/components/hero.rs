//! Hero Section
//!
//! Headline, today's date, the Karachi clock, the three page actions and the
//! flag.

use azadi::page::{self, FLAG_CAPTION, HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE, WISHES_ANCHOR};
use azadi::share::{share_page, ShareOutcome};
use leptos::*;

use crate::platform::{self, BrowserPlatform};
use crate::state::PageState;

/// Hero section component
#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    // Fixed for the lifetime of the page
    let today = page::format_long_date(&chrono::Local::now());

    view! {
        <section class="relative px-6 pt-24 pb-16 md:pt-28 md:pb-24 max-w-6xl mx-auto">
            <div class="grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-extrabold leading-tight fade-up">
                        {HERO_TITLE}
                        <span class="block text-emerald-200">{HERO_SUBTITLE}</span>
                    </h1>
                    <p class="mt-4 text-emerald-100/90 max-w-prose fade-up">
                        "Today " <b>{today}</b> " — " {HERO_TAGLINE}
                    </p>

                    <Actions state=state />

                    // Live clock
                    <div class="mt-4 text-sm text-emerald-200/80 flex items-center gap-2">
                        <span>"🕒"</span>
                        {move || {
                            format!("Karachi Time • {}", page::format_clock(&page::karachi_time(state.now.get())))
                        }}
                    </div>
                </div>

                <Flag />
            </div>
        </section>
    }
}

/// Write wishes / quick quiz / share buttons
#[component]
fn Actions(state: PageState) -> impl IntoView {
    let on_share = move |_| {
        spawn_local(async move {
            let browser = BrowserPlatform::new();
            match share_page(&browser, &platform::page_url()).await {
                Ok(ShareOutcome::Copied) => state.flash_copied(),
                Ok(ShareOutcome::Shared) | Ok(ShareOutcome::Unsupported) => {}
                // Share failures are never shown
                Err(_) => {}
            }
        });
    };

    view! {
        <div class="mt-6 flex flex-wrap gap-3">
            <button
                on:click=move |_| platform::scroll_to(WISHES_ANCHOR)
                class="inline-flex items-center gap-2 rounded-2xl bg-white text-emerald-900 px-5 py-3
                       font-semibold shadow-lg hover:shadow-xl active:scale-[.99]"
            >
                <span>"🤍"</span>
                "Write Wishes"
            </button>
            <button
                on:click=move |_| state.open_quiz()
                class="inline-flex items-center gap-2 rounded-2xl bg-emerald-700/30 border border-emerald-400/40
                       px-5 py-3 font-semibold hover:bg-emerald-700/50 backdrop-blur"
            >
                <span>"🏆"</span>
                "Quick Quiz"
            </button>
            <button
                on:click=on_share
                class="inline-flex items-center gap-2 rounded-2xl bg-emerald-600 px-5 py-3
                       font-semibold hover:bg-emerald-500"
            >
                <span>"🔗"</span>
                "Share"
                {move || {
                    if state.copied.get() {
                        view! { <span class="text-emerald-100">"(Copied!)"</span> }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </button>
        </div>
    }
}

/// Flag with crescent and star, drawn in CSS
#[component]
fn Flag() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="relative mx-auto aspect-[4/3] w-full max-w-[520px] rounded-2xl overflow-hidden shadow-2xl">
                <div class="flag relative h-full w-full bg-emerald-900">
                    <div class="absolute inset-0 w-[25%] bg-white" />
                    <div class="absolute left-1/2 top-1/2 -translate-x-[5%] -translate-y-1/2">
                        <div class="relative w-28 h-28">
                            <div class="absolute inset-0 rounded-full bg-white" />
                            <div class="absolute inset-0 translate-x-3 rounded-full bg-emerald-900" />
                            <div class="absolute left-[56%] top-[14%] text-white text-4xl leading-none">"★"</div>
                        </div>
                    </div>
                </div>
                <div class="absolute inset-0 flag-wave" />
            </div>
            <div class="mt-3 flex items-center gap-2 text-emerald-100/90">
                <span>"🇵🇰"</span>
                {FLAG_CAPTION}
            </div>
        </div>
    }
}
