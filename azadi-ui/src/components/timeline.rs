//! Milestones Timeline

use azadi::page::{Milestone, MILESTONES};
use leptos::*;

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section class="px-6 py-10 md:py-16 max-w-6xl mx-auto">
            <h2 class="text-2xl md:text-3xl font-bold mb-6 flex items-center gap-2">
                <span>"✨"</span>
                "Milestones"
            </h2>
            <div class="grid md:grid-cols-4 gap-4 md:gap-6">
                {MILESTONES.iter().map(|milestone| view! { <MilestoneCard milestone=*milestone /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn MilestoneCard(milestone: Milestone) -> impl IntoView {
    view! {
        <div class="rounded-2xl bg-white/5 border border-white/10 p-5 backdrop-blur shadow fade-up">
            <div class="text-emerald-300 text-sm font-semibold">{milestone.year}</div>
            <div class="text-lg font-semibold mt-1">{milestone.title}</div>
            <p class="text-emerald-100/80 text-sm mt-1">{milestone.text}</p>
        </div>
    }
}
