//! Azadi Page
//!
//! Independence Day celebration page built with Leptos (WASM).
//!
//! # Features
//!
//! - Hero with today's date and a live Karachi clock
//! - Milestones timeline
//! - Wishes wall kept in the browser's local storage
//! - Quick quiz modal
//! - Share sheet with clipboard fallback
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The wall and quiz transitions come from the `azadi` crate; this
//! crate only wires them to signals and browser APIs.

use leptos::*;

mod app;
mod components;
mod platform;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
