//! Activities Sign-Up Page
//!
//! Single-page front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with schedule, availability and participants
//! - Sign-up form with a self-hiding status message
//! - Per-participant unregister with confirmation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the activities API over plain HTTP and re-fetches
//! the whole list after every change; the view-model comes from the shared
//! `activities` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
