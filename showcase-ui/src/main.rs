//! Showcase UI
//!
//! Browser front end for the two prototypes, built with Leptos (WASM).
//!
//! # Features
//!
//! - Art gallery: login/signup, featured works, full grid, detail with similar artworks
//! - Employee portal: remote employee list in table/card/list layouts, validated add form
//! - Transient toast notifications
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. All behavior lives in the
//! `showcase` library; this crate only wires it to signals, timers and the DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
