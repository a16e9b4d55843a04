//! Showcase Dashboard
//!
//! Interactive frontend for the project showcase site, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Animated project statistics and progress bars
//! - Typewriter joke reveal with category filtering and reactions
//! - Particle effects, theme toggling, keyboard shortcuts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the showcase API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    web_sys::console::log_1(
        &"🚀 Showcase dashboard loaded!\n\n\
          Keyboard shortcuts:\n\
          - Ctrl+T: Toggle theme\n\
          - Ctrl+P: Create particles\n\
          - Ctrl+A: Animate progress\n\
          - Ctrl+J: Get random joke"
            .into(),
    );

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
