//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{NotificationBanner, ParticleLayer};
use crate::pages::Home;
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::joke::{provide_joke_session, JokeSession};
use crate::state::shortcuts::init_shortcuts;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the joke session to all components
    provide_global_state();
    provide_joke_session();

    // Wire up the keyboard shortcuts
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<JokeSession>().expect("JokeSession not found");
    init_shortcuts(state, session);

    view! {
        <Router>
            <div class="app-shell">
                <main>
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Single-slot notification banner
                <NotificationBanner />

                // Decorative particle overlay
                <ParticleLayer />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-icon">"🔍"</div>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="back-link">
                "Back to the showcase"
            </A>
        </div>
    }
}
