//! Particle Layer Component
//!
//! Renders the live decorative particles into the overlay container.

use leptos::*;

use crate::state::global::GlobalState;

/// Fixed overlay holding every live particle
#[component]
pub fn ParticleLayer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div id="particles-container" class="particles-container">
            {move || {
                state.particles.get().into_iter().map(|particle| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
                        particle.left_pct, particle.top_pct, particle.delay_s,
                    );
                    view! {
                        <div class=particle.class style=style>
                            {particle.glyph.unwrap_or_default()}
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
