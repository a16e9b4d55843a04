//! Joke Panel Component
//!
//! Category selector, the typewriter joke display, and reaction buttons.

use leptos::*;

use crate::components::Loading;
use crate::state::global::GlobalState;
use crate::state::joke::{capitalize, JokePhase, JokeSession, Reaction};

/// Joke section component
#[component]
pub fn JokePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<JokeSession>().expect("JokeSession not found");

    let phase = session.phase;
    let categories = session.categories;
    let selected_category = session.selected_category;
    let setup_text = session.setup_text;
    let punchline_text = session.punchline_text;
    let category_label = session.category_label;

    let on_category_change = {
        let session = session.clone();
        let state = state.clone();
        move |ev: web_sys::Event| {
            session.selected_category.set(event_target_value(&ev));
            session.request_joke(&state);
        }
    };

    let on_new_joke = {
        let session = session.clone();
        move |_| session.request_joke(&state)
    };

    let setup_class = move || typing_class("joke-setup", phase.get(), TextSlot::Setup);
    let punchline_class = move || typing_class("joke-punchline", phase.get(), TextSlot::Punchline);

    view! {
        <section class="joke-section">
            <h2>"Need a Laugh?"</h2>

            <div class="joke-controls">
                <select
                    id="jokeCategory"
                    on:change=on_category_change
                    prop:value=move || selected_category.get()
                >
                    <option value="">"Any Category"</option>
                    {move || {
                        categories.get().into_iter().map(|category| {
                            view! {
                                <option value=category.clone()>{capitalize(&category)}</option>
                            }
                        }).collect_view()
                    }}
                </select>

                <button
                    class="joke-btn"
                    on:click=on_new_joke
                    disabled=move || phase.get() == JokePhase::Loading
                >
                    {move || {
                        if phase.get() == JokePhase::Loading {
                            "Loading..."
                        } else {
                            "New Joke"
                        }
                    }}
                </button>
            </div>

            <div class="joke-display">
                {move || (phase.get() == JokePhase::Loading).then(|| view! { <Loading /> })}

                <p id="jokeSetup" class=setup_class>
                    {move || setup_text.get()}
                </p>
                <p id="jokePunchline" class=punchline_class>
                    {move || punchline_text.get()}
                </p>
                <p id="jokeCategoryDisplay" class="joke-category">
                    {move || category_label.get()}
                </p>
            </div>

            <div class="joke-reactions">
                <ReactionButton reaction=Reaction::Laugh label="😂" />
                <ReactionButton reaction=Reaction::Meh label="😐" />
                <ReactionButton reaction=Reaction::Groan label="😩" />
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum TextSlot {
    Setup,
    Punchline,
}

/// Typing-state class for a text slot: `typing` while the slot reveals,
/// `typing-done` once it has finished.
fn typing_class(base: &str, phase: JokePhase, slot: TextSlot) -> String {
    let suffix = match (slot, phase) {
        (TextSlot::Setup, JokePhase::TypingSetup) => " typing",
        (TextSlot::Setup, JokePhase::Pausing)
        | (TextSlot::Setup, JokePhase::TypingPunchline)
        | (TextSlot::Setup, JokePhase::Displayed) => " typing-done",
        (TextSlot::Punchline, JokePhase::TypingPunchline) => " typing",
        (TextSlot::Punchline, JokePhase::Displayed) => " typing-done",
        _ => "",
    };
    format!("{}{}", base, suffix)
}

/// One reaction button; wears its animation class while the reaction is active
#[component]
fn ReactionButton(reaction: Reaction, label: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<JokeSession>().expect("JokeSession not found");

    let active = session.active_reaction;
    let on_click = move |_| session.react(reaction, &state);

    view! {
        <button
            class=move || {
                if active.get() == Some(reaction) {
                    format!("reaction-btn reaction-{}", reaction.css_class())
                } else {
                    "reaction-btn".to_string()
                }
            }
            on:click=on_click
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_slot_classes_follow_phase() {
        assert_eq!(
            typing_class("joke-setup", JokePhase::TypingSetup, TextSlot::Setup),
            "joke-setup typing"
        );
        assert_eq!(
            typing_class("joke-setup", JokePhase::Pausing, TextSlot::Setup),
            "joke-setup typing-done"
        );
        assert_eq!(
            typing_class("joke-setup", JokePhase::Idle, TextSlot::Setup),
            "joke-setup"
        );
    }

    #[test]
    fn test_punchline_slot_classes_follow_phase() {
        assert_eq!(
            typing_class("joke-punchline", JokePhase::Pausing, TextSlot::Punchline),
            "joke-punchline"
        );
        assert_eq!(
            typing_class("joke-punchline", JokePhase::TypingPunchline, TextSlot::Punchline),
            "joke-punchline typing"
        );
        assert_eq!(
            typing_class("joke-punchline", JokePhase::Displayed, TextSlot::Punchline),
            "joke-punchline typing-done"
        );
    }
}
