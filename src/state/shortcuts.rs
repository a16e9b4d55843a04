//! Keyboard Shortcuts
//!
//! Document-level keydown listener: Ctrl+T theme, Ctrl+P particles,
//! Ctrl+A progress replay, Ctrl+J new joke.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::effects;
use crate::state::global::{Burst, GlobalState, Severity};
use crate::state::joke::JokeSession;

/// Install the keyboard shortcut listener.
pub fn init_shortcuts(state: GlobalState, session: JokeSession) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if !evt.ctrl_key() {
            return;
        }
        match evt.key().as_str() {
            "t" => {
                evt.prevent_default();
                state.toggle_theme();
            }
            "p" => {
                evt.prevent_default();
                state.spawn_burst(Burst::Magic);
                state.show_notice("✨ Magic particles created!", Severity::Success);
            }
            "a" => {
                evt.prevent_default();
                effects::replay_progress_animation();
                state.show_notice("Progress bars animated!", Severity::Info);
            }
            "j" => {
                evt.prevent_default();
                session.request_joke(&state);
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    let _ = doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
