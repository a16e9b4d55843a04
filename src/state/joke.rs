//! Joke Session
//!
//! State machine for the typewriter joke reveal. The session owns the current
//! joke, the pending timer handles, and a generation counter; `request_joke`
//! and `cancel` are the only mutators, so there is no free-floating module
//! state and at most one typing sequence is ever live.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api;
use crate::state::global::{Burst, GlobalState, JokeRecord, Severity};

/// Delay between revealed characters.
pub const CHAR_DELAY_MS: u32 = 50;
/// Dwell between the setup and the punchline.
pub const PUNCHLINE_PAUSE_MS: u32 = 1000;
/// Delay before the celebratory particle burst once the joke is displayed.
pub const BURST_DELAY_MS: u32 = 500;
/// How long a reaction button wears its animation class.
const REACTION_ANIM_MS: u32 = 600;

/// Phases of the joke reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JokePhase {
    Idle,
    Loading,
    TypingSetup,
    Pausing,
    TypingPunchline,
    Displayed,
}

/// Fire-and-forget reader reaction to the current joke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    Laugh,
    Meh,
    Groan,
}

impl Reaction {
    pub fn message(self) -> &'static str {
        match self {
            Reaction::Laugh => "😂 ROFL! That was hilarious!",
            Reaction::Meh => "😐 Meh... Not my favorite",
            Reaction::Groan => "😩 Facepalm... That hurt!",
        }
    }

    pub fn emojis(self) -> &'static [&'static str] {
        match self {
            Reaction::Laugh => &["😂", "🤣", "😄", "😆"],
            Reaction::Meh => &["😐", "😕", "🤔"],
            Reaction::Groan => &["😩", "🤦", "😫", "😖"],
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Reaction::Laugh => "laugh",
            Reaction::Meh => "meh",
            Reaction::Groan => "groan",
        }
    }
}

/// One scheduled step of the reveal
#[derive(Clone, Debug, PartialEq)]
pub enum TypingStep {
    SetupChar(char),
    SetupDone,
    PunchlineStart,
    PunchlineChar(char),
    Finished(String),
    Burst,
}

/// Lay out the full reveal as (offset-ms, step) pairs.
///
/// Setup characters land every `CHAR_DELAY_MS`, the punchline starts after a
/// `PUNCHLINE_PAUSE_MS` dwell, and the particle burst trails the finished
/// display by `BURST_DELAY_MS`.
pub fn typing_plan(joke: &JokeRecord) -> Vec<(u32, TypingStep)> {
    let mut steps = Vec::new();
    let mut at = 0u32;

    for c in joke.setup.chars() {
        steps.push((at, TypingStep::SetupChar(c)));
        at += CHAR_DELAY_MS;
    }
    steps.push((at, TypingStep::SetupDone));

    at += PUNCHLINE_PAUSE_MS;
    steps.push((at, TypingStep::PunchlineStart));
    for c in joke.punchline.chars() {
        steps.push((at, TypingStep::PunchlineChar(c)));
        at += CHAR_DELAY_MS;
    }

    let label = format!("Category: {}", capitalize(&joke.category));
    steps.push((at, TypingStep::Finished(label)));
    steps.push((at + BURST_DELAY_MS, TypingStep::Burst));

    steps
}

/// Uppercase the first character, e.g. `"pun"` → `"Pun"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The joke session: fetches jokes and drives the cancellable typing sequence
#[derive(Clone)]
pub struct JokeSession {
    pub phase: RwSignal<JokePhase>,
    pub current: RwSignal<Option<JokeRecord>>,
    pub categories: RwSignal<Vec<String>>,
    /// Empty string means "any category"
    pub selected_category: RwSignal<String>,
    pub setup_text: RwSignal<String>,
    pub punchline_text: RwSignal<String>,
    pub category_label: RwSignal<String>,
    pub active_reaction: RwSignal<Option<Reaction>>,
    /// Outstanding timer handles; dropping a handle cancels its timer
    timers: Rc<RefCell<Vec<Timeout>>>,
    /// Bumped on cancel so a timer already past the handle list is ignored
    generation: Rc<Cell<u64>>,
}

/// Provide a joke session to the component tree
pub fn provide_joke_session() {
    provide_context(JokeSession::new());
}

impl Default for JokeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JokeSession {
    pub fn new() -> Self {
        Self {
            phase: create_rw_signal(JokePhase::Idle),
            current: create_rw_signal(None),
            categories: create_rw_signal(Vec::new()),
            selected_category: create_rw_signal(String::new()),
            setup_text: create_rw_signal(String::new()),
            punchline_text: create_rw_signal(String::new()),
            category_label: create_rw_signal(String::new()),
            active_reaction: create_rw_signal(None),
            timers: Rc::new(RefCell::new(Vec::new())),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Cancel every pending typing timer from the active sequence.
    ///
    /// Characters already revealed stay on screen; the next sequence clears
    /// the text before it starts.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
        self.timers.borrow_mut().clear();
    }

    /// Populate the category selector, then load the first joke.
    pub fn init(&self, state: &GlobalState) {
        let session = self.clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_joke_categories().await {
                Ok(categories) => session.categories.set(categories),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error initializing joke section: {}", e).into(),
                    );
                }
            }
            session.request_joke(&state);
        });
    }

    /// Fetch the next joke for the selected category and run the reveal.
    pub fn request_joke(&self, state: &GlobalState) {
        self.cancel();
        self.phase.set(JokePhase::Loading);

        let session = self.clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let selected = session.selected_category.get_untracked();
            let category = (!selected.is_empty()).then_some(selected);

            match api::fetch_joke(category.as_deref()).await {
                Ok(joke) => {
                    session.current.set(Some(joke.clone()));
                    session.run_typing(&joke, &state);
                    state.show_notice("🤣 New joke loaded!", Severity::Success);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching joke: {}", e).into());
                    session.phase.set(JokePhase::Idle);
                    state.show_notice("❌ Failed to load joke", Severity::Error);
                }
            }
        });
    }

    /// Schedule the whole typing plan as cancellable timers.
    fn run_typing(&self, joke: &JokeRecord, state: &GlobalState) {
        self.setup_text.set(String::new());
        self.punchline_text.set(String::new());
        self.category_label.set(String::new());
        self.phase.set(JokePhase::TypingSetup);

        let generation = self.generation.get();
        let mut timers = self.timers.borrow_mut();
        for (at, step) in typing_plan(joke) {
            let session = self.clone();
            let state = state.clone();
            timers.push(Timeout::new(at, move || {
                if session.generation.get() == generation {
                    session.apply(step, &state);
                }
            }));
        }
    }

    fn apply(&self, step: TypingStep, state: &GlobalState) {
        match step {
            TypingStep::SetupChar(c) => self.setup_text.update(|t| t.push(c)),
            TypingStep::SetupDone => self.phase.set(JokePhase::Pausing),
            TypingStep::PunchlineStart => self.phase.set(JokePhase::TypingPunchline),
            TypingStep::PunchlineChar(c) => self.punchline_text.update(|t| t.push(c)),
            TypingStep::Finished(label) => {
                self.category_label.set(label);
                self.phase.set(JokePhase::Displayed);
            }
            TypingStep::Burst => state.spawn_burst(Burst::Joke),
        }
    }

    /// React to the current joke. No effect while no joke is displayed.
    pub fn react(&self, reaction: Reaction, state: &GlobalState) {
        if self.current.get_untracked().is_none() {
            return;
        }

        self.active_reaction.set(Some(reaction));
        let active = self.active_reaction;
        Timeout::new(REACTION_ANIM_MS, move || {
            if active.get_untracked() == Some(reaction) {
                active.set(None);
            }
        })
        .forget();

        state.show_notice(reaction.message(), Severity::Info);
        state.spawn_burst(Burst::Reaction(reaction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_joke() -> JokeRecord {
        JokeRecord {
            setup: "Why did the developer go broke?".to_string(),
            punchline: "Because he used up all his cache!".to_string(),
            category: "programming".to_string(),
        }
    }

    #[test]
    fn test_plan_reveals_every_character() {
        let joke = sample_joke();
        let plan = typing_plan(&joke);

        let setup: String = plan
            .iter()
            .filter_map(|(_, step)| match step {
                TypingStep::SetupChar(c) => Some(*c),
                _ => None,
            })
            .collect();
        let punchline: String = plan
            .iter()
            .filter_map(|(_, step)| match step {
                TypingStep::PunchlineChar(c) => Some(*c),
                _ => None,
            })
            .collect();

        assert_eq!(setup, joke.setup);
        assert_eq!(punchline, joke.punchline);
    }

    #[test]
    fn test_plan_offsets_are_monotonic() {
        let plan = typing_plan(&sample_joke());
        for pair in plan.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
        }
    }

    #[test]
    fn test_plan_pause_and_burst_delays() {
        let joke = sample_joke();
        let plan = typing_plan(&joke);

        let setup_done = plan
            .iter()
            .find(|(_, s)| *s == TypingStep::SetupDone)
            .unwrap()
            .0;
        let punchline_start = plan
            .iter()
            .find(|(_, s)| *s == TypingStep::PunchlineStart)
            .unwrap()
            .0;
        assert_eq!(setup_done, joke.setup.chars().count() as u32 * CHAR_DELAY_MS);
        assert_eq!(punchline_start, setup_done + PUNCHLINE_PAUSE_MS);

        let finished = plan
            .iter()
            .find_map(|(at, s)| matches!(s, TypingStep::Finished(_)).then_some(*at))
            .unwrap();
        let burst = plan.iter().find(|(_, s)| *s == TypingStep::Burst).unwrap().0;
        assert_eq!(burst, finished + BURST_DELAY_MS);
    }

    #[test]
    fn test_plan_capitalizes_category_label() {
        let plan = typing_plan(&sample_joke());
        let label = plan
            .iter()
            .find_map(|(_, s)| match s {
                TypingStep::Finished(label) => Some(label.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(label, "Category: Programming");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pun"), "Pun");
        assert_eq!(capitalize("dad"), "Dad");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_cancel_invalidates_generation_and_drops_timers() {
        let runtime = create_runtime();
        let session = JokeSession::new();

        let before = session.generation();
        session.cancel();
        assert_eq!(session.generation(), before + 1);
        assert_eq!(session.pending_timers(), 0);

        // A second cancel keeps advancing the generation, so steps scheduled
        // under any older generation can never apply.
        session.cancel();
        assert_eq!(session.generation(), before + 2);

        runtime.dispose();
    }

    #[test]
    fn test_reaction_mappings() {
        assert!(Reaction::Laugh.message().contains("hilarious"));
        assert!(!Reaction::Meh.emojis().is_empty());
        assert_eq!(Reaction::Groan.css_class(), "groan");
    }
}
