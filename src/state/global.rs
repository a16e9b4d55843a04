//! Global Application State
//!
//! Reactive state management using Leptos signals.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::joke::Reaction;

/// How long a notification stays on screen.
pub const NOTICE_DISPLAY_MS: u32 = 3000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Summary statistics from the API
    pub stats: RwSignal<Option<StatsSummary>>,
    /// Project list from the API
    pub projects: RwSignal<Vec<ProjectSummary>>,
    /// Set once the progress-bar fills may grow to their target width
    pub bars_armed: RwSignal<bool>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// The single notification slot; a new notice replaces the old one
    pub notice: RwSignal<Option<Notice>>,
    /// Monotonic counter guarding stale auto-dismiss timers
    notice_seq: RwSignal<u64>,
    /// Current color theme
    pub theme: RwSignal<Theme>,
    /// Live decorative particles
    pub particles: RwSignal<Vec<Particle>>,
    particle_seq: RwSignal<u64>,
}

/// Summary statistics from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct StatsSummary {
    pub total_projects: u32,
    pub completed: u32,
    pub average_progress: f64,
}

/// A single project entry from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ProjectSummary {
    pub name: String,
    pub status: String,
    pub progress: u8,
}

/// A joke as served by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct JokeRecord {
    pub setup: String,
    pub punchline: String,
    pub category: String,
}

/// Severity of a notification, mapped to a CSS class only
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A transient notification message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Binary color theme flipped via `data-theme` on `<body>`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

const JOKE_EMOJIS: &[&str] = &["😂", "🤣", "😄", "😆", "🤪"];

/// A particle burst flavor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Burst {
    Magic,
    Joke,
    Reaction(Reaction),
}

impl Burst {
    /// Nodes spawned per burst
    pub fn count(self) -> usize {
        match self {
            Burst::Magic => 20,
            Burst::Joke => 8,
            Burst::Reaction(_) => 6,
        }
    }

    /// Lifetime before the nodes self-remove
    pub fn lifetime_ms(self) -> u32 {
        match self {
            Burst::Magic => 3000,
            Burst::Joke => 2000,
            Burst::Reaction(_) => 1500,
        }
    }

    /// Emoji glyph pool; `None` renders a plain CSS-animated dot
    pub fn glyphs(self) -> Option<&'static [&'static str]> {
        match self {
            Burst::Magic => None,
            Burst::Joke => Some(JOKE_EMOJIS),
            Burst::Reaction(reaction) => Some(reaction.emojis()),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Burst::Magic => "particle",
            Burst::Joke => "particle-emoji joke-float",
            Burst::Reaction(_) => "particle-emoji reaction-burst",
        }
    }
}

/// One short-lived decorative DOM node
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub glyph: Option<&'static str>,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub class: &'static str,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            stats: create_rw_signal(None),
            projects: create_rw_signal(Vec::new()),
            bars_armed: create_rw_signal(false),
            loading: create_rw_signal(false),
            notice: create_rw_signal(None),
            notice_seq: create_rw_signal(0),
            theme: create_rw_signal(Theme::Dark),
            particles: create_rw_signal(Vec::new()),
            particle_seq: create_rw_signal(0),
        }
    }

    /// Show a notification, replacing any current one (auto-clears after timeout)
    pub fn show_notice(&self, message: &str, severity: Severity) {
        let seq = self.push_notice(message, severity);
        let state = self.clone();
        Timeout::new(NOTICE_DISPLAY_MS, move || {
            state.dismiss_notice(seq);
        })
        .forget();
    }

    fn push_notice(&self, message: &str, severity: Severity) -> u64 {
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);
        self.notice.set(Some(Notice {
            message: message.to_string(),
            severity,
        }));
        seq
    }

    /// Clear the notification, unless a newer one has replaced it since
    fn dismiss_notice(&self, seq: u64) {
        if self.notice_seq.get_untracked() == seq {
            self.notice.set(None);
        }
    }

    /// Flip the theme, sync `<body data-theme>`, and confirm with a notification
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        sync_body_theme(next);

        let message = match next {
            Theme::Light => "Switched to light theme!",
            Theme::Dark => "Switched to dark theme!",
        };
        self.show_notice(message, Severity::Success);
    }

    /// Spawn one burst of particles; they self-remove after the burst lifetime
    pub fn spawn_burst(&self, burst: Burst) {
        let mut seq = self.particle_seq.get_untracked();
        let mut batch = Vec::with_capacity(burst.count());

        for _ in 0..burst.count() {
            seq += 1;
            batch.push(Particle {
                id: seq,
                glyph: burst.glyphs().map(random_glyph),
                left_pct: js_sys::Math::random() * 100.0,
                top_pct: js_sys::Math::random() * 100.0,
                delay_s: match burst {
                    Burst::Magic => js_sys::Math::random() * 2.0,
                    _ => 0.0,
                },
                class: burst.css_class(),
            });
        }

        self.particle_seq.set(seq);
        let ids: Vec<u64> = batch.iter().map(|p| p.id).collect();
        self.particles.update(|all| all.extend(batch));

        let particles = self.particles;
        Timeout::new(burst.lifetime_ms(), move || {
            particles.update(|all| all.retain(|p| !ids.contains(&p.id)));
        })
        .forget();
    }
}

fn random_glyph(pool: &'static [&'static str]) -> &'static str {
    let idx = (js_sys::Math::random() * pool.len() as f64) as usize;
    pool[idx.min(pool.len() - 1)]
}

/// Reflect the theme on `<body>`: light sets the attribute, dark removes it
fn sync_body_theme(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        match theme {
            Theme::Light => {
                let _ = body.set_attribute("data-theme", "light");
            }
            Theme::Dark => {
                let _ = body.remove_attribute("data-theme");
            }
        }

        // Transition effect while the background swaps
        let style = body.style();
        let _ = style.set_property("transition", "background-color 0.5s ease");
        Timeout::new(500, move || {
            let _ = style.remove_property("transition");
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_is_idempotent_over_two_calls() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_second_notice_replaces_first() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        let first = state.push_notice("first", Severity::Info);
        let second = state.push_notice("second", Severity::Error);
        assert!(second > first);

        let shown = state.notice.get_untracked().unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.severity, Severity::Error);

        runtime.dispose();
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        let first = state.push_notice("first", Severity::Success);
        let second = state.push_notice("second", Severity::Info);

        state.dismiss_notice(first);
        assert!(state.notice.get_untracked().is_some());

        state.dismiss_notice(second);
        assert!(state.notice.get_untracked().is_none());

        runtime.dispose();
    }

    #[test]
    fn test_burst_parameters() {
        assert_eq!(Burst::Magic.count(), 20);
        assert_eq!(Burst::Magic.lifetime_ms(), 3000);
        assert!(Burst::Magic.glyphs().is_none());

        assert_eq!(Burst::Joke.count(), 8);
        assert_eq!(Burst::Joke.lifetime_ms(), 2000);
        assert_eq!(Burst::Joke.glyphs().unwrap().len(), 5);

        let reaction = Burst::Reaction(Reaction::Groan);
        assert_eq!(reaction.count(), 6);
        assert_eq!(reaction.lifetime_ms(), 1500);
        assert!(!reaction.glyphs().unwrap().is_empty());
    }

    #[test]
    fn test_stats_summary_deserializes() {
        let json = r#"{"total_projects": 4, "completed": 1, "average_progress": 66.2}"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.completed, 1);
        assert!((stats.average_progress - 66.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_project_list_deserializes() {
        let json = r#"[
            {"id": 1, "name": "AI Assistant", "status": "active", "progress": 85},
            {"id": 2, "name": "Web Dashboard", "status": "completed", "progress": 100}
        ]"#;
        let projects: Vec<ProjectSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "AI Assistant");
        assert_eq!(projects[1].progress, 100);
    }
}
