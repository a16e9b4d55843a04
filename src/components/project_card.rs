//! Project Card Component
//!
//! Displays a single project with its status badge and progress bar.

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::global::{GlobalState, ProjectSummary};

/// How long the click feedback scale lasts.
const CLICK_FEEDBACK_MS: u32 = 150;

/// CSS class for a project status, e.g. `"in progress"` → `"status-in-progress"`.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase().replace(' ', "-"))
}

/// Project card component
#[component]
pub fn ProjectCard(
    /// Project to render
    project: ProjectSummary,
    /// Position in the grid, staggers the entrance animation
    index: usize,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let bars_armed = state.bars_armed;

    let progress = project.progress;
    let badge_class = format!("project-status {}", status_class(&project.status));
    let entrance_delay = format!("animation-delay: {:.1}s", index as f64 * 0.1);

    // Brief scale-down feedback on click
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(card) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = card.style();
        let _ = style.set_property("transform", "scale(0.95)");
        Timeout::new(CLICK_FEEDBACK_MS, move || {
            let _ = style.remove_property("transform");
        })
        .forget();
    };

    view! {
        <div class="project-card" style=entrance_delay on:click=on_click>
            <div class="project-header">
                <h3 class="project-title">{project.name.clone()}</h3>
                <span class=badge_class>{project.status.clone()}</span>
            </div>
            <div class="progress-container">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        data-progress=progress.to_string()
                        style=move || {
                            let width = if bars_armed.get() { progress } else { 0 };
                            format!("width: {}%", width)
                        }
                    />
                </div>
                <div class="progress-text">{format!("{}% Complete", progress)}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_lowercases_and_dashes() {
        assert_eq!(status_class("active"), "status-active");
        assert_eq!(status_class("in-progress"), "status-in-progress");
        assert_eq!(status_class("In Progress"), "status-in-progress");
    }
}
