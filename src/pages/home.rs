//! Home Page
//!
//! The showcase landing page: stats overview, project grid, and joke section.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api;
use crate::components::loading::CardSkeleton;
use crate::components::{JokePanel, ProjectCard, StatCard};
use crate::state::effects;
use crate::state::global::GlobalState;
use crate::state::joke::JokeSession;

/// Cards render first, then the fill bars arm.
const BAR_ARM_DELAY_MS: u32 = 500;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<JokeSession>().expect("JokeSession not found");

    // Five initializers race independently on mount; no mutual ordering.
    let state_for_effect = state.clone();
    let session_for_effect = session.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        load_stats(state.clone());
        load_projects(state.clone());
        effects::setup_scroll_animations();
        effects::setup_intersection_observer();
        session_for_effect.init(&state);
    });

    let stats = state.stats;
    let projects = state.projects;
    let loading = state.loading;

    view! {
        <div class="home">
            <header class="header">
                <h1>"Project Showcase"</h1>
                <p class="tagline">"What we're building, and a joke on the house"</p>
            </header>

            <section class="stats-section">
                <div class="stats-grid">
                    <StatCard
                        id="totalProjects"
                        label="Total Projects"
                        target=Signal::derive(move || {
                            stats.get().map(|s| s.total_projects as i64).unwrap_or(0)
                        })
                    />
                    <StatCard
                        id="completedProjects"
                        label="Completed"
                        target=Signal::derive(move || {
                            stats.get().map(|s| s.completed as i64).unwrap_or(0)
                        })
                    />
                    <StatCard
                        id="avgProgress"
                        label="Avg Progress"
                        percent=true
                        target=Signal::derive(move || {
                            stats.get().map(|s| s.average_progress.round() as i64).unwrap_or(0)
                        })
                    />
                </div>
            </section>

            <section class="projects-section">
                <h2>"Projects"</h2>
                <div id="projectsGrid" class="projects-grid">
                    {move || {
                        let list = projects.get();
                        if list.is_empty() && loading.get() {
                            view! { <CardSkeleton /> }.into_view()
                        } else {
                            list.into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectCard project=project index=index /> }
                                })
                                .collect_view()
                        }
                    }}
                </div>
            </section>

            <JokePanel />

            <button class="back-to-top" on:click=move |_| effects::scroll_to_top()>
                "↑ Top"
            </button>
        </div>
    }
}

/// Load statistics from the API; failures stay on the console.
fn load_stats(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_stats().await {
            Ok(stats) => state.stats.set(Some(stats)),
            Err(e) => {
                web_sys::console::error_1(&format!("Error loading stats: {}", e).into());
            }
        }
    });
}

/// Load the project list from the API; failures stay on the console.
fn load_projects(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        match api::fetch_projects().await {
            Ok(projects) => {
                state.projects.set(projects);

                // Arm the fill bars and the fade-in observer once the cards
                // have rendered.
                let bars = state.bars_armed;
                Timeout::new(BAR_ARM_DELAY_MS, move || {
                    bars.set(true);
                    effects::observe_project_cards();
                })
                .forget();
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error loading projects: {}", e).into());
            }
        }
        state.loading.set(false);
    });
}
