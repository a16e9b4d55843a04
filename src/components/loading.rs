//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-8">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for the project grid
#[component]
pub fn CardSkeleton(
    #[prop(default = 4)]
    count: usize,
) -> impl IntoView {
    view! {
        {(0..count).map(|_| view! {
            <div class="project-card animate-pulse">
                <div class="h-5 bg-gray-700 rounded w-1/2 mb-4" />
                <div class="h-3 bg-gray-700 rounded w-full mb-2" />
                <div class="h-3 bg-gray-700 rounded w-2/3" />
            </div>
        }).collect_view()}
    }
}
