//! Notification Banner Component
//!
//! Renders the single notification slot; at most one banner node exists.

use leptos::*;

use crate::state::global::GlobalState;

/// Notification banner, fixed in the top-right corner by the stylesheet
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.notice.get().map(|notice| {
                view! {
                    <div class=format!("notification {}", notice.severity.css_class())>
                        {notice.message}
                    </div>
                }
            })
        }}
    }
}
