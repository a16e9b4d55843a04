//! Stat Card Component
//!
//! Displays one summary statistic with a count-up animation.

use leptos::*;

/// Duration of the count-up animation.
pub const COUNT_UP_MS: f64 = 1000.0;

/// Value shown `elapsed_ms` into an easing-free count-up towards `target`.
///
/// Monotonically non-decreasing in `elapsed_ms` and exactly `target` once the
/// window has elapsed.
pub fn count_at(target: i64, elapsed_ms: f64, duration_ms: f64) -> i64 {
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (target as f64 * progress).floor() as i64
}

/// Stat card component
#[component]
pub fn StatCard(
    /// DOM identifier targeted by the stylesheet
    id: &'static str,
    /// Caption under the number
    label: &'static str,
    /// Final value to count up to
    #[prop(into)]
    target: Signal<i64>,
    /// Render the number with a percent suffix
    #[prop(optional)]
    percent: bool,
) -> impl IntoView {
    let (display, set_display) = create_signal(0i64);

    // Restart the count-up whenever a new target lands.
    create_effect(move |_| {
        let target = target.get();
        start_count_up(set_display, target);
    });

    view! {
        <div id=id class="stat-card">
            <div class="stat-number">
                {move || {
                    if percent {
                        format!("{}%", display.get())
                    } else {
                        display.get().to_string()
                    }
                }}
            </div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

fn start_count_up(set_display: WriteSignal<i64>, target: i64) {
    let start = now_ms();
    step_count_up(set_display, target, start);
}

fn step_count_up(set_display: WriteSignal<i64>, target: i64, start: f64) {
    request_animation_frame(move || {
        let elapsed = now_ms() - start;
        set_display.set(count_at(target, elapsed, COUNT_UP_MS));
        if elapsed < COUNT_UP_MS {
            step_count_up(set_display, target, start);
        }
    });
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_starts_at_zero() {
        assert_eq!(count_at(85, 0.0, COUNT_UP_MS), 0);
    }

    #[test]
    fn test_count_is_monotonic() {
        let mut last = 0;
        for elapsed in (0..=1200).step_by(16) {
            let value = count_at(85, elapsed as f64, COUNT_UP_MS);
            assert!(value >= last, "value dipped at {}ms", elapsed);
            last = value;
        }
    }

    #[test]
    fn test_count_reaches_target_at_window_end() {
        assert_eq!(count_at(85, 1000.0, COUNT_UP_MS), 85);
        assert_eq!(count_at(85, 1500.0, COUNT_UP_MS), 85);
        assert_eq!(count_at(0, 1000.0, COUNT_UP_MS), 0);
    }

    #[test]
    fn test_count_is_linear_midway() {
        assert_eq!(count_at(100, 500.0, COUNT_UP_MS), 50);
        assert_eq!(count_at(4, 500.0, COUNT_UP_MS), 2);
    }
}
