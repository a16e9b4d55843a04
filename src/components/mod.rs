//! UI Components
//!
//! Reusable Leptos components for the showcase page.

pub mod banner;
pub mod joke_panel;
pub mod loading;
pub mod particles;
pub mod project_card;
pub mod stat_card;

pub use banner::NotificationBanner;
pub use joke_panel::JokePanel;
pub use loading::Loading;
pub use particles::ParticleLayer;
pub use project_card::ProjectCard;
pub use stat_card::StatCard;
