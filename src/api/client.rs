//! HTTP API Client
//!
//! Functions for communicating with the showcase REST API.

use gloo_net::http::Request;

use crate::state::global::{JokeRecord, ProjectSummary, StatsSummary};

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "";

const API_BASE_KEY: &str = "showcase_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Joke endpoint for an optional category filter
pub fn joke_url(api_base: &str, category: Option<&str>) -> String {
    match category {
        Some(c) if !c.is_empty() => format!("{}/api/jokes/{}", api_base, c),
        _ => format!("{}/api/joke", api_base),
    }
}

// ============ API Functions ============

/// Fetch summary statistics
pub async fn fetch_stats() -> Result<StatsSummary, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/stats", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the project list
pub async fn fetch_projects() -> Result<Vec<ProjectSummary>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/projects", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the available joke categories
pub async fn fetch_joke_categories() -> Result<Vec<String>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/joke-categories", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    let result: CategoriesResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.categories)
}

/// Fetch one joke, optionally scoped to a category
pub async fn fetch_joke(category: Option<&str>) -> Result<JokeRecord, String> {
    let url = joke_url(&get_api_base(), category);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_url_without_category() {
        assert_eq!(joke_url("", None), "/api/joke");
        assert_eq!(joke_url("", Some("")), "/api/joke");
    }

    #[test]
    fn test_joke_url_with_category() {
        assert_eq!(joke_url("", Some("dad")), "/api/jokes/dad");
        assert_eq!(
            joke_url("http://localhost:8080", Some("pun")),
            "http://localhost:8080/api/jokes/pun"
        );
    }

    #[test]
    fn test_joke_record_deserializes() {
        let json = r#"{
            "setup": "What do you call a fake noodle?",
            "punchline": "An impasta!",
            "category": "food"
        }"#;
        let joke: crate::state::global::JokeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(joke.punchline, "An impasta!");
        assert_eq!(joke.category, "food");
    }

    #[test]
    fn test_categories_response_deserializes() {
        let json = r#"{"categories": ["programming", "food", "pun", "school"]}"#;
        let parsed: CategoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.categories.len(), 4);
    }
}
