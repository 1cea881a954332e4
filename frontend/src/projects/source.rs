use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use thiserror::Error;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::models::ProjectRecord;
use crate::config;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectsError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("backend answered {0}")]
    Status(u16),
    #[error("could not decode projects: {0}")]
    Decode(String),
}

/// What the showcase needs from the data layer.
#[derive(Clone, PartialEq)]
pub struct ProjectsState {
    pub data: Rc<Vec<ProjectRecord>>,
    pub loading: bool,
}

thread_local! {
    // One fetch per page load; remounts reuse it.
    static CACHE: RefCell<Option<Rc<Vec<ProjectRecord>>>> = RefCell::new(None);
}

pub fn projects_url(base: &str) -> String {
    format!(
        "{}/rest/v1/projects?select={}&order={}",
        base.trim_end_matches('/'),
        urlencoding::encode("*"),
        urlencoding::encode("id.asc"),
    )
}

/// Decodes the REST payload row by row. A row that can't be read is logged
/// and skipped; only a body that isn't a list fails.
pub fn parse_projects(body: &str) -> Result<Vec<ProjectRecord>, ProjectsError> {
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ProjectsError::Decode(e.to_string()))?;

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(position, row)| match serde_json::from_value::<ProjectRecord>(row) {
            Ok(project) => Some(project),
            Err(e) => {
                log::warn!("skipping unreadable project row {}: {}", position, e);
                None
            }
        })
        .collect())
}

async fn fetch_projects() -> Result<Vec<ProjectRecord>, ProjectsError> {
    let key = config::get_anon_key();
    let response = Request::get(&projects_url(config::get_backend_url()))
        .header("apikey", key)
        .header("Authorization", &format!("Bearer {}", key))
        .send()
        .await
        .map_err(|e| ProjectsError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ProjectsError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProjectsError::Request(e.to_string()))?;
    parse_projects(&body)
}

async fn load_projects() -> Result<Rc<Vec<ProjectRecord>>, ProjectsError> {
    if let Some(cached) = CACHE.with(|cache| cache.borrow().clone()) {
        return Ok(cached);
    }
    match fetch_projects().await {
        Ok(projects) => {
            log::info!("loaded {} projects", projects.len());
            let projects = Rc::new(projects);
            CACHE.with(|cache| *cache.borrow_mut() = Some(projects.clone()));
            Ok(projects)
        }
        Err(e) => {
            log::error!("failed to load projects: {}", e);
            Err(e)
        }
    }
}

/// Read-only view of the project list. Failures degrade to an empty list.
#[hook]
pub fn use_projects() -> ProjectsState {
    let state = use_async_with_options(load_projects(), UseAsyncOptions::enable_auto());

    let data = state.data.clone().unwrap_or_default();
    // Before the first run `loading` is still false; treat that as loading too.
    let loading = state.loading || (state.data.is_none() && state.error.is_none());

    ProjectsState { data, loading }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_the_rest_endpoint() {
        assert_eq!(
            projects_url("https://demo.supabase.co/"),
            "https://demo.supabase.co/rest/v1/projects?select=%2A&order=id.asc"
        );
    }

    #[test]
    fn parses_a_rest_payload() {
        let body = r#"[
            {"id": 1, "title": "Chez Awa", "description": "Restaurant",
             "image": "a.png", "link": "https://awa.example",
             "tech": ["React"], "results": ["+40%"], "content_project_modal": null},
            {"id": "2", "title": "Maison Kente", "description": "Mode",
             "image": "b.png", "link": "https://kente.example"}
        ]"#;
        let projects = parse_projects(body).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].id, "2");
        assert!(projects[1].tech.is_empty());
    }

    #[test]
    fn null_columns_keep_every_row() {
        let body = r#"[
            {"id": 1, "title": "Chez Awa", "description": "Restaurant",
             "image": "a.png", "link": "https://awa.example", "tech": ["React"]},
            {"id": 2, "title": "Maison Kente", "description": "Mode",
             "image": "b.png", "link": null, "tech": ["Vue"]},
            {"id": 3, "title": "Coach Ama", "description": null,
             "image": "c.png", "link": "https://ama.example", "tech": null}
        ]"#;
        let projects = parse_projects(body).unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(projects[1].link.is_empty());
        assert!(projects[2].tech.is_empty());
    }

    #[test]
    fn unreadable_row_is_skipped_not_fatal() {
        let body = r#"[
            {"id": 1, "title": "Chez Awa"},
            {"id": {"nested": true}, "title": "Cassé"},
            {"id": 3, "title": null},
            {"id": "4", "title": "Maison Kente"}
        ]"#;
        let projects = parse_projects(body).unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn non_list_payload_is_a_decode_error() {
        let err = parse_projects(r#"{"message": "JWT expired"}"#).unwrap_err();
        assert!(matches!(err, ProjectsError::Decode(_)));
    }
}
