//! Stand-in for the public films API, used by tests and local runs.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    pub episode_id: i64,
    pub title: String,
    pub opening_crawl: String,
    pub director: String,
    pub release_date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilmsPage {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Film>,
}

/// How `GET /films` misbehaves, if at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// Answer with this status and a short text body.
    Status(u16),
    /// Answer 200 with a body that is not a films envelope.
    Malformed,
}

#[derive(Debug)]
pub struct Catalog {
    pub films: Vec<Film>,
    pub failure: Option<Failure>,
}

pub type Db = Arc<RwLock<Catalog>>;

fn film(episode_id: i64, title: &str, opening_crawl: &str, director: &str, release_date: &str) -> Film {
    Film {
        episode_id,
        title: title.to_string(),
        opening_crawl: opening_crawl.to_string(),
        director: director.to_string(),
        release_date: release_date.to_string(),
    }
}

/// The six films, in the order the public API lists them.
pub fn fixture() -> Vec<Film> {
    vec![
        film(4, "A New Hope", "It is a period of civil war.", "George Lucas", "1977-05-25"),
        film(5, "The Empire Strikes Back", "It is a dark time for the Rebellion.", "Irvin Kershner", "1980-05-17"),
        film(6, "Return of the Jedi", "Luke Skywalker has returned to his home planet of Tatooine.", "Richard Marquand", "1983-05-25"),
        film(1, "The Phantom Menace", "Turmoil has engulfed the Galactic Republic.", "George Lucas", "1999-05-19"),
        film(2, "Attack of the Clones", "There is unrest in the Galactic Senate.", "George Lucas", "2002-05-16"),
        film(3, "Revenge of the Sith", "War! The Republic is crumbling under attacks by the ruthless Sith Lord, Count Dooku.", "George Lucas", "2005-05-19"),
    ]
}

pub fn app() -> Router {
    app_with(fixture(), None)
}

pub fn app_with(films: Vec<Film>, failure: Option<Failure>) -> Router {
    let db: Db = Arc::new(RwLock::new(Catalog { films, failure }));
    router(db)
}

pub fn router(db: Db) -> Router {
    Router::new().route("/films", get(list_films)).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db)).await
}

async fn list_films(State(db): State<Db>) -> Response {
    let catalog = db.read().await;
    match &catalog.failure {
        Some(Failure::Status(code)) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            tracing::debug!(%status, "failing films request");
            (status, "request failed").into_response()
        }
        Some(Failure::Malformed) => (StatusCode::OK, "{\"results\": [").into_response(),
        None => Json(FilmsPage {
            count: catalog.films.len(),
            next: None,
            previous: None,
            results: catalog.films.clone(),
        })
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_lists_six_films_in_release_order() {
        let films = fixture();
        assert_eq!(films.len(), 6);
        assert_eq!(films[0].episode_id, 4);
        assert_eq!(films[0].title, "A New Hope");
        assert!(films.windows(2).all(|w| w[0].release_date < w[1].release_date));
    }

    #[test]
    fn film_serializes_with_api_field_names() {
        let json = serde_json::to_value(&fixture()[0]).unwrap();
        assert_eq!(json["episode_id"], 4);
        assert_eq!(json["opening_crawl"], "It is a period of civil war.");
        assert_eq!(json["release_date"], "1977-05-25");
    }

    #[test]
    fn page_serializes_null_paging_links() {
        let page = FilmsPage {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json["next"].is_null());
        assert_eq!(json["results"], serde_json::json!([]));
    }
}
