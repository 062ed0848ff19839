//! Shared in-memory hero backend for integration tests.
//!
//! Implements the REST surface the client expects (collection at
//! `/api/heroes`, items at `/api/heroes/{id}`, `id`/`name` query filters)
//! over an in-process store, plus the probes the tests assert on: a request
//! counter, a switchable failure mode, an artificial response delay, and a
//! record of the most recent request line.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use hero_client::{ClientConfig, Hero, NewHero};

/// Backing store plus test probes.
pub struct HeroStore {
    heroes: Mutex<Vec<Hero>>,
    next_id: AtomicU32,
    /// Total requests served, including failing ones.
    pub requests: AtomicUsize,
    /// When set, every route answers 500 before touching the store.
    pub failing: AtomicBool,
    /// Artificial delay applied before answering, in milliseconds.
    pub delay_ms: AtomicU64,
    /// Method and URI of the most recent request.
    pub last_request: Mutex<Option<(String, String)>>,
}

impl HeroStore {
    fn new() -> Self {
        Self {
            heroes: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
            requests: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay_ms: AtomicU64::new(0),
            last_request: Mutex::new(None),
        }
    }
}

/// Handle to a running mock backend.
pub struct MockBackend {
    pub store: Arc<HeroStore>,
    pub addr: SocketAddr,
}

impl MockBackend {
    /// Collection endpoint URL for client configuration.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/heroes", self.addr)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url(),
            request_timeout_secs: 5,
        }
    }

    /// Insert heroes directly into the store, bypassing HTTP.
    pub fn seed(&self, names: &[&str]) -> Vec<Hero> {
        let mut heroes = self.store.heroes.lock().unwrap();
        names
            .iter()
            .map(|name| {
                let id = self.store.next_id.fetch_add(1, Ordering::SeqCst);
                let hero = Hero {
                    id,
                    name: name.to_string(),
                };
                heroes.push(hero.clone());
                hero
            })
            .collect()
    }
}

/// Start a mock backend on an ephemeral port.
pub async fn start_backend() -> MockBackend {
    let store = Arc::new(HeroStore::new());

    let app = Router::new()
        .route("/api/heroes", get(list).post(create).put(update))
        .route("/api/heroes/{id}", get(get_one).delete(remove))
        .layer(middleware::from_fn_with_state(store.clone(), observe))
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { store, addr }
}

/// Record the request, then apply the configured delay and failure mode.
async fn observe(State(store): State<Arc<HeroStore>>, request: Request, next: Next) -> Response {
    store.requests.fetch_add(1, Ordering::SeqCst);
    *store.last_request.lock().unwrap() = Some((
        request.method().to_string(),
        request.uri().to_string(),
    ));

    let delay = store.delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if store.failing.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    next.run(request).await
}

#[derive(Debug, Default, Deserialize)]
struct HeroFilter {
    id: Option<u32>,
    name: Option<String>,
}

async fn list(
    State(store): State<Arc<HeroStore>>,
    Query(filter): Query<HeroFilter>,
) -> Json<Vec<Hero>> {
    let heroes = store.heroes.lock().unwrap();
    let matches = heroes
        .iter()
        .filter(|h| filter.id.map_or(true, |id| h.id == id))
        .filter(|h| {
            filter
                .name
                .as_deref()
                .map_or(true, |n| h.name.to_lowercase().contains(&n.to_lowercase()))
        })
        .cloned()
        .collect();
    Json(matches)
}

async fn get_one(
    State(store): State<Arc<HeroStore>>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    let heroes = store.heroes.lock().unwrap();
    heroes
        .iter()
        .find(|h| h.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(
    State(store): State<Arc<HeroStore>>,
    Json(body): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let id = store.next_id.fetch_add(1, Ordering::SeqCst);
    let hero = Hero {
        id,
        name: body.name,
    };
    store.heroes.lock().unwrap().push(hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn update(
    State(store): State<Arc<HeroStore>>,
    Json(hero): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = store.heroes.lock().unwrap();
    match heroes.iter_mut().find(|h| h.id == hero.id) {
        Some(existing) => {
            existing.name = hero.name.clone();
            Ok(Json(hero))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn remove(
    State(store): State<Arc<HeroStore>>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = store.heroes.lock().unwrap();
    let pos = heroes
        .iter()
        .position(|h| h.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(heroes.remove(pos)))
}
