//! Hero CRUD client.
//!
//! # Responsibilities
//! - Translate hero operations into HTTP calls against the collection endpoint
//! - Log every outcome to the shared [`MessageLog`]
//! - Normalize transport failures into safe fallback values
//!
//! # Design Decisions
//! - Operation methods never return an error. Every transport failure is
//!   intercepted by one helper ([`HeroClient::recover`]) that emits a
//!   `tracing` diagnostic, appends `"<operation> failed: <detail>"` to the
//!   message log, and substitutes the per-call fallback. Consumers see "no
//!   results" instead of an error state.
//! - The returned futures are cold: no request is issued until polled, and
//!   dropping one before completion aborts the in-flight HTTP call and
//!   produces no log entries.

use std::future::Future;
use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError, TransportResult};
use crate::hero::{Hero, HeroId, NewHero};
use crate::messages::MessageLog;

/// Typed client for a hero REST backend.
///
/// Holds no per-entity state; each call is an independent one-shot
/// request/response with no retries. Cloning is cheap and clones share the
/// connection pool and message log.
#[derive(Debug, Clone)]
pub struct HeroClient {
    http: reqwest::Client,
    base_url: Url,
    messages: MessageLog,
}

impl HeroClient {
    /// Build a client from configuration, logging into `messages`.
    pub fn new(config: &ClientConfig, messages: MessageLog) -> Result<Self, ClientError> {
        let base_url: Url = config.base_url.parse().map_err(|source| {
            ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            }
        })?;
        // Item endpoints extend the base with an id segment, which opaque
        // URLs (mailto:, data:) cannot hold.
        if base_url.cannot_be_a_base() {
            return Err(ClientError::OpaqueBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            messages,
        })
    }

    /// Fetch all heroes. Yields an empty list on failure.
    pub async fn heroes(&self) -> Vec<Hero> {
        self.recover("get heroes", Vec::new(), async {
            let heroes: Vec<Hero> = self.get_json(self.base_url.clone()).await?;
            self.log("fetched heroes");
            Ok(heroes)
        })
        .await
    }

    /// Fetch one hero by id via `GET {base}/{id}`.
    ///
    /// A missing id surfaces as `None` exactly like any other transport
    /// failure; use [`hero_lenient`](Self::hero_lenient) to tell a miss
    /// apart from a failed call.
    pub async fn hero(&self, id: u32) -> Option<Hero> {
        let operation = format!("get hero id={id}");
        let url = self.item_url(HeroId(id));
        self.recover(&operation, None, async {
            let hero: Hero = self.get_json(url).await?;
            self.log(format!("fetched hero id={id}"));
            Ok(Some(hero))
        })
        .await
    }

    /// Fetch one hero by id via the query filter `GET {base}?id={id}`.
    ///
    /// The backend answers a non-matching filter with an empty list, so a
    /// miss is `None` by construction rather than an error.
    pub async fn hero_lenient(&self, id: u32) -> Option<Hero> {
        let operation = format!("get hero id={id}");
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("id", &id.to_string());
        self.recover(&operation, None, async {
            let matches: Vec<Hero> = self.get_json(url).await?;
            let hero = matches.into_iter().next();
            let outcome = if hero.is_some() {
                "fetched"
            } else {
                "did not find"
            };
            self.log(format!("{outcome} hero id={id}"));
            Ok(hero)
        })
        .await
    }

    /// Create a hero; the backend assigns the id. Yields the stored record.
    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        self.recover("add hero", None, async {
            let response = self
                .http
                .post(self.base_url.clone())
                .json(&hero)
                .send()
                .await?;
            let hero: Hero = decode(&self.base_url, response).await?;
            self.log(format!("added hero w/ id={}", hero.id));
            Ok(Some(hero))
        })
        .await
    }

    /// Replace a hero's record via `PUT {base}`.
    ///
    /// Durability across a backend reload is the store's concern; within a
    /// session subsequent reads observe the new name.
    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        let id = hero.id;
        self.recover("update hero", None, async move {
            let response = self
                .http
                .put(self.base_url.clone())
                .json(hero)
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    status,
                    url: self.base_url.to_string(),
                });
            }
            self.log(format!("updated hero id={id}"));
            Ok(Some(()))
        })
        .await
    }

    /// Delete a hero, given either the full record or a bare id.
    pub async fn delete_hero(&self, hero: impl Into<HeroId>) -> Option<Hero> {
        let id = hero.into();
        let url = self.item_url(id);
        self.recover("delete hero", None, async {
            let response = self
                .http
                .delete(url.clone())
                .header(header::CONTENT_TYPE, "application/json")
                .send()
                .await?;
            let hero: Hero = decode(&url, response).await?;
            self.log(format!("deleted hero id={id}"));
            Ok(Some(hero))
        })
        .await
    }

    /// Search heroes whose name matches `term` via `GET {base}?name={term}`.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        // Blank queries resolve locally: no round-trip, no log entry.
        if term.trim().is_empty() {
            return Vec::new();
        }
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("name", term);
        self.recover("search heroes", Vec::new(), async {
            let heroes: Vec<Hero> = self.get_json(url).await?;
            self.log(format!("found heroes matching '{term}'"));
            Ok(heroes)
        })
        .await
    }

    /// Run `call`, converting any failure into `fallback`.
    ///
    /// The uniform error policy: failures are written to the diagnostic
    /// channel, logged as `"<operation> failed: <detail>"`, and replaced by
    /// the fallback so the caller never observes an error.
    async fn recover<T>(
        &self,
        operation: &str,
        fallback: T,
        call: impl Future<Output = TransportResult<T>>,
    ) -> T {
        match call.await {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(operation, error = %err, "transport call failed");
                self.log(format!("{operation} failed: {err}"));
                fallback
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> TransportResult<T> {
        let response = self.http.get(url.clone()).send().await?;
        decode(&url, response).await
    }

    /// Item endpoint for one hero: `{base}/{id}`.
    fn item_url(&self, id: HeroId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            // pop_if_empty keeps a trailing-slash base from producing "//".
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }

    fn log(&self, message: impl AsRef<str>) {
        self.messages.add(format!("HeroClient: {}", message.as_ref()));
    }
}

/// Check the status and decode the JSON body.
async fn decode<T: DeserializeOwned>(
    url: &Url,
    response: reqwest::Response,
) -> TransportResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            status,
            url: url.to_string(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|source| TransportError::Decode {
            url: url.to_string(),
            source,
        })
}
