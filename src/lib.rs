//! Typed CRUD client for a hero REST backend.
//!
//! [`HeroClient`] maps each hero operation to one HTTP call, logs every
//! outcome to a shared [`MessageLog`], and converts transport failures into
//! safe fallback values instead of errors. The backend is expected to be a
//! REST-style store (collection at the base URL, items at `{base}/{id}`,
//! filters in the query string).

pub mod client;
pub mod config;
pub mod error;
pub mod hero;
pub mod messages;

pub use client::HeroClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, TransportError, TransportResult};
pub use hero::{Hero, HeroId, NewHero};
pub use messages::MessageLog;
