//! Hero data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hero record as stored by the backend.
///
/// Identity is the server-assigned `id`, unique within the store and
/// immutable once assigned; only `name` changes through updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Payload for creating a hero. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Hero identifier for strong typing.
///
/// Call sites that accept "a hero or its id" take `impl Into<HeroId>`, so a
/// full record and a bare id normalize to the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeroId(pub u32);

impl From<u32> for HeroId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Hero> for HeroId {
    fn from(hero: Hero) -> Self {
        Self(hero.id)
    }
}

impl From<&Hero> for HeroId {
    fn from(hero: &Hero) -> Self {
        Self(hero.id)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
