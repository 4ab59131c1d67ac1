use serde::{de, Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Canonical movie identifier.
///
/// The data service is loose about representation: catalog keys arrive as
/// JSON object keys (strings) while profile entries may be numbers or
/// strings. Both forms parse into this one numeric type at the serde
/// boundary, and clients always see the id rendered back as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MovieId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MovieIdVisitor;

        impl<'de> de::Visitor<'de> for MovieIdVisitor {
            type Value = MovieId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a movie id as an integer or a string of digits")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<MovieId, E> {
                Ok(MovieId(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<MovieId, E> {
                u64::try_from(value)
                    .map(MovieId)
                    .map_err(|_| E::custom(format!("movie id out of range: {}", value)))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MovieId, E> {
                value
                    .parse::<u64>()
                    .map(MovieId)
                    .map_err(|_| E::custom(format!("invalid movie id: {:?}", value)))
            }
        }

        deserializer.deserialize_any(MovieIdVisitor)
    }
}

/// The stored catalog: one title per movie id.
pub type Catalog = HashMap<MovieId, String>;

/// A catalog entry as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}
