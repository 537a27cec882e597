use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a board cell, supplied by the rendering layer.
///
/// The client never inspects its structure; whatever the click source hands
/// over is carried through to the server unchanged, well-formed or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub String);

impl CellId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
