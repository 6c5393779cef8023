/// Identity type definitions
///
/// A `UserId` is the stable `fs_uniquifier` of an identity row. It can only
/// be produced by the crate itself (registration or a resolved lookup), so
/// every owner-scoped query is tied to a real authenticated identity.

use serde::Serialize;
use std::fmt;

/// Owner key for drafts, pending workouts and workouts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub(crate) fn new(fs_uniquifier: String) -> Self {
        Self(fs_uniquifier)
    }

    /// The raw `fs_uniquifier` value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
