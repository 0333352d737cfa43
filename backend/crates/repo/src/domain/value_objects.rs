//! Domain Value Objects

use std::fmt;

/// Repository identifier
///
/// Any integer except zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepoId(i64);

impl RepoId {
    pub fn new(id: i64) -> Option<Self> {
        if id == 0 { None } else { Some(Self(id)) }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RepoId> for i64 {
    fn from(id: RepoId) -> Self {
        id.0
    }
}
