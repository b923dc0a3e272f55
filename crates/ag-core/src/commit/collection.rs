use std::collections::HashSet;

use super::record::Commit;
use crate::ids::CommitId;

/// Maximum number of commits kept; older ones are evicted from the tail.
pub const MAX_COMMITS: usize = 50;

/// Ordered commit collection, newest first.
///
/// Invariants:
/// - insertion happens at the front
/// - at most [`MAX_COMMITS`] records after any insertion
/// - ids are unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitCollection {
    commits: Vec<Commit>,
}

impl CommitCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps stored records, keeping their order.
    ///
    /// Data written by another front end may break the invariants: only the
    /// first record of each id is kept, then the list is cut to
    /// [`MAX_COMMITS`].
    pub fn from_vec(mut commits: Vec<Commit>) -> Self {
        let mut seen = HashSet::new();
        commits.retain(|commit| seen.insert(commit.id.clone()));
        commits.truncate(MAX_COMMITS);
        Self { commits }
    }

    /// Inserts `commit` at the front and truncates to [`MAX_COMMITS`].
    ///
    /// Returns the evicted records, oldest last.
    pub fn push_front(&mut self, commit: Commit) -> Vec<Commit> {
        self.commits.retain(|existing| existing.id != commit.id);
        self.commits.insert(0, commit);
        if self.commits.len() > MAX_COMMITS {
            self.commits.split_off(MAX_COMMITS)
        } else {
            Vec::new()
        }
    }

    /// Removes every record with `id`, keeping the relative order of the rest.
    ///
    /// Returns the number of removed records (0 or 1 while ids are unique).
    pub fn remove(&mut self, id: &CommitId) -> usize {
        let before = self.commits.len();
        self.commits.retain(|commit| &commit.id != id);
        before - self.commits.len()
    }

    pub fn find(&self, id: &CommitId) -> Option<&Commit> {
        self.commits.iter().find(|commit| &commit.id == id)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Commit> {
        self.commits.iter()
    }

    pub fn as_slice(&self) -> &[Commit] {
        &self.commits
    }

    pub fn into_vec(self) -> Vec<Commit> {
        self.commits
    }
}

impl IntoIterator for CommitCollection {
    type Item = Commit;
    type IntoIter = std::vec::IntoIter<Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.into_iter()
    }
}
