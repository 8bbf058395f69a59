use serde::{Deserialize, Serialize};

/// Maximum number of commits listed in a push notification.
pub const COMMITS_LIMIT: usize = 20;

/// The all-zero sha a hosting provider reports for a ref that does not exist
/// on one side of a push (branch creation or deletion).
pub const EMPTY_SHA: &str = "0000000000000000000000000000000000000000";

pub fn is_empty_sha(sha: &str) -> bool {
    sha == EMPTY_SHA
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    pub author_name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl CommitRecord {
    /// The summary line of the commit message, used verbatim.
    pub fn summary(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }
}

/// Commits of one push, in the order the provider reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitBatch {
    pub commits: Vec<CommitRecord>,
    /// Set when the provider already dropped commits from the payload.
    #[serde(default)]
    pub is_truncated: bool,
}

impl CommitBatch {
    pub fn new(commits: Vec<CommitRecord>) -> Self {
        Self {
            commits,
            is_truncated: false,
        }
    }

    pub fn truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = is_truncated;
        self
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// The commits that get a line of their own.
    pub fn displayed(&self) -> &[CommitRecord] {
        &self.commits[..self.commits.len().min(COMMITS_LIMIT)]
    }

    /// How many commits fall past the display cap.
    pub fn overflow(&self) -> usize {
        self.commits.len().saturating_sub(COMMITS_LIMIT)
    }
}
