use std::fmt;

use serde::{Deserialize, Serialize};

use crate::commit::{is_empty_sha, CommitBatch};
use crate::error::NotifyError;

/// Number of committers named individually in a push summary; the rest are
/// folded into a single "others" entry.
pub const PUSH_COMMITTERS_LIMIT_INFO: usize = 3;

/// Whether a pull-request-shaped event is a PR or an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    PullRequest,
    Issue,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::PullRequest => "PR",
            IssueKind::Issue => "Issue",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A push of zero or more commits to a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Push {
    pub user_name: String,
    #[serde(default)]
    pub compare_url: Option<String>,
    pub branch_name: String,
    #[serde(flatten)]
    pub batch: CommitBatch,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcePush {
    pub user_name: String,
    pub url: String,
    pub branch_name: String,
    pub head: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCreate {
    pub user_name: String,
    #[serde(default)]
    pub url: Option<String>,
    pub branch_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDelete {
    pub user_name: String,
    pub branch_name: String,
}

/// Assignees of a PR or issue. Providers report either a single login or a
/// list; the list wins when it is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignees {
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
}

impl Assignees {
    pub fn one(name: impl Into<String>) -> Self {
        Self {
            assignee: Some(name.into()),
            assignees: Vec::new(),
        }
    }

    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assignee: None,
            assignees: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        if !self.assignees.is_empty() {
            return self.assignees.iter().map(String::as_str).collect();
        }
        match self.assignee.as_deref() {
            Some(name) if !name.is_empty() => vec![name],
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

/// Shared shape of pull request and issue events. Issues never carry
/// branch information; any branch fields are ignored for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestOrIssue {
    pub user_name: String,
    pub action: String,
    pub url: String,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub target_branch: Option<String>,
    #[serde(default)]
    pub base_branch: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub assignees: Assignees,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_tag_action() -> String {
    "pushed".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPush {
    pub user_name: String,
    pub tag_name: String,
    #[serde(default)]
    pub tag_url: Option<String>,
    #[serde(default = "default_tag_action")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub user_name: String,
    pub action: String,
    pub tag_name: String,
    pub release_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitComment {
    pub user_name: String,
    pub action: String,
    pub url: String,
    pub sha: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfirmation {
    pub integration: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// A parsed webhook event, one variant per message shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventContext {
    Push(Push),
    ForcePush(ForcePush),
    BranchCreate(BranchCreate),
    BranchDelete(BranchDelete),
    PullRequest(PullRequestOrIssue),
    Issue(PullRequestOrIssue),
    Tag(TagPush),
    Release(Release),
    CommitComment(CommitComment),
    SetupConfirmation(SetupConfirmation),
}

impl EventContext {
    pub fn kind(&self) -> &'static str {
        match self {
            EventContext::Push(_) => "push",
            EventContext::ForcePush(_) => "force_push",
            EventContext::BranchCreate(_) => "branch_create",
            EventContext::BranchDelete(_) => "branch_delete",
            EventContext::PullRequest(_) => "pull_request",
            EventContext::Issue(_) => "issue",
            EventContext::Tag(_) => "tag",
            EventContext::Release(_) => "release",
            EventContext::CommitComment(_) => "commit_comment",
            EventContext::SetupConfirmation(_) => "setup_confirmation",
        }
    }

    /// Check the preconditions the message builders rely on.
    pub fn validate(&self) -> Result<(), NotifyError> {
        match self {
            EventContext::Push(push) => {
                if let Some(index) = push.batch.commits.iter().position(|c| c.sha.is_empty()) {
                    return Err(NotifyError::MissingSha { index });
                }
            }
            EventContext::ForcePush(push) => {
                if push.head.is_empty() || is_empty_sha(&push.head) {
                    return Err(NotifyError::InvalidInput(
                        "force push without a head commit".into(),
                    ));
                }
            }
            EventContext::CommitComment(comment) => {
                if comment.sha.is_empty() {
                    return Err(NotifyError::MissingSha { index: 0 });
                }
            }
            EventContext::Tag(tag) => {
                if tag.tag_name.is_empty() {
                    return Err(NotifyError::InvalidInput("empty tag name".into()));
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn from_json(body: &str) -> Result<Self, NotifyError> {
        let event: EventContext = serde_json::from_str(body)?;
        event.validate()?;
        Ok(event)
    }
}
