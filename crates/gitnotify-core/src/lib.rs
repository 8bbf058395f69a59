pub mod commit;
pub mod error;
pub mod event;
pub mod topic;

pub use commit::{is_empty_sha, CommitBatch, CommitRecord, COMMITS_LIMIT, EMPTY_SHA};
pub use error::NotifyError;
pub use event::{
    Assignees, BranchCreate, BranchDelete, CommitComment, EventContext, ForcePush, IssueKind,
    PullRequestOrIssue, Push, Release, SetupConfirmation, TagPush, PUSH_COMMITTERS_LIMIT_INFO,
};
pub use topic::TopicContext;
