pub mod comment;
pub mod commits;
pub mod committers;
pub mod pull_request;
pub mod push;
pub mod setup;
pub mod sha;
pub mod tag;
pub mod text;
pub mod topic;

use gitnotify_core::{EventContext, IssueKind, TopicContext};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use commits::render_commits;
pub use committers::rank_committers;
pub use sha::short_sha;
pub use topic::render_topic;

/// A rendered notification, ready to post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub topic: String,
    pub content: String,
}

/// Render the chat message for an event.
pub fn render_message(event: &EventContext) -> String {
    let content = match event {
        EventContext::Push(push) => push::push_message(push),
        EventContext::ForcePush(push) => push::force_push_message(push),
        EventContext::BranchCreate(create) => push::branch_create_message(create),
        EventContext::BranchDelete(delete) => push::branch_delete_message(delete),
        EventContext::PullRequest(pr) => {
            pull_request::pull_request_or_issue_message(pr, IssueKind::PullRequest)
        }
        EventContext::Issue(issue) => {
            pull_request::pull_request_or_issue_message(issue, IssueKind::Issue)
        }
        EventContext::Tag(tag) => tag::tag_message(tag),
        EventContext::Release(release) => tag::release_message(release),
        EventContext::CommitComment(comment) => comment::commit_comment_message(comment),
        EventContext::SetupConfirmation(setup) => setup::setup_message(setup),
    };
    debug!(kind = event.kind(), len = content.len(), "rendered message");
    content
}

pub fn render(topic: &TopicContext, event: &EventContext) -> Notification {
    debug!(repo = topic.repo(), kind = event.kind(), "rendering notification");
    Notification {
        topic: render_topic(topic),
        content: render_message(event),
    }
}
