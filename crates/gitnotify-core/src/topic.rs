use serde::{Deserialize, Serialize};

use crate::event::IssueKind;

/// Event metadata that selects the destination topic of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopicContext {
    Branch {
        repo: String,
        branch: String,
    },
    PullRequestOrIssue {
        repo: String,
        issue_kind: IssueKind,
        number: u64,
        title: String,
    },
    Release {
        repo: String,
        tag: String,
        title: String,
    },
}

impl TopicContext {
    pub fn repo(&self) -> &str {
        match self {
            TopicContext::Branch { repo, .. }
            | TopicContext::PullRequestOrIssue { repo, .. }
            | TopicContext::Release { repo, .. } => repo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_from_json() {
        let topic: TopicContext = serde_json::from_str(
            r#"{"kind": "pull_request_or_issue", "repo": "gitnotify",
                "issue_kind": "issue", "number": 7, "title": "Crash"}"#,
        )
        .unwrap();
        assert_eq!(topic.repo(), "gitnotify");
        assert_eq!(
            topic,
            TopicContext::PullRequestOrIssue {
                repo: "gitnotify".into(),
                issue_kind: IssueKind::Issue,
                number: 7,
                title: "Crash".into(),
            }
        );
    }
}
