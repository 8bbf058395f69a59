use gitnotify_core::TopicContext;

/// Name of the chat topic an event is posted to.
pub fn render_topic(topic: &TopicContext) -> String {
    match topic {
        TopicContext::Branch { repo, branch } => format!("{repo} / {branch}"),
        TopicContext::PullRequestOrIssue {
            repo,
            issue_kind,
            number,
            title,
        } => format!("{repo} / {issue_kind} #{number} {title}"),
        TopicContext::Release { repo, tag, title } => format!("{repo} / {tag} {title}"),
    }
}
