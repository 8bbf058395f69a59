use gitnotify_core::{IssueKind, PullRequestOrIssue};

use crate::text::{ends_with_punctuation, join_names, link, non_empty, quote_block};

/// Message for a pull request or issue action.
///
/// The headline links `<type> #<id> <title>`; assignees and (for pull
/// requests) the branch pair follow in parentheses and backticks. The line
/// ends in `:` when a quoted body follows and `.` otherwise, except that a
/// bare title which already ends in punctuation gets nothing appended.
pub fn pull_request_or_issue_message(event: &PullRequestOrIssue, kind: IssueKind) -> String {
    let id = event
        .number
        .map(|number| format!(" #{number}"))
        .unwrap_or_default();
    let text = match &event.title {
        Some(title) => format!("{}{id} {title}", kind.label()),
        None => format!("{}{id}", kind.label()),
    };
    let mut message = format!(
        "{} {} {}",
        event.user_name,
        event.action,
        link(&text, &event.url)
    );

    let assignees = event.assignees.names();
    if !assignees.is_empty() {
        message.push_str(&format!(" (assigned to {})", join_names(&assignees)));
    }

    let branches = match kind {
        IssueKind::PullRequest => non_empty(event.target_branch.as_deref())
            .zip(non_empty(event.base_branch.as_deref())),
        IssueKind::Issue => None,
    };
    if let Some((target, base)) = branches {
        message.push_str(&format!(" from `{target}` to `{base}`"));
    }

    let body = non_empty(event.message.as_deref());
    let punctuation = if body.is_some() { ':' } else { '.' };
    let ends_with_title = assignees.is_empty() && branches.is_none();
    match &event.title {
        Some(title) if ends_with_title && ends_with_punctuation(title) => {}
        _ => message.push(punctuation),
    }

    if let Some(body) = body {
        message.push('\n');
        message.push_str(&quote_block(body));
    }

    message.truncate(message.trim_end().len());
    message
}
