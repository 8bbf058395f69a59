use gitnotify_core::{BranchCreate, BranchDelete, ForcePush, Push};

use crate::commits::render_commits;
use crate::committers::rank_committers;
use crate::text::{join_names, link, non_empty};

/// Message for a push to a branch. Pushes without commits are reported as a
/// branch deletion or a bare branch push.
pub fn push_message(push: &Push) -> String {
    let user = &push.user_name;
    let branch = &push.branch_name;
    let compare_url = non_empty(push.compare_url.as_deref());

    if push.batch.is_empty() {
        let target = compare_url.unwrap_or_default();
        return if push.deleted {
            format!("{user} {} the branch {branch}.", link("deleted", target))
        } else {
            format!("{user} {} the branch {branch}.", link("pushed", target))
        };
    }

    let count = push.batch.len();
    let noun = if count > 1 { "commits" } else { "commit" };
    let pushed = match compare_url {
        Some(url) => format!("{} {count} {noun}", link("pushed", url)),
        None => format!("pushed {count} {noun}"),
    };

    let mut message = format!("{user} {pushed} to branch {branch}.");

    let committers = rank_committers(&push.batch);
    let only_pusher = committers.len() == 1 && committers[0].0 == *user;
    if !only_pusher {
        let entries: Vec<String> = committers
            .iter()
            .map(|(name, count)| format!("{name} ({count})"))
            .collect();
        message.push_str(&format!(" Commits by {}.", join_names(&entries)));
    }

    message.push_str("\n\n");
    message.push_str(&render_commits(&push.batch));
    message.truncate(message.trim_end().len());
    message
}

pub fn force_push_message(push: &ForcePush) -> String {
    format!(
        "{} {} to branch {}. Head is now {}.",
        push.user_name,
        link("force pushed", &push.url),
        push.branch_name,
        push.head
    )
}

pub fn branch_create_message(create: &BranchCreate) -> String {
    match &create.url {
        Some(url) => format!(
            "{} created {} branch.",
            create.user_name,
            link(&create.branch_name, url)
        ),
        None => format!("{} created {} branch.", create.user_name, create.branch_name),
    }
}

pub fn branch_delete_message(delete: &BranchDelete) -> String {
    format!("{} deleted branch {}.", delete.user_name, delete.branch_name)
}
