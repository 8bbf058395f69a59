use gitnotify_core::CommitBatch;

use crate::sha::short_sha;
use crate::text::link;

/// Render up to `COMMITS_LIMIT` commits as a bullet list, followed by an
/// elision line when commits were left out.
pub fn render_commits(batch: &CommitBatch) -> String {
    let mut out = String::new();
    for commit in batch.displayed() {
        let target = commit.url.as_deref().unwrap_or_default();
        out.push_str(&format!(
            "* {} ({})\n",
            commit.summary(),
            link(short_sha(&commit.sha), target)
        ));
    }

    let overflow = batch.overflow();
    if overflow > 0 {
        out.push_str(&format!("[and {overflow} more commit(s)]"));
    } else if batch.is_truncated {
        out.push_str("[and more commit(s)]");
    }

    out.truncate(out.trim_end().len());
    out
}
