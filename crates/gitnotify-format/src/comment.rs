use gitnotify_core::CommitComment;

use crate::sha::short_sha;
use crate::text::{link, non_empty, quote_block};

pub fn commit_comment_message(comment: &CommitComment) -> String {
    let mut message = format!(
        "{} {} on {}",
        comment.user_name,
        comment.action,
        link(short_sha(&comment.sha), &comment.url)
    );
    match non_empty(comment.message.as_deref()) {
        Some(body) => {
            message.push(':');
            message.push_str(&quote_block(body));
        }
        None => message.push('.'),
    }
    message.truncate(message.trim_end().len());
    message
}
