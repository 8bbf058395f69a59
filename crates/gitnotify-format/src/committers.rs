use std::collections::BTreeMap;

use gitnotify_core::{CommitBatch, PUSH_COMMITTERS_LIMIT_INFO};

/// Name of the entry that absorbs everyone past the named committers.
pub const OTHERS: &str = "others";

/// Commit count per author, most active first, ties by name. When there are
/// more than `PUSH_COMMITTERS_LIMIT_INFO` authors the tail is folded into a
/// trailing `("others", n)` entry. Every commit in the batch is counted, not
/// only the displayed ones.
pub fn rank_committers(batch: &CommitBatch) -> Vec<(String, usize)> {
    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for commit in &batch.commits {
        *tally.entry(commit.author_name.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = tally.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out: Vec<(String, usize)> = ranked
        .iter()
        .take(PUSH_COMMITTERS_LIMIT_INFO)
        .map(|(name, count)| (name.to_string(), *count))
        .collect();

    if ranked.len() > PUSH_COMMITTERS_LIMIT_INFO {
        let others = ranked[PUSH_COMMITTERS_LIMIT_INFO..]
            .iter()
            .map(|(_, count)| count)
            .sum();
        out.push((OTHERS.to_string(), others));
    }
    out
}
