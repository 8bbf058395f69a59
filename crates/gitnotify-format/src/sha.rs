const SHORT_SHA_LEN: usize = 7;

/// Display form of a commit hash: its first seven characters, or the whole
/// string when it is shorter.
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((end, _)) => &sha[..end],
        None => sha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sha_is_cut_to_seven() {
        assert_eq!(
            short_sha("abc1234def5678abc1234def5678abc1234def56"),
            "abc1234"
        );
    }

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha(""), "");
        assert_eq!(short_sha("abc1234"), "abc1234");
        assert_eq!(short_sha("abc12345"), "abc1234");
    }
}
