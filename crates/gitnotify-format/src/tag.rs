use gitnotify_core::{Release, TagPush};

use crate::text::{ends_with_punctuation, link, non_empty};

pub fn tag_message(tag: &TagPush) -> String {
    let tag_part = match non_empty(tag.tag_url.as_deref()) {
        Some(url) => link(&tag.tag_name, url),
        None => tag.tag_name.clone(),
    };
    let mut message = format!("{} {} tag {tag_part}", tag.user_name, tag.action);
    if !ends_with_punctuation(&tag.tag_name) {
        message.push('.');
    }
    message
}

pub fn release_message(release: &Release) -> String {
    format!(
        "{} {} release {} for tag {}.",
        release.user_name,
        release.action,
        link(&release.release_name, &release.url),
        release.tag_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, url: Option<&str>) -> TagPush {
        TagPush {
            user_name: "alice".into(),
            tag_name: name.into(),
            tag_url: url.map(Into::into),
            action: "pushed".into(),
        }
    }

    #[test]
    fn plain_tag() {
        assert_eq!(tag_message(&tag("v1.0", None)), "alice pushed tag v1.0.");
    }

    #[test]
    fn linked_tag() {
        assert_eq!(
            tag_message(&tag("v1.0", Some("url"))),
            "alice pushed tag [v1.0](url)."
        );
    }

    #[test]
    fn tag_ending_in_punctuation_gets_no_period() {
        assert_eq!(tag_message(&tag("yay!", None)), "alice pushed tag yay!");
        assert_eq!(
            tag_message(&tag("yay!", Some("url"))),
            "alice pushed tag [yay!](url)"
        );
    }

    #[test]
    fn empty_tag_gets_period() {
        assert_eq!(tag_message(&tag("", None)), "alice pushed tag .");
    }

    #[test]
    fn custom_action() {
        let mut t = tag("v2", None);
        t.action = "removed".into();
        assert_eq!(tag_message(&t), "alice removed tag v2.");
    }

    #[test]
    fn release() {
        let r = Release {
            user_name: "alice".into(),
            action: "published".into(),
            tag_name: "v1.0".into(),
            release_name: "First".into(),
            url: "url".into(),
        };
        assert_eq!(
            release_message(&r),
            "alice published release [First](url) for tag v1.0."
        );
    }
}
