//! Small text fragments shared by several message builders.

/// Join names as `a, b and c`. Two names get no comma: `a and b`.
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.as_ref().to_string(),
        Some((last, rest)) => {
            let head: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Whether `text` already ends in ASCII punctuation. Empty text does not.
pub fn ends_with_punctuation(text: &str) -> bool {
    text.chars().last().is_some_and(|c| c.is_ascii_punctuation())
}

/// Quoted block appended after a message headline.
pub fn quote_block(message: &str) -> String {
    format!("\n~~~ quote\n{message}\n~~~")
}

/// `[text](url)`
pub fn link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Treat an empty optional string the same as a missing one.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
