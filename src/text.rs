//! Small text helpers shared by services and adapters

use std::sync::LazyLock;

use regex::Regex;

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

/// Keep at most `max` characters, appending `...` when something was cut
///
/// Counts characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Keep at most `max` characters without any suffix
#[must_use]
pub fn clip_chars(text: &str, max: usize) -> &str {
    text.char_indices().nth(max).map_or(text, |(byte_idx, _)| &text[..byte_idx])
}

/// Escape the characters Slack mrkdwn treats as control (`&`, `<`, `>`)
#[must_use]
pub fn escape_for_slack(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Slack link `<url|text>` with the text escaped
///
/// A `|` in the text is kept: Slack splits the link at the first one.
#[must_use]
pub fn slack_link(url: &str, text: &str) -> String {
    format!("<{url}|{}>", escape_for_slack(text))
}

/// Escape and tidy free text for Slack mrkdwn
///
/// Escapes like [`escape_for_slack`], collapses runs of three or more
/// newlines, trims and clips to `max` characters.
#[must_use]
pub fn sanitize_for_slack(text: &str, max: usize) -> String {
    let escaped = escape_for_slack(text);
    let collapsed = EXCESS_NEWLINES.replace_all(&escaped, "\n\n");
    clip_chars(collapsed.trim(), max).to_string()
}
