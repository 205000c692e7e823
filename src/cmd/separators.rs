use std::sync::LazyLock;

use regex::{Captures, Regex};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("valid token regex"));
static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?|ftp|git):").expect("valid url scheme regex"));

/// Rewrite `/` and `\` inside path-like tokens to `separator`.
///
/// Tokens starting with a URL scheme (`http:`, `https:`, `ftp:`, `git:`)
/// are left byte-for-byte unchanged; whitespace between tokens is
/// preserved verbatim. Pure and idempotent: once every slash maps to
/// `separator`, a second pass changes nothing.
pub fn convert_separators(command_line: &str, separator: char) -> String {
    TOKEN_RE
        .replace_all(command_line, |caps: &Captures<'_>| {
            let token = &caps[0];
            if URL_SCHEME_RE.is_match(token) {
                token.to_string()
            } else {
                token
                    .chars()
                    .map(|c| if c == '/' || c == '\\' { separator } else { c })
                    .collect()
            }
        })
        .into_owned()
}
