//! Environment-variable syntax conversion between Windows (`%NAME%`) and
//! POSIX (`$NAME`) styles.

use std::sync::LazyLock;

use regex::Regex;

static WIN_ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").expect("valid windows env var regex"));
static POSIX_ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z0-9_]+)").expect("valid posix env var regex"));

/// `script --opt=%OPT%` becomes `script --opt=$OPT`.
pub fn to_posix(command_line: &str) -> String {
    if command_line.is_empty() {
        return String::new();
    }
    WIN_ENV_VAR_RE.replace_all(command_line, "$$$1").into_owned()
}

/// `script --opt=$OPT` becomes `script --opt=%OPT%`.
pub fn to_windows(command_line: &str) -> String {
    if command_line.is_empty() {
        return String::new();
    }
    POSIX_ENV_VAR_RE
        .replace_all(command_line, "%$1%")
        .into_owned()
}
