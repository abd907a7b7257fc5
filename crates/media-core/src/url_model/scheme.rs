//! Scheme prefix repair for pasted URLs.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn duplicated_scheme() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^h+ttps://").expect("static regex"))
}

/// Rewrites a leading `h+ttps://` to exactly `https://`. Everything after the
/// prefix is left untouched.
pub fn repair_scheme_prefix(value: &str) -> Cow<'_, str> {
    duplicated_scheme().replace(value, "https://")
}

/// Input-field stage: drops a leading run of `h` characters from the typed value.
///
/// When the remainder is a scheme tail (`ttps://` or `ttp://`) a single `h` is kept,
/// so `hhttps://a` becomes `https://a` and a plain `https://a` survives intact.
pub fn strip_input_prefix(value: &str) -> String {
    let rest = value.trim_start_matches('h');
    if rest.len() != value.len() && (rest.starts_with("ttps://") || rest.starts_with("ttp://")) {
        format!("h{rest}")
    } else {
        rest.to_string()
    }
}
