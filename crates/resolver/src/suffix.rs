//! Suffix rules for simulator aircraft names.

use std::sync::LazyLock;

use regex::Regex;

// Letters glued onto a digit: `A320neo`, `B744F`, `B777-300ER`.
static GLUED_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<stem>.*[0-9])[A-Za-z]+$").expect("valid regex"));

// Letters after a separator: `C172 Skyhawk`, `A330-MRTT`.
static SEPARATED_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<stem>.*\S)[-\s]+[A-Za-z]+$").expect("valid regex"));

static NUMERIC_SUBMODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<family>.*\S)[-/\s]+[0-9]+$").expect("valid regex"));

/// Name with its trailing variant marker removed, or `None` when there is none.
pub fn strip_variant_marker(name: &str) -> Option<&str> {
    [&*GLUED_VARIANT, &*SEPARATED_VARIANT]
        .into_iter()
        .find_map(|re| re.captures(name))
        .and_then(|caps| caps.name("stem"))
        .map(|stem| stem.as_str())
}

/// Family name with its trailing numeric sub-model removed, or `None` when there is none.
pub fn strip_numeric_submodel(name: &str) -> Option<&str> {
    NUMERIC_SUBMODEL
        .captures(name)
        .and_then(|caps| caps.name("family"))
        .map(|family| family.as_str())
}
