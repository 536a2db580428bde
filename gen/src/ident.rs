//! Identifier checks for generated source.

use std::sync::OnceLock;

use regex::Regex;

const IDENT_PATTERN: &str = r"^(?:r#)?[A-Za-z_][A-Za-z0-9_]*$";

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// Path segments allowed even though they are keywords.
const PATH_ROOTS: &[&str] = &["crate", "self", "super", "Self"];

fn ident_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IDENT_PATTERN).expect("identifier pattern is a valid regex"))
}

/// Returns `true` if `name` can be used as a Rust identifier.
///
/// Keywords are rejected unless written as raw identifiers (`r#type`); `_`
/// alone is rejected.
///
/// ```
/// use sniff_gen::is_valid_identifier;
///
/// assert!(is_valid_identifier("has_text"));
/// assert!(is_valid_identifier("r#type"));
/// assert!(!is_valid_identifier("type"));
/// assert!(!is_valid_identifier("2fast"));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    if name == "_" || !ident_regex().is_match(name) {
        return false;
    }
    name.starts_with("r#") || !KEYWORDS.iter().any(|kw| *kw == name)
}

/// Returns `true` if `path` is a `::`-separated path of identifiers.
///
/// `crate`, `self`, `super` and `Self` are accepted as path segments.
///
/// ```
/// use sniff_gen::is_valid_path;
///
/// assert!(is_valid_path("crate::text::TextMatcher"));
/// assert!(is_valid_path("TextMatcher"));
/// assert!(!is_valid_path("text::"));
/// ```
#[must_use]
pub fn is_valid_path(path: &str) -> bool {
    let path = path.strip_prefix("::").unwrap_or(path);
    !path.is_empty()
        && path
            .split("::")
            .all(|segment| PATH_ROOTS.iter().any(|root| *root == segment) || is_valid_identifier(segment))
}
