//! Heuristics for recognizing technical (non user-facing) strings.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_WITH_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?\d+([.,]\d+)?\s*[a-zA-Z%]{0,4}$").unwrap());

static ALL_CAPS_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_\-.]*[A-Z][A-Z0-9_\-.]*$").unwrap());

static SCREAMING_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)+$").unwrap());

static SNAKE_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)+$").unwrap());

static KEBAB_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)+$").unwrap());

static UTILITY_CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!?-?[a-z0-9][a-z0-9:\-/\[\]().#%_]*$").unwrap());

static HTML_ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(&(#\d+|#x[0-9a-fA-F]+|[a-zA-Z]+);\s*)+$").unwrap());

static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(rgb|rgba|hsl|hsla)\(.*\))$")
        .unwrap()
});

static FILE_EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpe?g|gif|svg|webp|ico|json|js|jsx|ts|tsx|css|scss|html|md|pdf|mp4|woff2?)$")
        .unwrap()
});

pub fn is_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    ["http://", "https://", "mailto:", "tel:", "www.", "//"]
        .iter()
        .any(|p| lower.starts_with(p))
}

/// `/about`, `./logo.png`, `assets/icons/close.svg`
pub fn is_path_like(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    text.starts_with('/')
        || text.starts_with("./")
        || text.starts_with("../")
        || (text.contains('/') && !text.ends_with('/'))
        || FILE_EXTENSION_REGEX.is_match(text)
}

/// `42`, `10px`, `3.5rem`, `100%`
pub fn is_numeric_with_suffix(text: &str) -> bool {
    NUMERIC_WITH_SUFFIX_REGEX.is_match(text)
}

/// A single upper-case token such as `OK`, `USD` or `API_V2`.
pub fn is_all_caps_token(text: &str) -> bool {
    ALL_CAPS_TOKEN_REGEX.is_match(text)
}

pub fn is_screaming_case(text: &str) -> bool {
    SCREAMING_CASE_REGEX.is_match(text)
}

/// `invalid_email`, `err_code_42`
pub fn is_snake_case(text: &str) -> bool {
    SNAKE_CASE_REGEX.is_match(text)
}

/// A single lowercase hyphenated token: `text-center`, `btn-primary`.
pub fn is_kebab_token(text: &str) -> bool {
    KEBAB_TOKEN_REGEX.is_match(text)
}

/// A CSS class list: `flex items-center gap-2`, `md:hidden`.
///
/// Every token must look like a utility class and at least one token must carry a
/// `-` or `:` so that plain lowercase prose is not swallowed.
pub fn is_css_like(text: &str) -> bool {
    if is_kebab_token(text) {
        return true;
    }
    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return false;
    }
    let mut has_marker = false;
    for token in tokens {
        if !UTILITY_CLASS_REGEX.is_match(token) {
            return false;
        }
        has_marker |= token.contains('-') || token.contains(':');
    }
    has_marker
}

/// `&nbsp;`, `&#169;`, `&copy; &reg;`
pub fn is_html_entity(text: &str) -> bool {
    HTML_ENTITY_REGEX.is_match(text)
}

/// `#fff`, `#1a2b3c`, `rgb(0, 0, 0)`, `hsl(210 40% 98%)`
pub fn is_color(text: &str) -> bool {
    COLOR_REGEX.is_match(text)
}
