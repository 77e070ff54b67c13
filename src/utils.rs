//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use intlcheck::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic("$100"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Joins words into lowerCamelCase.
///
/// Non-alphanumeric characters split words and are dropped.
///
/// ```
/// use intlcheck::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("Sign in now"), "signInNow");
/// assert_eq!(to_camel_case("user-profile"), "userProfile");
/// assert_eq!(to_camel_case("!!"), "");
/// ```
pub fn to_camel_case(text: &str) -> String {
    camel_case_words(split_words(text))
}

/// Splits text into alphanumeric words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Joins an iterator of words into lowerCamelCase.
pub fn camel_case_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, word) in words.enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
