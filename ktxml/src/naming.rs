//! Conversion of XML resource names into Kotlin identifiers.
//!
//! Resource names arrive in several shapes: `snake_case` dimension names,
//! dotted style names such as `TextAppearance.AppCompat.Headline`, and
//! namespaced attribute names such as `android:textSize`. All of them are
//! turned into lower camel case.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Namespace marker stripped from the front of attribute names.
pub const ANDROID_NAMESPACE: &str = "android:";

lazy_static! {
    static ref REPEATED_UNDERSCORES: Regex = Regex::new(r"_{2,}").unwrap();
    static ref UNDERSCORE_WORD: Regex = Regex::new(r"_([A-Za-z0-9])").unwrap();
}

/// Normalizes a raw resource name into a lower camel case identifier.
///
/// ```rust
/// use ktxml::naming::normalize;
/// assert_eq!(normalize("activity_horizontal_margin"), "activityHorizontalMargin");
/// assert_eq!(normalize("TextAppearance.AppCompat.Headline"), "textAppearanceAppCompatHeadline");
/// assert_eq!(normalize("android:textSize"), "textSize");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let dotted = raw.replace('.', "_");
    let unprefixed = dotted.strip_prefix(ANDROID_NAMESPACE).unwrap_or(&dotted);
    let trimmed = unprefixed.trim_end_matches('_');
    let collapsed = REPEATED_UNDERSCORES.replace_all(trimmed, "_");
    let joined: Cow<str> = UNDERSCORE_WORD.replace_all(&collapsed, |caps: &Captures| {
        caps[1].to_ascii_uppercase()
    });

    lowercase_first(&joined)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character, leaving the rest untouched (`bold` → `Bold`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
