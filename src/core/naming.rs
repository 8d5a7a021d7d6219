//! Name helpers shared by the classifier, reducer and emitters

use std::cmp::Ordering;

/// Split camel-case compounds into words
///
/// A space goes before every uppercase letter that directly follows a
/// lowercase letter or a digit: `"WheatField"` → `"Wheat Field"`,
/// `"Seed2Pack"` → `"Seed2 Pack"`. Existing spacing and acronyms are left
/// alone.
pub fn split_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_ascii_digit() {
                    out.push(' ');
                }
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// Crop display name for a prefix-named recipe, or `None` if the prefix doesn't match
///
/// An empty prefix never matches, and neither does a name that is nothing
/// but the prefix (plus whitespace).
pub fn crop_display_name(recipe_name: &str, prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    let rest = recipe_name.strip_prefix(prefix)?;
    if rest.trim().is_empty() {
        return None;
    }
    Some(split_camel_case(rest))
}

/// Case-insensitive substring test; `needle` must already be lowercase
pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(needle)
}

/// Catalog ordering: case-insensitive, exact string as tie-breaker
///
/// The tie-breaker makes the order total, so output never depends on input order.
pub fn catalog_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort and deduplicate names in catalog order
pub fn sort_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort_by(|a, b| catalog_cmp(a, b));
    names.dedup();
    names
}
