//! Display-name slug derivation.
//!
//! Slugs are regenerated whenever an entity is renamed, never edited by hand.

/// Lowercase the name, replace every non-alphanumeric run with a single
/// hyphen, and trim leading/trailing hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }

            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
