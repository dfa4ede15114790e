// src/core/slug.rs

/// Extracts the fragment identifier from a hyperlink reference: everything
/// after the first '#'. Returns None when there is no '#' or the fragment
/// is empty; such anchors are never bound.
pub fn fragment(href: &str) -> Option<&str> {
    match href.split_once('#') {
        Some((_, frag)) if !frag.is_empty() => Some(frag),
        _ => None,
    }
}

/// Normalizes a fragment with the documentation generator's heading-slug
/// convention: lowercase, every maximal run of characters outside
/// [A-Za-z0-9_] collapses to a single hyphen, leading and trailing hyphens
/// trimmed. This must stay byte-for-byte compatible with the rules used
/// when the glossary keys were generated or every lookup fails.
pub fn normalize(fragment: &str) -> String {
    let mut slug = String::with_capacity(fragment.len());
    let mut pending_hyphen = false;
    for c in fragment.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            // Run of non-word characters; emit at most one hyphen, and
            // only if a word character follows.
            pending_hyphen = true;
        }
    }
    slug
}

/// Derives the lookup slug for an anchor, or None when the anchor has no
/// usable fragment and must be skipped.
pub fn derive(href: &str) -> Option<String> {
    let slug = normalize(fragment(href)?);
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_requires_a_hash() {
        assert_eq!(fragment("/page#section"), Some("section"));
        assert_eq!(fragment("/page"), None);
        assert_eq!(fragment("/page#"), None);
    }

    #[test]
    fn fragment_takes_everything_after_the_first_hash() {
        assert_eq!(fragment("/page#a#b"), Some("a#b"));
    }

    #[test]
    fn normalize_matches_heading_slug_convention() {
        assert_eq!(normalize("Foo Bar!"), "foo-bar");
        assert_eq!(normalize("API Reference"), "api-reference");
        assert_eq!(normalize("C++ (language)"), "c-language");
        assert_eq!(normalize("__dunder__"), "__dunder__");
        assert_eq!(normalize("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn normalize_is_idempotent() {
        for frag in ["Foo Bar!", "already-normalized", "A  B--C", "__x__", "Größe"] {
            let once = normalize(frag);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn only_non_word_characters_yields_empty() {
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("- -- -"), "");
        assert_eq!(derive("/page#!!!"), None);
    }

    #[test]
    fn derive_composes_fragment_and_normalize() {
        assert_eq!(derive("/page#Foo Bar!"), Some("foo-bar".to_string()));
        assert_eq!(derive("/page"), None);
    }
}
