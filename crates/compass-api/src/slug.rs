//! URL- and filesystem-safe identifiers.

/// Convert free text to a slug.
///
/// Lower-cases the text, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and trims hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(
            slugify("Secure Design & Architecture"),
            "secure-design-architecture"
        );
    }

    #[test]
    fn control_ids() {
        assert_eq!(slugify("OPSC-C1"), "opsc-c1");
        assert_eq!(slugify("A.14.1.1"), "a-14-1-1");
        assert_eq!(slugify("PO.1-1"), "po-1-1");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  --Access Control!! "), "access-control");
        assert_eq!(slugify("&&&"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Sécurité Réseau"), "s-curit-r-seau");
    }

    proptest! {
        #[test]
        fn output_is_slug_shaped(text in "\\PC{0,40}") {
            let slug = slugify(&text);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn idempotent(text in "\\PC{0,40}") {
            let once = slugify(&text);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }
}
