//! URL slugs for public FAQ pages: `how-do-i-reset-my-password-42`.

use faq_core::FaqId;

/// Lowercase ASCII letters and digits; every other run of characters
/// collapses to a single `-`. Leading and trailing dashes are dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// `<slug>-<id>`, or just the id when the question has no ASCII to keep.
pub fn faq_slug(question: &str, id: FaqId) -> String {
    let slug = slugify(question);
    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{slug}-{id}")
    }
}

/// The id is the last `-` separated token of the slug.
pub fn id_from_slug(slug: &str) -> Option<FaqId> {
    slug.rsplit('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("How do I reset my password?"), "how-do-i-reset-my-password");
        assert_eq!(slugify("  --Hello,   World!!  "), "hello-world");
        assert_eq!(slugify("Größe ändern"), "gr-e-ndern");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn faq_slug_appends_id() {
        assert_eq!(faq_slug("What is it?", 42), "what-is-it-42");
        assert_eq!(faq_slug("你好", 7), "7");
    }

    #[test]
    fn id_from_last_token() {
        assert_eq!(id_from_slug("what-is-it-42"), Some(42));
        assert_eq!(id_from_slug("42"), Some(42));
        assert_eq!(id_from_slug("what-is-it"), None);
        assert_eq!(id_from_slug("what-is-it-"), None);
        assert_eq!(id_from_slug(""), None);
    }
}
