//! Small shared helpers

use std::path::Path;

/// Derive a URL-safe lowercase slug from an event name
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Stable photo filename for an event, preserving the upload's extension
pub fn photo_filename(event_id: i64, original_name: &str) -> String {
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("photo_{}.{}", event_id, ext.to_lowercase()),
        None => format!("photo_{}", event_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Community Football Cup"), "community-football-cup");
    }

    #[test]
    fn test_slugify_punctuation_collapses() {
        assert_eq!(slugify("5-a-side  (outdoor!)"), "5-a-side-outdoor");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
    }

    #[test]
    fn test_slugify_unicode_lowercase() {
        assert_eq!(slugify("Fête du Sport"), "fête-du-sport");
    }

    #[test]
    fn test_photo_filename() {
        assert_eq!(photo_filename(42, "holiday.JPG"), "photo_42.jpg");
        assert_eq!(photo_filename(42, "no_extension"), "photo_42");
    }
}
