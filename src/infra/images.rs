//! Maps skip sizes to public image URLs in the storage bucket.

use crate::util::config::AppConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageResolver {
    storage_url: Option<String>,
    bucket: String,
}

impl ImageResolver {
    pub fn new(storage_url: Option<String>, bucket: impl Into<String>) -> Self {
        Self {
            storage_url: storage_url.map(|url| url.trim_end_matches('/').to_string()),
            bucket: bucket.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.storage_url.clone(), config.image_bucket.clone())
    }

    /// Public URL for the size's photo, or an empty string when there is none.
    pub fn resolve_image_url(&self, size: u32) -> String {
        let Some(file_name) = image_file_name(size) else {
            tracing::warn!(size, "no image mapping found for skip size");
            return String::new();
        };
        let Some(base) = self.storage_url.as_deref() else {
            tracing::warn!(file_name, "no storage URL configured for skip images");
            return String::new();
        };
        format!("{base}/storage/v1/object/public/{}/{file_name}", self.bucket)
    }
}

fn image_file_name(size: u32) -> Option<&'static str> {
    Some(match size {
        4 => "4-yarder-skip.jpg",
        5 => "5-yarder-skip.jpg",
        6 => "6-yarder-skip.jpg",
        8 => "8-yarder-skip.jpg",
        10 => "10-yarder-skip.jpg",
        12 => "12-yarder-skip.jpg",
        14 => "14-yarder-skip.jpg",
        16 => "16-yarder-skip.jpg",
        20 => "20-yarder-skip.jpg",
        40 => "40-yarder-skip.jpg",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KNOWN_SKIP_SIZES;

    fn resolver() -> ImageResolver {
        ImageResolver::new(Some("https://store.example.test/".into()), "redesign")
    }

    #[test]
    fn known_size_resolves_to_public_url() {
        assert_eq!(
            resolver().resolve_image_url(8),
            "https://store.example.test/storage/v1/object/public/redesign/8-yarder-skip.jpg"
        );
    }

    #[test]
    fn every_known_size_has_an_image() {
        let resolver = resolver();
        for size in KNOWN_SKIP_SIZES {
            assert!(!resolver.resolve_image_url(size).is_empty(), "size {size}");
        }
    }

    #[test]
    fn unmapped_size_is_empty() {
        assert_eq!(resolver().resolve_image_url(7), "");
    }

    #[test]
    fn missing_storage_is_empty() {
        assert_eq!(ImageResolver::new(None, "redesign").resolve_image_url(4), "");
    }
}
