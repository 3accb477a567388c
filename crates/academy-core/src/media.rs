//! Media listing rules: which stored objects are displayable, how they are
//! classified, where they are served from, and in which order.

use crate::constants::{ACADEMIES_PREFIX, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::models::{MediaItem, MediaType, StoredObject};

/// Listing prefix for an academy: `academies/{academy_id}/`.
pub fn academy_prefix(academy_id: &str) -> String {
    format!("{}/{}/", ACADEMIES_PREFIX, academy_id)
}

fn has_extension(key: &str, extensions: &[&str]) -> bool {
    let key = key.to_lowercase();
    extensions.iter().any(|ext| key.ends_with(ext))
}

/// Whether the key names a displayable image or video (case-insensitive).
pub fn is_supported_media(key: &str) -> bool {
    has_extension(key, IMAGE_EXTENSIONS) || has_extension(key, VIDEO_EXTENSIONS)
}

pub fn infer_media_type(key: &str) -> MediaType {
    if has_extension(key, VIDEO_EXTENSIONS) {
        MediaType::Video
    } else {
        MediaType::Image
    }
}

/// Builds public URLs for stored objects.
///
/// With a CDN domain: `https://{domain}/{key}`; otherwise the bucket's
/// virtual-hosted URL `https://{bucket}.s3.amazonaws.com/{key}`.
#[derive(Debug, Clone)]
pub struct MediaUrlBuilder {
    bucket: String,
    cdn_domain: Option<String>,
}

impl MediaUrlBuilder {
    pub fn new(bucket: impl Into<String>, cdn_domain: Option<String>) -> Self {
        Self {
            bucket: bucket.into(),
            cdn_domain: cdn_domain.filter(|d| !d.is_empty()),
        }
    }

    pub fn public_url(&self, key: &str) -> String {
        match self.cdn_domain {
            Some(ref domain) => format!("https://{}/{}", domain, key),
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket, key),
        }
    }
}

impl From<&crate::Config> for MediaUrlBuilder {
    fn from(config: &crate::Config) -> Self {
        Self::new(
            config.s3_bucket_name.clone(),
            config.cloudfront_domain.clone(),
        )
    }
}

fn to_media_item(object: StoredObject, urls: &MediaUrlBuilder) -> MediaItem {
    let filename = object
        .key
        .rsplit('/')
        .next()
        .unwrap_or(object.key.as_str())
        .to_string();

    MediaItem {
        url: urls.public_url(&object.key),
        media_type: infer_media_type(&object.key),
        filename,
        size: object.size,
        last_modified: object.last_modified.map(|ts| ts.to_rfc3339()),
    }
}

/// Turn a raw listing into the media list served to screens.
///
/// Unsupported keys are dropped. The result is sorted ascending by
/// `last_modified` (missing treated as `""`) and then reversed, so the newest
/// items come first and items without a timestamp end up last.
pub fn build_media_list<I>(objects: I, urls: &MediaUrlBuilder) -> Vec<MediaItem>
where
    I: IntoIterator<Item = StoredObject>,
{
    let mut items: Vec<MediaItem> = objects
        .into_iter()
        .filter(|object| is_supported_media(&object.key))
        .map(|object| to_media_item(object, urls))
        .collect();

    items.sort_by(|a, b| {
        let a = a.last_modified.as_deref().unwrap_or("");
        let b = b.last_modified.as_deref().unwrap_or("");
        a.cmp(b)
    });
    items.reverse();
    items
}
