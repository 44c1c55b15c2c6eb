//! Image naming convention.
//!
//! Every image is addressed by two derived strings: the review-table key
//! (`image{id}.jpg`) and the object-store key, which places that name under
//! a configured folder prefix.

use crate::types::ImageId;

/// Folder prefix under which the moodboard images live in the bucket.
pub const DEFAULT_IMAGE_PREFIX: &str = "Prompts/Final images moodboard/";

/// Review-table key for an image.
///
/// # Examples
///
/// ```
/// use moodboard_core::naming::image_name;
///
/// assert_eq!(image_name(7), "image7.jpg");
/// ```
pub fn image_name(image_id: ImageId) -> String {
    format!("image{image_id}.jpg")
}

/// Object-store key for an image: `{prefix}image{id}.jpg`.
///
/// A missing trailing `/` on a non-empty prefix is supplied, so
/// `"moodboard"` and `"moodboard/"` resolve to the same key.
///
/// # Examples
///
/// ```
/// use moodboard_core::naming::storage_key;
///
/// assert_eq!(
///     storage_key("Prompts/Final images moodboard/", 3),
///     "Prompts/Final images moodboard/image3.jpg"
/// );
/// assert_eq!(storage_key("", 3), "image3.jpg");
/// ```
pub fn storage_key(prefix: &str, image_id: ImageId) -> String {
    let name = image_name(image_id);
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}
