//! Checks applied to a selected profile picture before the cropper opens.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use models::user::{AVATAR_CONTENT_TYPES, MAX_AVATAR_BYTES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadError {
    Empty,
    UnsupportedType,
    TooLarge,
}

impl UploadError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "The selected file is empty.",
            Self::UnsupportedType => "Please choose a JPEG, PNG, or WebP image.",
            Self::TooLarge => "Images must be 2 MB or smaller.",
        }
    }
}

/// Validate the browser-reported MIME type and size of a picked file.
///
/// # Errors
///
/// Returns the first rule the file breaks.
#[allow(clippy::cast_precision_loss)]
pub fn validate_image(content_type: &str, size_bytes: f64) -> Result<(), UploadError> {
    if !(size_bytes > 0.0) {
        return Err(UploadError::Empty);
    }
    let content_type = content_type.trim().to_ascii_lowercase();
    if !AVATAR_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(UploadError::UnsupportedType);
    }
    if size_bytes > MAX_AVATAR_BYTES as f64 {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// First file of an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = leptos::prelude::event_target(ev);
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}

/// Object URL for previewing `file`; release with [`revoke_object_url`].
#[cfg(feature = "hydrate")]
pub fn object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

#[cfg(feature = "hydrate")]
pub fn revoke_object_url(url: &str) {
    if web_sys::Url::revoke_object_url(url).is_err() {
        log::debug!("object url already released");
    }
}
