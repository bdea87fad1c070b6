//! Square crop selection for profile pictures and the canvas export that
//! turns it into an upload-ready JPEG.
//!
//! DESIGN
//! ======
//! The cropper works in displayed-image pixels while the user drags; the
//! rectangle is converted to natural pixels only once, right before export.
//! All geometry is pure so it can be unit-tested without a browser.

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;

use std::fmt;

use models::user::MAX_AVATAR_BYTES;

/// Smallest crop side in displayed pixels, unless the image itself is smaller.
pub const MIN_CROP_SIZE: f64 = 32.0;

/// Initial crop side as a fraction of the shorter image edge.
const INITIAL_FRACTION: f64 = 0.8;

/// Encoder quality passed to `canvas.toBlob`.
pub const JPEG_QUALITY: f64 = 0.9;

pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// Longest side of the exported avatar, in pixels. Larger crops are scaled down.
pub const MAX_OUTPUT_SIDE: u32 = 512;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// Centered square covering most of an image of the given size.
    #[must_use]
    pub fn centered_square(image_width: f64, image_height: f64) -> Self {
        let side = image_width.min(image_height).max(0.0) * INITIAL_FRACTION;
        Self { x: (image_width - side) / 2.0, y: (image_height - side) / 2.0, width: side, height: side }
            .clamp_to(image_width, image_height)
    }

    /// Keep the rectangle inside `[0, image_width] x [0, image_height]`,
    /// shrinking it if it is larger than the image.
    #[must_use]
    pub fn clamp_to(self, image_width: f64, image_height: f64) -> Self {
        if !(image_width > 0.0 && image_height > 0.0) {
            return Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
        }
        let width = clamp_side(self.width, image_width);
        let height = clamp_side(self.height, image_height);
        Self {
            x: finite_or_zero(self.x).clamp(0.0, image_width - width),
            y: finite_or_zero(self.y).clamp(0.0, image_height - height),
            width,
            height,
        }
    }

    /// Shrink the longer side so the rectangle is square, keeping the center.
    #[must_use]
    pub fn square(self) -> Self {
        let side = self.width.min(self.height);
        Self {
            x: self.x + (self.width - side) / 2.0,
            y: self.y + (self.height - side) / 2.0,
            width: side,
            height: side,
        }
    }

    /// Drag by `(dx, dy)` without leaving the image.
    #[must_use]
    pub fn moved_by(self, dx: f64, dy: f64, image_width: f64, image_height: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }.clamp_to(image_width, image_height)
    }

    /// Resize to a square of `side` around the current center.
    #[must_use]
    pub fn resized(self, side: f64, image_width: f64, image_height: f64) -> Self {
        if !(image_width > 0.0 && image_height > 0.0) {
            return self.clamp_to(image_width, image_height);
        }
        let side = clamp_side(side, image_width.min(image_height));
        let (cx, cy) = self.center();
        Self { x: cx - side / 2.0, y: cy - side / 2.0, width: side, height: side }.clamp_to(image_width, image_height)
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Map a rectangle measured on the displayed image onto the image's
    /// natural pixel grid. Returns `self` unchanged if the displayed size is
    /// unknown (zero).
    #[must_use]
    pub fn to_natural(self, displayed: (f64, f64), natural: (f64, f64)) -> Self {
        let (dw, dh) = displayed;
        let (nw, nh) = natural;
        if !(dw > 0.0 && dh > 0.0) {
            return self;
        }
        let sx = nw / dw;
        let sy = nh / dh;
        Self { x: self.x * sx, y: self.y * sy, width: self.width * sx, height: self.height * sy }.clamp_to(nw, nh)
    }

    /// Canvas size for the export: the crop rounded to whole pixels, scaled
    /// down so neither side exceeds [`MAX_OUTPUT_SIDE`], never zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn output_size(self) -> (u32, u32) {
        let (w, h) = (finite_or_zero(self.width).max(0.0), finite_or_zero(self.height).max(0.0));
        let longest = w.max(h);
        let limit = f64::from(MAX_OUTPUT_SIDE);
        let scale = if longest > limit { limit / longest } else { 1.0 };
        let px = |v: f64| (v * scale).round().clamp(1.0, limit) as u32;
        (px(w), px(h))
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Inline style positioning the selection overlay.
    #[must_use]
    pub fn overlay_style(self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Reject exports the server would refuse.
///
/// # Errors
///
/// [`CropError::EmptyExport`] for an empty blob and [`CropError::TooLarge`]
/// above [`MAX_AVATAR_BYTES`].
#[allow(clippy::cast_precision_loss)]
pub fn check_export_size(size_bytes: f64) -> Result<(), CropError> {
    if !(size_bytes > 0.0) {
        return Err(CropError::EmptyExport);
    }
    if size_bytes > MAX_AVATAR_BYTES as f64 {
        return Err(CropError::TooLarge);
    }
    Ok(())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn clamp_side(side: f64, limit: f64) -> f64 {
    let floor = MIN_CROP_SIZE.min(limit);
    finite_or_zero(side).clamp(floor, limit)
}

/// Why a crop could not be exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropError {
    /// The file could not be decoded as an image.
    Decode,
    /// The off-screen canvas could not be created or drawn on.
    Canvas,
    /// The canvas produced no data.
    EmptyExport,
    /// The encoded image is larger than the server accepts.
    TooLarge,
}

impl CropError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Decode => "This image could not be read. Please choose another file.",
            Self::Canvas => "Your browser could not prepare the image.",
            Self::EmptyExport => "The cropped image is empty.",
            Self::TooLarge => "The cropped image is too large. Please choose a smaller area.",
        }
    }
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decode `file`, draw `rect` (natural pixels) onto an off-screen canvas
/// sized by [`CropRect::output_size`], and serialize it as a JPEG blob.
///
/// # Errors
///
/// [`CropError::Decode`] if the file is not a readable image,
/// [`CropError::Canvas`] if the 2D context is unavailable,
/// [`CropError::EmptyExport`] if the browser returns no blob, and
/// [`CropError::TooLarge`] if the JPEG exceeds the avatar upload limit.
#[cfg(feature = "hydrate")]
pub async fn crop_to_jpeg(file: &web_sys::File, rect: CropRect) -> Result<web_sys::Blob, CropError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or(CropError::Canvas)?;
    let promise = window.create_image_bitmap_with_blob(file).map_err(|_| CropError::Decode)?;
    let bitmap: web_sys::ImageBitmap = JsFuture::from(promise)
        .await
        .map_err(|_| CropError::Decode)?
        .dyn_into()
        .map_err(|_| CropError::Decode)?;

    let rect = rect.clamp_to(f64::from(bitmap.width()), f64::from(bitmap.height()));
    if rect.is_empty() {
        bitmap.close();
        return Err(CropError::EmptyExport);
    }
    let (out_w, out_h) = rect.output_size();

    let canvas: web_sys::HtmlCanvasElement = window
        .document()
        .ok_or(CropError::Canvas)?
        .create_element("canvas")
        .map_err(|_| CropError::Canvas)?
        .dyn_into()
        .map_err(|_| CropError::Canvas)?;
    canvas.set_width(out_w);
    canvas.set_height(out_h);
    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| CropError::Canvas)?
        .ok_or(CropError::Canvas)?
        .dyn_into()
        .map_err(|_| CropError::Canvas)?;

    let drawn = ctx.draw_image_with_image_bitmap_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        &bitmap,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        0.0,
        0.0,
        f64::from(out_w),
        f64::from(out_h),
    );
    bitmap.close();
    drawn.map_err(|_| CropError::Canvas)?;

    canvas_to_jpeg(&canvas).await
}

#[cfg(feature = "hydrate")]
async fn canvas_to_jpeg(canvas: &web_sys::HtmlCanvasElement) -> Result<web_sys::Blob, CropError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let (tx, rx) = futures::channel::oneshot::channel::<Option<web_sys::Blob>>();
    let callback: Closure<dyn FnMut(JsValue)> = Closure::once(move |value: JsValue| {
        if tx.send(value.dyn_into::<web_sys::Blob>().ok()).is_err() {
            log::warn!("crop export finished after the cropper was closed");
        }
    });
    canvas
        .to_blob_with_type_and_encoder_options(
            callback.as_ref().unchecked_ref(),
            OUTPUT_CONTENT_TYPE,
            &JsValue::from_f64(JPEG_QUALITY),
        )
        .map_err(|_| CropError::Canvas)?;

    let blob = rx.await.map_err(|_| CropError::EmptyExport)?.ok_or(CropError::EmptyExport)?;
    drop(callback);
    check_export_size(blob.size())?;
    Ok(blob)
}
