//! Detection pipeline: load the image, run a decoder, shape the report.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{ImageError, RgbImage};
use log::{debug, warn};

use crate::decoder::WatermarkDecoder;
use crate::error::{Error, Result};
use crate::model::ModelType;
use crate::payload;
use crate::report::{DetectionReport, WatermarkData};
use crate::schema;

/// Default directory searched for the ONNX model files.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Options for [`detect_watermark`].
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Model variant as given on the command line (`P` or `Q`).
    pub model_type: String,
    /// Directory holding the model files.
    pub models_dir: PathBuf,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            model_type: ModelType::default().code().to_string(),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
        }
    }
}

/// Detect a watermark in the image at `image_path` with the compiled-in backend.
///
/// The image is loaded before the models so a missing file is reported as
/// such regardless of backend state. Never fails: every error is folded into
/// a report with `success: false`.
#[must_use]
pub fn detect_watermark(image_path: &Path, opts: &DetectOptions) -> DetectionReport {
    let outcome = load_rgb(image_path).and_then(|image| {
        let decoder = open_decoder(opts)?;
        decode_image(&decoder, image)
    });
    outcome.unwrap_or_else(|e| failure_report(image_path, &e))
}

/// Detect a watermark in the image at `image_path` using `decoder`.
#[must_use]
pub fn detect_with<D: WatermarkDecoder + ?Sized>(decoder: &D, image_path: &Path) -> DetectionReport {
    load_rgb(image_path)
        .and_then(|image| decode_image(decoder, image))
        .unwrap_or_else(|e| failure_report(image_path, &e))
}

fn decode_image<D: WatermarkDecoder + ?Sized>(
    decoder: &D,
    image: RgbImage,
) -> Result<DetectionReport> {
    debug!("decoding {}x{} image", image.width(), image.height());

    let Some(hit) = decoder.decode(image)? else {
        debug!("no watermark present");
        return Ok(DetectionReport::no_watermark());
    };
    if hit.secret.is_empty() {
        debug!("watermark present but secret is empty");
        return Ok(DetectionReport::no_watermark());
    }

    let identifier = payload::identifier_from_secret(&hit.secret);
    let manifest_url = payload::manifest_url(&identifier);
    Ok(DetectionReport::found(WatermarkData {
        schema: schema::schema_name(hit.schema_code).to_string(),
        manifest_url,
        identifier,
        raw: hit.secret,
    }))
}

/// Open an image and convert it to 8-bit RGB.
///
/// # Errors
///
/// Returns [`Error::ImageNotFound`] if the path does not exist and
/// [`Error::Image`] if it cannot be decoded.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    match image::open(path) {
        Ok(img) => Ok(img.to_rgb8()),
        Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            Err(Error::ImageNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

fn failure_report(image_path: &Path, err: &Error) -> DetectionReport {
    warn!("detection failed for {}: {err}", image_path.display());
    match err {
        Error::ImageNotFound(_) => DetectionReport::failure(err.to_string()),
        _ => DetectionReport::failure(format!("Watermark detection failed: {err}")),
    }
}

#[cfg(feature = "trustmark")]
fn open_decoder(opts: &DetectOptions) -> Result<Box<dyn WatermarkDecoder>> {
    let model: ModelType = opts.model_type.parse()?;
    let decoder = crate::decoder::TrustmarkDecoder::new(&opts.models_dir, model)?;
    Ok(Box::new(decoder))
}

#[cfg(not(feature = "trustmark"))]
fn open_decoder(opts: &DetectOptions) -> Result<Box<dyn WatermarkDecoder>> {
    let _: ModelType = opts.model_type.parse()?;
    Err(Error::MissingDependency)
}
