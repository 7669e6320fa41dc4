//! Decoder backends.
//!
//! The watermark codec is not implemented here. [`WatermarkDecoder`] is the
//! seam to whichever library does the decoding; with the `trustmark` feature
//! enabled, [`TrustmarkDecoder`] wraps Adobe's ONNX-based `trustmark` crate.

use image::RgbImage;

use crate::error::Result;

/// A watermark found in an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWatermark {
    /// Secret as returned by the backend, text or a bit string.
    pub secret: String,
    /// Integer code of the ECC schema the payload was encoded with.
    pub schema_code: u8,
}

/// Extracts an embedded watermark from an RGB image.
pub trait WatermarkDecoder {
    /// Decode the watermark in `image`, taking ownership of its pixels.
    ///
    /// Returns `Ok(None)` when no watermark is present.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails for any reason other than the
    /// watermark being absent.
    fn decode(&self, image: RgbImage) -> Result<Option<DecodedWatermark>>;
}

impl<D: WatermarkDecoder + ?Sized> WatermarkDecoder for &D {
    fn decode(&self, image: RgbImage) -> Result<Option<DecodedWatermark>> {
        (**self).decode(image)
    }
}

impl<D: WatermarkDecoder + ?Sized> WatermarkDecoder for Box<D> {
    fn decode(&self, image: RgbImage) -> Result<Option<DecodedWatermark>> {
        (**self).decode(image)
    }
}

/// Whether a decoder backend was compiled into this build.
#[must_use]
pub const fn backend_available() -> bool {
    cfg!(feature = "trustmark")
}

#[cfg(feature = "trustmark")]
pub use self::trustmark_backend::TrustmarkDecoder;

#[cfg(feature = "trustmark")]
mod trustmark_backend {
    use std::path::Path;

    use image::{DynamicImage, RgbImage};
    use log::debug;

    use super::{DecodedWatermark, WatermarkDecoder};
    use crate::error::{Error, Result};
    use crate::model::ModelType;
    use crate::schema::schema_code_for_data_bits;

    /// Decoder backed by the `trustmark` crate.
    ///
    /// The schema of a hit is read back from the payload itself: the crate
    /// trims the secret to the data length of the schema in its version bits.
    pub struct TrustmarkDecoder {
        inner: trustmark::Trustmark,
    }

    impl TrustmarkDecoder {
        /// Load the model pair for `model` from `models_dir`.
        ///
        /// # Errors
        ///
        /// Returns [`Error::Backend`] if the models cannot be loaded.
        pub fn new(models_dir: &Path, model: ModelType) -> Result<Self> {
            let variant = match model {
                ModelType::P => trustmark::Variant::P,
                ModelType::Q => trustmark::Variant::Q,
            };
            debug!(
                "loading TrustMark {model} models from {}",
                models_dir.display()
            );
            // The version only affects encoding.
            let inner = trustmark::Trustmark::new(models_dir, variant, trustmark::Version::Bch5)
                .map_err(|e| Error::Backend(e.to_string()))?;
            Ok(Self { inner })
        }
    }

    impl WatermarkDecoder for TrustmarkDecoder {
        fn decode(&self, image: RgbImage) -> Result<Option<DecodedWatermark>> {
            match self.inner.decode(DynamicImage::ImageRgb8(image)) {
                Ok(secret) => {
                    let schema_code = schema_code_for_data_bits(secret.len());
                    debug!("decoded {}-bit payload (schema code {schema_code})", secret.len());
                    Ok(Some(DecodedWatermark {
                        secret,
                        schema_code,
                    }))
                }
                Err(trustmark::Error::CorruptWatermark) => Ok(None),
                Err(e) => Err(Error::Backend(e.to_string())),
            }
        }
    }
}
