//! Detect invisible TrustMark watermarks and report them as JSON.
//!
//! TrustMark hides a short payload (an identifier, often a C2PA manifest URL)
//! in the pixels of an image. This crate does not implement the codec: it
//! loads the image, hands it to a [`WatermarkDecoder`] backend and maps the
//! outcome onto a fixed JSON record that host processes parse.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use trustmark_decode::{detect_watermark, DetectOptions};
//!
//! let report = detect_watermark(Path::new("photo.png"), &DetectOptions::default());
//! println!("{}", report.to_json_pretty().unwrap());
//! ```
//!
//! # Custom backends
//!
//! Anything implementing [`WatermarkDecoder`] can be plugged in with
//! [`detect_with`]. The ONNX-based `trustmark` backend is available behind
//! the `trustmark` feature.

#![deny(missing_docs)]

pub mod decoder;
mod engine;
pub mod error;
pub mod model;
pub mod payload;
pub mod report;
pub mod schema;

pub use decoder::{backend_available, DecodedWatermark, WatermarkDecoder};
pub use engine::{detect_watermark, detect_with, load_rgb, DetectOptions, DEFAULT_MODELS_DIR};
pub use error::{Error, Result};
pub use model::ModelType;
pub use report::{DetectionReport, WatermarkData};
pub use schema::WatermarkSchema;
