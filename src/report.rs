//! The JSON record printed for the host process.

use serde::Serialize;

/// Outcome of one detection run.
///
/// Serialized in camelCase. `watermarkData` appears only on a hit and
/// `error` only on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Whether detection ran to completion.
    pub success: bool,
    /// Whether a watermark was found.
    pub has_watermark: bool,
    /// Decoded watermark, present only when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_data: Option<WatermarkData>,
    /// Failure description, present only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Payload details of a detected watermark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkData {
    /// Decoded secret as text.
    pub identifier: String,
    /// Schema name, e.g. `BCH_5`.
    pub schema: String,
    /// Decoder output before interpretation.
    pub raw: String,
    /// The identifier when it is a URL; serialized as `null` otherwise.
    pub manifest_url: Option<String>,
}

impl DetectionReport {
    /// Detection completed and found nothing.
    #[must_use]
    pub fn no_watermark() -> Self {
        Self {
            success: true,
            has_watermark: false,
            watermark_data: None,
            error: None,
        }
    }

    /// Detection completed and found a watermark.
    #[must_use]
    pub fn found(data: WatermarkData) -> Self {
        Self {
            success: true,
            has_watermark: true,
            watermark_data: Some(data),
            error: None,
        }
    }

    /// Detection could not complete.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            has_watermark: false,
            watermark_data: None,
            error: Some(message.into()),
        }
    }

    /// Two-space indented JSON, the format of a normal run.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; a report of plain strings and booleans
    /// does not produce one in practice.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Single-line JSON, used for startup errors.
    ///
    /// # Errors
    ///
    /// See [`DetectionReport::to_json_pretty`].
    pub fn to_json_compact(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
