//! Error types for chart computation

use thiserror::Error;

/// Errors that abort a whole chart
///
/// Problems with a single body record are not errors at this level; the
/// record is dropped and the chart is still drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Birth chart requested without a usable ascendant
    #[error("ascendant is missing or has no valid sign; cannot orient the chart")]
    MissingAscendant,

    /// House geometry that cannot back a twelve-house chart
    #[error("invalid house geometry: {reason}")]
    InvalidGeometry { reason: String },
}

impl ChartError {
    /// Create an invalid geometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
