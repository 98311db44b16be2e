//! Kundali Chart - North Indian style Vedic astrology chart layout
//!
//! This library places celestial bodies into the twelve houses of a diamond
//! chart, lays out their labels, and renders the result as SVG. It covers
//! both the birth (rasi) chart, where houses follow the ascendant's sign,
//! and the Navamsha divisional chart, where houses are supplied directly.
//!
//! Positions are not computed here; they come from an astrology service
//! response (see [`ingest`]).
//!
//! # Example
//!
//! ```rust
//! use kundali_chart::{render, ChartKind};
//!
//! let svg = render(
//!     r#"[{"name": "Ascendant", "normDegree": 3.2, "current_sign": 1, "isRetro": "false"}]"#,
//!     ChartKind::Birth,
//! )
//! .unwrap();
//! assert!(svg.contains("As 3° (1)"));
//! ```

pub mod chart;
pub mod ingest;
pub mod renderer;
pub mod stylesheet;
pub mod summary;

pub use chart::{
    compute, BodyRecord, ChartCanvas, ChartConfig, ChartError, ChartKind, ChartLayout,
    HouseGeometry, LabelDescriptor,
};
pub use ingest::{parse_response, IngestError};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error decoding the input
    #[error("input error: {0}")]
    Ingest(#[from] IngestError),

    /// Error laying out the chart
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// Error encoding the output
    #[error("output error: {0}")]
    Output(serde_json::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// House polygons shared by every chart
    pub geometry: HouseGeometry,
    /// Label layout configuration
    pub chart: ChartConfig,
    /// SVG output configuration; per-kind defaults when unset
    pub svg: Option<SvgConfig>,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Debug mode: print house occupancy to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the house geometry
    pub fn with_geometry(mut self, geometry: HouseGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the label layout configuration
    pub fn with_chart(mut self, config: ChartConfig) -> Self {
        self.chart = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = Some(config);
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// SVG configuration for a chart kind
    pub fn svg_for(&self, kind: ChartKind) -> SvgConfig {
        self.svg.clone().unwrap_or_else(|| SvgConfig::for_kind(kind))
    }
}

/// Decode a response and lay out its chart with default configuration
pub fn layout(source: &str, kind: ChartKind) -> Result<ChartLayout, RenderError> {
    layout_with_config(source, kind, &RenderConfig::default())
}

/// Decode a response and lay out its chart
pub fn layout_with_config(
    source: &str,
    kind: ChartKind,
    config: &RenderConfig,
) -> Result<ChartLayout, RenderError> {
    let records = parse_response(source, kind)?;
    let result = compute(&records, kind, &config.geometry, &config.chart)?;

    if config.debug {
        eprintln!("=== {} ===", kind.title());
        if let Some(rotation) = &result.rotation {
            eprintln!("ascendant sign: {}", rotation.ascendant());
        }
        for house in chart::HouseId::all() {
            let texts: Vec<&str> = result.labels_in(house).map(|l| l.text.as_str()).collect();
            eprintln!("[house{:<2}] {}", house.index(), texts.join(" | "));
        }
        eprintln!("====================");
    }

    Ok(result)
}

/// Label descriptors of a laid-out chart as pretty-printed JSON
pub fn labels_json(layout: &ChartLayout) -> Result<String, RenderError> {
    serde_json::to_string_pretty(&layout.labels).map_err(RenderError::Output)
}

/// Render a response to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use kundali_chart::{render, ChartKind};
///
/// let svg = render(
///     r#"{"statusCode": 200, "output": {"0": {"name": "Sun", "house_number": 1, "isRetro": "true"}}}"#,
///     ChartKind::Divisional,
/// )
/// .unwrap();
///
/// assert!(svg.contains("Navamsha Chart"));
/// assert!(svg.contains(r#"class="planet-label retrograde""#));
/// ```
pub fn render(source: &str, kind: ChartKind) -> Result<String, RenderError> {
    render_with_config(source, kind, &RenderConfig::default())
}

/// Render a response to SVG with custom configuration
pub fn render_with_config(
    source: &str,
    kind: ChartKind,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let result = layout_with_config(source, kind, config)?;
    Ok(render_svg_with_stylesheet(
        &result,
        &config.geometry,
        &config.svg_for(kind),
        &config.stylesheet,
    ))
}
