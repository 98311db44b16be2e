//! Configuration for SVG rendering

use crate::chart::{BoundingBox, ChartKind};

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Visible area of the chart
    pub view_box: BoundingBox,

    /// Font size of body labels
    pub label_font_size: f64,

    /// Font size of empty-house markers
    pub placeholder_font_size: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "kc-" for "kc-planet-label")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self::for_kind(ChartKind::Birth)
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a chart kind; the divisional chart is drawn slightly smaller
    pub fn for_kind(kind: ChartKind) -> Self {
        let (height, label, placeholder) = match kind {
            ChartKind::Birth => (800.0, 13.0, 16.0),
            ChartKind::Divisional => (780.0, 12.0, 14.0),
        };
        Self {
            view_box: BoundingBox::new(0.0, 0.0, 780.0, height),
            label_font_size: label,
            placeholder_font_size: placeholder,
            standalone: true,
            pretty_print: true,
            class_prefix: None,
        }
    }

    /// Set the view box
    pub fn with_view_box(mut self, view_box: BoundingBox) -> Self {
        self.view_box = view_box;
        self
    }

    /// Set the label and placeholder font sizes
    pub fn with_font_sizes(mut self, label: f64, placeholder: f64) -> Self {
        self.label_font_size = label;
        self.placeholder_font_size = placeholder;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
