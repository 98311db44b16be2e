//! Configuration for chart label layout

use super::types::ChartKind;

/// Configuration options for label layout
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Vertical distance between stacked labels on the birth chart
    pub birth_row_height: f64,

    /// Vertical distance between stacked labels on the divisional chart.
    /// Narrower because those labels carry no degree text.
    pub divisional_row_height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            birth_row_height: 22.0,
            divisional_row_height: 18.0,
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the birth chart row height
    pub fn with_birth_row_height(mut self, height: f64) -> Self {
        self.birth_row_height = height;
        self
    }

    /// Set the divisional chart row height
    pub fn with_divisional_row_height(mut self, height: f64) -> Self {
        self.divisional_row_height = height;
        self
    }

    /// Row height used for a chart kind
    pub fn row_height(&self, kind: ChartKind) -> f64 {
        match kind {
            ChartKind::Birth => self.birth_row_height,
            ChartKind::Divisional => self.divisional_row_height,
        }
    }
}
