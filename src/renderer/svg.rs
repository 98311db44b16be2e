//! SVG generation from chart layouts

use std::fmt::Write as _;

use crate::chart::{BoundingBox, ChartLayout, HouseGeometry, HouseId, LabelDescriptor, Point};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Color tokens referenced by the chart's CSS rules
const CHART_TOKENS: [&str; 6] = [
    "background",
    "border",
    "foreground",
    "muted-foreground",
    "primary",
    "destructive",
];

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    title: Option<String>,
    styles: Vec<String>,
    houses: Vec<String>,
    labels: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            title: None,
            styles: vec![],
            houses: vec![],
            labels: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Set the accessible title of the chart
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Add CSS custom properties from a stylesheet and the label class rules
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut css = String::from(":root {");
        for token in CHART_TOKENS {
            let _ = write!(css, " --{}: {};", token, stylesheet.resolve_or_default(token));
        }
        css.push_str(" }");
        self.styles.push(css);

        let p = self.prefix();
        let font_family = stylesheet.font_family().unwrap_or("'Inter', sans-serif");
        self.styles.push(format!(
            ".{p}house {{ fill: var(--background); stroke: var(--border); stroke-width: 2; }}"
        ));
        self.styles.push(format!(
            ".{p}planet-label {{ font-family: {font_family}; font-size: {}px; font-weight: bold; fill: var(--foreground); pointer-events: none; }}",
            self.config.label_font_size
        ));
        self.styles.push(format!(
            ".{p}planet-label.{p}retrograde {{ fill: var(--destructive); }}"
        ));
        self.styles.push(format!(
            ".{p}ascendant-label {{ fill: var(--primary); }}"
        ));
        self.styles.push(format!(
            ".{p}empty-house-marker {{ fill: var(--muted-foreground); font-size: {}px; }}",
            self.config.placeholder_font_size
        ));
    }

    /// Add a house polygon
    pub fn add_house(&mut self, house: HouseId, points: &[Point]) {
        let points_str = points
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",");

        self.houses.push(format!(
            r#"{}<polygon id="{}" class="{}house" points="{}"/>"#,
            self.indent_str(),
            house.element_id(),
            self.prefix(),
            points_str
        ));
    }

    /// Add a positioned label
    pub fn add_label(&mut self, label: &LabelDescriptor) {
        let prefix = self.prefix();
        let class_list = label
            .classes()
            .iter()
            .map(|class| format!("{}{}", prefix, class))
            .collect::<Vec<_>>()
            .join(" ");

        self.labels.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            class_list,
            label.x,
            label.y,
            escape_xml(&label.text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let BoundingBox {
            x,
            y,
            width,
            height,
        } = self.config.view_box;
        let nl = self.newline();
        let indent = self.indent_str();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
            x, y, width, height
        );
        svg.push_str(nl);

        if let Some(title) = &self.title {
            let _ = write!(svg, "{}<title>{}</title>", indent, escape_xml(title));
            svg.push_str(nl);
        }

        if !self.styles.is_empty() {
            svg.push_str(indent);
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(indent);
                svg.push_str(indent);
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(indent);
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        // Houses first so labels paint on top
        for elem in self.houses.iter().chain(&self.labels) {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a chart layout to SVG with the default stylesheet
pub fn render_svg(layout: &ChartLayout, geometry: &HouseGeometry, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(layout, geometry, config, &Stylesheet::default())
}

/// Render a chart layout to SVG using the given stylesheet
pub fn render_svg_with_stylesheet(
    layout: &ChartLayout,
    geometry: &HouseGeometry,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.set_title(layout.kind.title());
    builder.add_stylesheet(stylesheet);

    for house in HouseId::all() {
        builder.add_house(house, geometry.polygon(house));
    }
    for label in &layout.labels {
        builder.add_label(label);
    }

    builder.build()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
