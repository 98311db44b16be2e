//! Core types for chart computation

use std::fmt;

use serde::Serialize;

/// A 2D point in the chart coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a house cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box enclosing all points, or `None` for an empty slice
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Which chart is being drawn, and therefore how bodies are assigned to houses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Rasi chart: bodies are placed by zodiac sign, rotated by the ascendant
    Birth,
    /// Navamsha chart: bodies carry a precomputed house number
    Divisional,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Birth => "Vedic Astrology Chart",
            ChartKind::Divisional => "Navamsha Chart",
        }
    }
}

/// One of the twelve zodiac signs, numbered 1 (Aries) through 12 (Pisces)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sign(u8);

impl Sign {
    pub const COUNT: u8 = 12;

    /// Returns `None` outside 1..=12
    pub fn new(index: i64) -> Option<Self> {
        if (1..=Self::COUNT as i64).contains(&index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The sign `steps` places further along the zodiac, wrapping after Pisces
    pub fn advance(self, steps: u8) -> Sign {
        Sign((self.0 - 1 + steps % Self::COUNT) % Self::COUNT + 1)
    }

    /// Iterate all signs in zodiac order
    pub fn all() -> impl Iterator<Item = Sign> {
        (1..=Self::COUNT).map(Sign)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical house cell of the diamond chart, numbered 1..=12 anti-clockwise from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HouseId(u8);

impl HouseId {
    pub const COUNT: u8 = 12;
    pub const FIRST: HouseId = HouseId(1);
    pub const LAST: HouseId = HouseId(12);

    /// Returns `None` outside 1..=12
    pub fn new(index: i64) -> Option<Self> {
        if (1..=Self::COUNT as i64).contains(&index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Iterate all houses in anti-clockwise order starting at house 1
    pub fn all() -> impl Iterator<Item = HouseId> {
        (1..=Self::COUNT).map(HouseId)
    }

    /// Element id of this house's polygon
    pub fn element_id(self) -> String {
        format!("house{}", self.0)
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A celestial body (or the ascendant point) that can appear on a chart
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Planet {
    Ascendant,
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
    /// A name outside the known set, kept verbatim
    Other(String),
}

impl Planet {
    /// Map an upstream body name to a planet; unknown names are preserved
    pub fn from_name(name: &str) -> Self {
        match name {
            "Ascendant" => Planet::Ascendant,
            "Sun" => Planet::Sun,
            "Moon" => Planet::Moon,
            "Mars" => Planet::Mars,
            "Mercury" => Planet::Mercury,
            "Jupiter" => Planet::Jupiter,
            "Venus" => Planet::Venus,
            "Saturn" => Planet::Saturn,
            "Rahu" => Planet::Rahu,
            "Ketu" => Planet::Ketu,
            "Uranus" => Planet::Uranus,
            "Neptune" => Planet::Neptune,
            "Pluto" => Planet::Pluto,
            other => Planet::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Planet::Ascendant => "Ascendant",
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::Other(name) => name,
        }
    }

    /// Two-letter chart abbreviation
    ///
    /// Names outside the known set fall back to their first two characters.
    pub fn symbol(&self) -> String {
        let known = match self {
            Planet::Ascendant => "As",
            Planet::Sun => "Su",
            Planet::Moon => "Mo",
            Planet::Mars => "Ma",
            Planet::Mercury => "Me",
            Planet::Jupiter => "Ju",
            Planet::Venus => "Ve",
            Planet::Saturn => "Sa",
            Planet::Rahu => "Ra",
            Planet::Ketu => "Ke",
            Planet::Uranus => "Ur",
            Planet::Neptune => "Ne",
            Planet::Pluto => "Pl",
            Planet::Other(name) => return name.chars().take(2).collect(),
        };
        known.to_string()
    }

    pub fn is_ascendant(&self) -> bool {
        matches!(self, Planet::Ascendant)
    }

    /// The seven visible grahas that take part in the chara karaka scheme
    pub fn is_classical(&self) -> bool {
        matches!(
            self,
            Planet::Sun
                | Planet::Moon
                | Planet::Mars
                | Planet::Mercury
                | Planet::Jupiter
                | Planet::Venus
                | Planet::Saturn
        )
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated body of the birth chart
#[derive(Debug, Clone, PartialEq)]
pub struct BirthBody {
    pub planet: Planet,
    pub sign: Sign,
    /// Position within the sign, 0..30
    pub degree: f64,
    /// Absolute ecliptic longitude, when supplied
    pub full_degree: Option<f64>,
    pub retrograde: bool,
}

/// A validated body of the divisional chart
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionalBody {
    pub planet: Planet,
    /// House number as supplied upstream, before the display shift
    pub house_number: i64,
    /// Cell the body is drawn in
    pub cell: HouseId,
    pub sign: Option<Sign>,
    pub retrograde: bool,
}

/// A positioned text label, ready to be drawn by an output backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelDescriptor {
    /// House cell this label belongs to
    pub house: u8,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub is_ascendant: bool,
    pub is_retrograde: bool,
    pub is_placeholder: bool,
}

impl LabelDescriptor {
    /// CSS classes for this label, in drawing order
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["planet-label"];
        if self.is_placeholder {
            classes.push("empty-house-marker");
        }
        if self.is_ascendant {
            classes.push("ascendant-label");
        }
        if self.is_retrograde {
            classes.push("retrograde");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_enclosing() {
        let bbox = BoundingBox::enclosing(&[
            Point::new(400.0, 100.0),
            Point::new(250.0, 250.0),
            Point::new(400.0, 400.0),
            Point::new(550.0, 250.0),
        ])
        .unwrap();
        assert_eq!(bbox, BoundingBox::new(250.0, 100.0, 300.0, 300.0));
        assert_eq!(bbox.center(), Point::new(400.0, 250.0));
        assert_eq!(bbox.right(), 550.0);
        assert_eq!(bbox.bottom(), 400.0);
    }

    #[test]
    fn test_bounding_box_enclosing_empty() {
        assert!(BoundingBox::enclosing(&[]).is_none());
    }

    #[test]
    fn test_sign_range() {
        assert!(Sign::new(0).is_none());
        assert!(Sign::new(13).is_none());
        assert_eq!(Sign::new(12).map(Sign::index), Some(12));
        assert_eq!(Sign::all().count(), 12);
    }

    #[test]
    fn test_sign_advance_wraps() {
        let leo = Sign::new(5).unwrap();
        assert_eq!(leo.advance(0), leo);
        assert_eq!(leo.advance(7).index(), 12);
        assert_eq!(leo.advance(8).index(), 1);
        assert_eq!(leo.advance(11).index(), 4);
    }

    #[test]
    fn test_house_element_id() {
        assert_eq!(HouseId::new(7).unwrap().element_id(), "house7");
        assert!(HouseId::new(-1).is_none());
    }

    #[test]
    fn test_planet_symbols() {
        assert_eq!(Planet::from_name("Sun").symbol(), "Su");
        assert_eq!(Planet::from_name("Ascendant").symbol(), "As");
        assert_eq!(Planet::from_name("Pluto").symbol(), "Pl");
    }

    #[test]
    fn test_unknown_planet_symbol_falls_back_to_prefix() {
        let planet = Planet::from_name("Chiron");
        assert_eq!(planet, Planet::Other("Chiron".to_string()));
        assert_eq!(planet.symbol(), "Ch");
        assert_eq!(Planet::from_name("X").symbol(), "X");
    }

    #[test]
    fn test_label_classes() {
        let label = LabelDescriptor {
            house: 1,
            x: 0.0,
            y: 0.0,
            text: "As 3° (1)".to_string(),
            is_ascendant: true,
            is_retrograde: true,
            is_placeholder: false,
        };
        assert_eq!(
            label.classes(),
            vec!["planet-label", "ascendant-label", "retrograde"]
        );
    }
}
