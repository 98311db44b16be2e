//! Fixed house geometry of the North Indian diamond chart
//!
//! The chart is a 600x600 square (offset by 100,100) split by its two
//! diagonals and by the diamond joining the midpoints of its sides. That
//! yields four kite-shaped houses (1, 4, 7, 10) and eight triangles.
//! House 1 sits at the top centre and numbering runs anti-clockwise.

use super::error::ChartError;
use super::types::{BoundingBox, HouseId, Point};

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Polygon outlines of houses 1..=12, in house order
const DIAMOND_HOUSES: [&[Point]; 12] = [
    &[p(400.0, 100.0), p(250.0, 250.0), p(400.0, 400.0), p(550.0, 250.0)],
    &[p(100.0, 100.0), p(250.0, 250.0), p(400.0, 100.0)],
    &[p(100.0, 400.0), p(250.0, 250.0), p(100.0, 100.0)],
    &[p(250.0, 250.0), p(100.0, 400.0), p(250.0, 550.0), p(400.0, 400.0)],
    &[p(100.0, 400.0), p(250.0, 550.0), p(100.0, 700.0)],
    &[p(100.0, 700.0), p(250.0, 550.0), p(400.0, 700.0)],
    &[p(400.0, 400.0), p(250.0, 550.0), p(400.0, 700.0), p(550.0, 550.0)],
    &[p(400.0, 700.0), p(550.0, 550.0), p(700.0, 700.0)],
    &[p(700.0, 400.0), p(550.0, 550.0), p(700.0, 700.0)],
    &[p(550.0, 250.0), p(700.0, 400.0), p(550.0, 550.0), p(400.0, 400.0)],
    &[p(700.0, 100.0), p(550.0, 250.0), p(700.0, 400.0)],
    &[p(400.0, 100.0), p(550.0, 250.0), p(700.0, 100.0)],
];

/// Read-only table of the twelve house polygons
///
/// Shared by both chart kinds. Built once and passed by reference to the
/// engine and the renderer; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseGeometry {
    polygons: Vec<Vec<Point>>,
    boxes: Vec<BoundingBox>,
}

impl HouseGeometry {
    /// The standard diamond layout
    pub fn diamond() -> Self {
        let polygons = DIAMOND_HOUSES.iter().map(|poly| poly.to_vec()).collect();
        Self::from_polygons(polygons)
    }

    /// Build a geometry from twelve non-empty polygons in house order
    pub fn new(polygons: Vec<Vec<Point>>) -> Result<Self, ChartError> {
        if polygons.len() != HouseId::COUNT as usize {
            return Err(ChartError::invalid_geometry(format!(
                "expected {} polygons, got {}",
                HouseId::COUNT,
                polygons.len()
            )));
        }
        if let Some(slot) = polygons.iter().position(Vec::is_empty) {
            return Err(ChartError::invalid_geometry(format!(
                "house {} has no vertices",
                slot + 1
            )));
        }
        Ok(Self::from_polygons(polygons))
    }

    fn from_polygons(polygons: Vec<Vec<Point>>) -> Self {
        let boxes = polygons
            .iter()
            .map(|poly| {
                BoundingBox::enclosing(poly).unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0))
            })
            .collect();
        Self { polygons, boxes }
    }

    fn slot(house: HouseId) -> usize {
        house.index() as usize - 1
    }

    /// Outline of a house cell
    pub fn polygon(&self, house: HouseId) -> &[Point] {
        &self.polygons[Self::slot(house)]
    }

    /// Bounding box of a house cell
    pub fn bounding_box(&self, house: HouseId) -> BoundingBox {
        self.boxes[Self::slot(house)]
    }

    /// Bounding-box centre of a house cell, where labels are anchored
    pub fn center(&self, house: HouseId) -> Point {
        self.bounding_box(house).center()
    }

    /// Box enclosing every house
    pub fn extent(&self) -> BoundingBox {
        let all: Vec<Point> = self.polygons.iter().flatten().copied().collect();
        BoundingBox::enclosing(&all).unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0))
    }
}

impl Default for HouseGeometry {
    fn default() -> Self {
        Self::diamond()
    }
}
