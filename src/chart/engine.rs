//! Chart computation: records in, positioned labels out
//!
//! [`compute`] is a pure function of its inputs. [`ChartCanvas`] wraps it
//! for consumers that keep a chart on screen and redraw it whenever new
//! data arrives: every render replaces the previous label set wholesale.

use super::config::ChartConfig;
use super::error::ChartError;
use super::geometry::HouseGeometry;
use super::grouping::{group_by_house_number, group_by_sign, resolve_rotation};
use super::labels::{layout_birth_house, layout_divisional_house};
use super::record::{birth_bodies, divisional_bodies, BodyRecord};
use super::rotation::SignToHouseMap;
use super::types::{BirthBody, ChartKind, DivisionalBody, HouseId, LabelDescriptor};

/// Result of laying out one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub kind: ChartKind,
    /// Sign rotation, for birth charts
    pub rotation: Option<SignToHouseMap>,
    /// Labels in house order, then top to bottom within a house
    pub labels: Vec<LabelDescriptor>,
}

impl ChartLayout {
    /// Labels belonging to one house cell
    pub fn labels_in(&self, house: HouseId) -> impl Iterator<Item = &LabelDescriptor> {
        self.labels.iter().filter(move |l| l.house == house.index())
    }

    /// Labels for bodies, excluding empty-house placeholders
    pub fn body_labels(&self) -> impl Iterator<Item = &LabelDescriptor> {
        self.labels.iter().filter(|l| !l.is_placeholder)
    }
}

/// Validate records and lay out a chart of the given kind
pub fn compute(
    records: &[BodyRecord],
    kind: ChartKind,
    geometry: &HouseGeometry,
    config: &ChartConfig,
) -> Result<ChartLayout, ChartError> {
    match kind {
        ChartKind::Birth => compute_birth(&birth_bodies(records), geometry, config),
        ChartKind::Divisional => Ok(compute_divisional(
            &divisional_bodies(records),
            geometry,
            config,
        )),
    }
}

/// Lay out a birth chart from validated bodies
pub fn compute_birth(
    bodies: &[BirthBody],
    geometry: &HouseGeometry,
    config: &ChartConfig,
) -> Result<ChartLayout, ChartError> {
    let rotation = resolve_rotation(bodies)?;
    let occupancy = group_by_sign(bodies, &rotation);
    let row_height = config.row_height(ChartKind::Birth);

    let mut labels = Vec::with_capacity(bodies.len() + HouseId::COUNT as usize);
    for house in HouseId::all() {
        let occupants = occupancy.occupants(house);
        tracing::debug!(%house, occupants = occupants.len(), "birth chart house");
        labels.extend(layout_birth_house(
            house,
            geometry.bounding_box(house),
            rotation.sign_of(house),
            occupants,
            row_height,
        ));
    }

    Ok(ChartLayout {
        kind: ChartKind::Birth,
        rotation: Some(rotation),
        labels,
    })
}

/// Lay out a divisional chart from validated bodies
pub fn compute_divisional(
    bodies: &[DivisionalBody],
    geometry: &HouseGeometry,
    config: &ChartConfig,
) -> ChartLayout {
    let occupancy = group_by_house_number(bodies);
    let row_height = config.row_height(ChartKind::Divisional);

    let mut labels = Vec::with_capacity(bodies.len() + HouseId::COUNT as usize);
    for house in HouseId::all() {
        let occupants = occupancy.occupants(house);
        tracing::debug!(%house, occupants = occupants.len(), "divisional chart house");
        labels.extend(layout_divisional_house(
            house,
            geometry.bounding_box(house),
            occupants,
            row_height,
        ));
    }

    ChartLayout {
        kind: ChartKind::Divisional,
        rotation: None,
        labels,
    }
}

/// A chart that is redrawn from scratch on every data change
#[derive(Debug, Clone)]
pub struct ChartCanvas {
    kind: ChartKind,
    geometry: HouseGeometry,
    config: ChartConfig,
    labels: Vec<LabelDescriptor>,
}

impl ChartCanvas {
    pub fn new(kind: ChartKind, geometry: HouseGeometry, config: ChartConfig) -> Self {
        Self {
            kind,
            geometry,
            config,
            labels: Vec::new(),
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn geometry(&self) -> &HouseGeometry {
        &self.geometry
    }

    /// Labels from the most recent successful render
    pub fn labels(&self) -> &[LabelDescriptor] {
        &self.labels
    }

    /// Replace all labels with a fresh layout of `records`
    ///
    /// Previous labels are discarded before computing, so a failed render
    /// leaves the canvas empty rather than showing stale data.
    pub fn render(&mut self, records: &[BodyRecord]) -> Result<&[LabelDescriptor], ChartError> {
        self.labels.clear();
        match compute(records, self.kind, &self.geometry, &self.config) {
            Ok(layout) => {
                self.labels = layout.labels;
                Ok(&self.labels)
            }
            Err(err) => {
                tracing::warn!(%err, kind = ?self.kind, "chart render failed");
                Err(err)
            }
        }
    }
}
