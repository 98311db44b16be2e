//! Assignment of bodies to house cells

use std::collections::BTreeMap;

use super::error::ChartError;
use super::rotation::SignToHouseMap;
use super::types::{BirthBody, DivisionalBody, HouseId};

/// Bodies per house cell, each list in input order
///
/// Houses with no key are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseOccupancy<B> {
    houses: BTreeMap<HouseId, Vec<B>>,
}

impl<B> HouseOccupancy<B> {
    pub fn new() -> Self {
        Self {
            houses: BTreeMap::new(),
        }
    }

    /// Append a body to a house, after any already there
    pub fn push(&mut self, house: HouseId, body: B) {
        self.houses.entry(house).or_default().push(body);
    }

    /// Occupants of a house; empty for an empty house
    pub fn occupants(&self, house: HouseId) -> &[B] {
        self.houses.get(&house).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self, house: HouseId) -> bool {
        self.occupants(house).is_empty()
    }

    /// Number of bodies placed across all houses
    pub fn total(&self) -> usize {
        self.houses.values().map(Vec::len).sum()
    }

    /// Occupied houses in house order
    pub fn iter(&self) -> impl Iterator<Item = (HouseId, &[B])> {
        self.houses.iter().map(|(house, bodies)| (*house, bodies.as_slice()))
    }
}

impl<B> Default for HouseOccupancy<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the chart rotation from the first ascendant in the list
pub fn resolve_rotation(bodies: &[BirthBody]) -> Result<SignToHouseMap, ChartError> {
    let ascendant = bodies
        .iter()
        .find(|body| body.planet.is_ascendant())
        .ok_or(ChartError::MissingAscendant)?;
    let map = SignToHouseMap::resolve(ascendant.sign);
    tracing::debug!(ascendant = %ascendant.sign, "resolved sign rotation");
    Ok(map)
}

/// Group birth-chart bodies by the house their sign falls in
pub fn group_by_sign<'a>(
    bodies: &'a [BirthBody],
    map: &SignToHouseMap,
) -> HouseOccupancy<&'a BirthBody> {
    let mut occupancy = HouseOccupancy::new();
    for body in bodies {
        occupancy.push(map.house_of(body.sign), body);
    }
    occupancy
}

/// Physical cell for an upstream divisional house number
///
/// Upstream numbering runs one ahead of the cell numbering, so every body
/// moves back one house. Anything that lands at or below zero wraps to
/// cell 12; numbers shifting past 12 have no cell.
// TODO: confirm against the data source's documented house convention;
// the shift is only verified by how rendered charts look.
pub fn divisional_cell(house_number: i64) -> Option<HouseId> {
    let shifted = house_number.saturating_sub(1);
    if shifted <= 0 {
        Some(HouseId::LAST)
    } else {
        HouseId::new(shifted)
    }
}

/// Group divisional-chart bodies by their shifted house number
pub fn group_by_house_number(bodies: &[DivisionalBody]) -> HouseOccupancy<&DivisionalBody> {
    let mut occupancy = HouseOccupancy::new();
    for body in bodies {
        occupancy.push(body.cell, body);
    }
    occupancy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::record::{birth_bodies, divisional_bodies, BodyRecord};
    use crate::chart::types::{Planet, Sign};

    fn house(n: i64) -> HouseId {
        HouseId::new(n).unwrap()
    }

    fn names<B>(bodies: &[&B], name: impl Fn(&B) -> &str) -> Vec<String> {
        bodies.iter().map(|b| name(*b).to_string()).collect()
    }

    #[test]
    fn test_missing_ascendant_fails() {
        let bodies = birth_bodies(&[BodyRecord::birth("Sun", 3, 1.0)]);
        assert_eq!(resolve_rotation(&bodies), Err(ChartError::MissingAscendant));
    }

    #[test]
    fn test_ascendant_with_bad_sign_is_missing() {
        let bodies = birth_bodies(&[
            BodyRecord::birth("Ascendant", 14, 1.0),
            BodyRecord::birth("Sun", 3, 1.0),
        ]);
        assert_eq!(resolve_rotation(&bodies), Err(ChartError::MissingAscendant));
    }

    #[test]
    fn test_group_by_sign_rotates_from_ascendant() {
        let bodies = birth_bodies(&[
            BodyRecord::birth("Ascendant", 5, 12.0),
            BodyRecord::birth("Sun", 5, 20.0),
            BodyRecord::birth("Moon", 4, 2.0),
            BodyRecord::birth("Mars", 1, 8.0),
        ]);
        let map = resolve_rotation(&bodies).unwrap();
        assert_eq!(map.ascendant(), Sign::new(5).unwrap());

        let occupancy = group_by_sign(&bodies, &map);
        assert_eq!(
            names(occupancy.occupants(house(1)), |b| b.planet.name()),
            vec!["Ascendant", "Sun"]
        );
        assert_eq!(occupancy.occupants(house(12))[0].planet, Planet::Moon);
        assert_eq!(occupancy.occupants(house(9))[0].planet, Planet::Mars);
        assert!(occupancy.is_empty(house(2)));
        assert_eq!(occupancy.total(), 4);
    }

    #[test]
    fn test_group_by_sign_is_stable() {
        let records = vec![
            BodyRecord::birth("Ascendant", 2, 1.0),
            BodyRecord::birth("Venus", 2, 3.0),
            BodyRecord::birth("Mercury", 2, 2.0),
            BodyRecord::birth("Rahu", 8, 9.0),
        ];
        let first = birth_bodies(&records);
        let second = birth_bodies(&records);
        let a = group_by_sign(&first, &resolve_rotation(&first).unwrap());
        let b = group_by_sign(&second, &resolve_rotation(&second).unwrap());
        assert_eq!(a, b);
        assert_eq!(
            names(a.occupants(house(1)), |b| b.planet.name()),
            vec!["Ascendant", "Venus", "Mercury"]
        );
    }

    #[test]
    fn test_divisional_cell_shifts_back_one() {
        assert_eq!(divisional_cell(1), Some(house(12)));
        assert_eq!(divisional_cell(2), Some(house(1)));
        assert_eq!(divisional_cell(12), Some(house(11)));
    }

    #[test]
    fn test_divisional_cell_out_of_range() {
        assert_eq!(divisional_cell(0), Some(house(12)));
        assert_eq!(divisional_cell(-7), Some(house(12)));
        assert_eq!(divisional_cell(13), Some(house(12)));
        assert_eq!(divisional_cell(14), None);
        assert_eq!(divisional_cell(i64::MIN), Some(house(12)));
    }

    #[test]
    fn test_group_by_house_number() {
        let bodies = divisional_bodies(&[
            BodyRecord::divisional("Sun", 1),
            BodyRecord::divisional("Moon", 3),
            BodyRecord::divisional("Mars", 3),
        ]);
        let occupancy = group_by_house_number(&bodies);
        assert_eq!(occupancy.occupants(house(12))[0].planet, Planet::Sun);
        assert!(occupancy.is_empty(house(1)));
        assert_eq!(
            names(occupancy.occupants(house(2)), |b| b.planet.name()),
            vec!["Moon", "Mars"]
        );
        let occupied: Vec<u8> = occupancy.iter().map(|(h, _)| h.index()).collect();
        assert_eq!(occupied, vec![2, 12]);
    }
}
