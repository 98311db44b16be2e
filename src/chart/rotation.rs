//! Sign-to-house rotation for the birth chart

use super::types::{HouseId, Sign};

/// Cyclic mapping from zodiac sign to physical house cell
///
/// House 1 always holds the ascendant's sign; subsequent signs follow
/// anti-clockwise around the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignToHouseMap {
    ascendant: Sign,
    /// `houses[s - 1]` is the house of sign `s`
    houses: [HouseId; 12],
    /// `signs[h - 1]` is the sign of house `h`
    signs: [Sign; 12],
}

impl SignToHouseMap {
    /// Build the rotation anchored at the ascendant's sign
    pub fn resolve(ascendant: Sign) -> Self {
        let mut houses = [HouseId::FIRST; 12];
        let mut signs = [ascendant; 12];
        for (offset, house) in HouseId::all().enumerate() {
            let sign = ascendant.advance(offset as u8);
            houses[sign.index() as usize - 1] = house;
            signs[offset] = sign;
        }
        Self {
            ascendant,
            houses,
            signs,
        }
    }

    pub fn ascendant(&self) -> Sign {
        self.ascendant
    }

    /// House cell occupied by a sign
    pub fn house_of(&self, sign: Sign) -> HouseId {
        self.houses[sign.index() as usize - 1]
    }

    /// Sign occupying a house cell
    pub fn sign_of(&self, house: HouseId) -> Sign {
        self.signs[house.index() as usize - 1]
    }

    /// (house, sign) pairs in house order
    pub fn iter(&self) -> impl Iterator<Item = (HouseId, Sign)> + '_ {
        HouseId::all().zip(self.signs.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sign(n: i64) -> Sign {
        Sign::new(n).unwrap()
    }

    fn house(n: i64) -> HouseId {
        HouseId::new(n).unwrap()
    }

    #[test]
    fn test_aries_ascendant_is_identity() {
        let map = SignToHouseMap::resolve(sign(1));
        for n in 1..=12 {
            assert_eq!(map.house_of(sign(n)), house(n));
            assert_eq!(map.sign_of(house(n)), sign(n));
        }
    }

    #[test]
    fn test_leo_ascendant_rotation() {
        let map = SignToHouseMap::resolve(sign(5));
        assert_eq!(map.house_of(sign(5)), house(1));
        assert_eq!(map.house_of(sign(6)), house(2));
        assert_eq!(map.house_of(sign(12)), house(8));
        assert_eq!(map.house_of(sign(1)), house(9));
        assert_eq!(map.house_of(sign(4)), house(12));
        assert_eq!(map.sign_of(house(12)), sign(4));
    }

    #[test]
    fn test_every_ascendant_is_a_bijection() {
        for asc in Sign::all() {
            let map = SignToHouseMap::resolve(asc);
            assert_eq!(map.house_of(asc), house(1));
            assert_eq!(map.ascendant(), asc);

            let houses: HashSet<HouseId> = Sign::all().map(|s| map.house_of(s)).collect();
            assert_eq!(houses.len(), 12);

            let signs: HashSet<Sign> = map.iter().map(|(_, s)| s).collect();
            assert_eq!(signs, Sign::all().collect());

            for (h, s) in map.iter() {
                assert_eq!(map.house_of(s), h);
            }
        }
    }
}
