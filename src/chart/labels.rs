//! Label layout within a single house cell
//!
//! Occupied houses get one label per body, stacked vertically around the
//! cell's bounding-box centre. Empty houses get a single placeholder label
//! naming the sign (birth chart) or house (divisional chart) it stands for.

use std::collections::HashSet;

use super::types::{BirthBody, BoundingBox, DivisionalBody, HouseId, LabelDescriptor, Point, Sign};

/// Anchor points for `count` stacked rows, top to bottom
///
/// Rows share the centre's x and are spread symmetrically about its y.
pub fn stack_rows(bbox: BoundingBox, count: usize, row_height: f64) -> Vec<Point> {
    let center = bbox.center();
    let start_y = center.y - (count.saturating_sub(1) as f64 * row_height) / 2.0;
    (0..count)
        .map(|row| Point::new(center.x, start_y + row as f64 * row_height))
        .collect()
}

/// Degree within the sign, rounded half away from zero
fn whole_degrees(degree: f64) -> i64 {
    degree.round() as i64
}

/// Birth chart label text
///
/// The sign suffix is shown only on the first body of each sign in a house.
pub fn birth_label_text(body: &BirthBody, show_sign: bool) -> String {
    let symbol = body.planet.symbol();
    let degrees = whole_degrees(body.degree);
    if show_sign {
        format!("{} {}° ({})", symbol, degrees, body.sign)
    } else {
        format!("{} {}°", symbol, degrees)
    }
}

fn placeholder(house: HouseId, bbox: BoundingBox, text: String) -> LabelDescriptor {
    let center = bbox.center();
    LabelDescriptor {
        house: house.index(),
        x: center.x,
        y: center.y,
        text,
        is_ascendant: false,
        is_retrograde: false,
        is_placeholder: true,
    }
}

/// Lay out the labels of one birth chart house
///
/// `sign` is the sign the rotation assigns to this house, shown when the
/// house is empty.
pub fn layout_birth_house(
    house: HouseId,
    bbox: BoundingBox,
    sign: Sign,
    occupants: &[&BirthBody],
    row_height: f64,
) -> Vec<LabelDescriptor> {
    if occupants.is_empty() {
        return vec![placeholder(house, bbox, format!("({})", sign))];
    }

    let mut signs_shown = HashSet::new();
    stack_rows(bbox, occupants.len(), row_height)
        .into_iter()
        .zip(occupants)
        .map(|(at, body)| LabelDescriptor {
            house: house.index(),
            x: at.x,
            y: at.y,
            text: birth_label_text(body, signs_shown.insert(body.sign)),
            is_ascendant: body.planet.is_ascendant(),
            is_retrograde: body.retrograde,
            is_placeholder: false,
        })
        .collect()
}

/// Lay out the labels of one divisional chart house
pub fn layout_divisional_house(
    house: HouseId,
    bbox: BoundingBox,
    occupants: &[&DivisionalBody],
    row_height: f64,
) -> Vec<LabelDescriptor> {
    if occupants.is_empty() {
        return vec![placeholder(house, bbox, house.to_string())];
    }

    stack_rows(bbox, occupants.len(), row_height)
        .into_iter()
        .zip(occupants)
        .map(|(at, body)| LabelDescriptor {
            house: house.index(),
            x: at.x,
            y: at.y,
            text: body.planet.symbol(),
            is_ascendant: body.planet.is_ascendant(),
            is_retrograde: body.retrograde,
            is_placeholder: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chart::types::Planet;

    fn house(n: i64) -> HouseId {
        HouseId::new(n).unwrap()
    }

    fn sign(n: i64) -> Sign {
        Sign::new(n).unwrap()
    }

    fn birth(name: &str, s: i64, degree: f64) -> BirthBody {
        BirthBody {
            planet: Planet::from_name(name),
            sign: sign(s),
            degree,
            full_degree: None,
            retrograde: false,
        }
    }

    fn divisional(name: &str, h: i64) -> DivisionalBody {
        DivisionalBody {
            planet: Planet::from_name(name),
            house_number: h + 1,
            cell: house(h),
            sign: None,
            retrograde: false,
        }
    }

    fn cell() -> BoundingBox {
        BoundingBox::new(250.0, 100.0, 300.0, 300.0)
    }

    #[test]
    fn test_stack_rows_single_is_centered() {
        assert_eq!(stack_rows(cell(), 1, 22.0), vec![Point::new(400.0, 250.0)]);
        assert!(stack_rows(cell(), 0, 22.0).is_empty());
    }

    #[test]
    fn test_stack_rows_symmetric_about_center() {
        for count in 2..=6 {
            for row_height in [22.0, 18.0] {
                let rows = stack_rows(cell(), count, row_height);
                assert_eq!(rows.len(), count);
                for pair in rows.windows(2) {
                    assert_eq!(pair[1].y - pair[0].y, row_height);
                }
                for (top, bottom) in rows.iter().zip(rows.iter().rev()) {
                    assert_eq!(top.x, 400.0);
                    assert_eq!((top.y + bottom.y) / 2.0, 250.0);
                }
            }
        }
    }

    #[test]
    fn test_three_rows_offsets() {
        let ys: Vec<f64> = stack_rows(cell(), 3, 22.0).iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![228.0, 250.0, 272.0]);
    }

    #[test]
    fn test_empty_birth_house_shows_sign() {
        let labels = layout_birth_house(house(3), cell(), sign(7), &[], 22.0);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "(7)");
        assert!(labels[0].is_placeholder);
        assert_eq!((labels[0].x, labels[0].y), (400.0, 250.0));
        assert_eq!(labels[0].house, 3);
    }

    #[test]
    fn test_sign_suffix_only_on_first_of_sign() {
        let asc = birth("Ascendant", 1, 9.6);
        let sun = birth("Sun", 1, 15.4);
        let labels = layout_birth_house(house(1), cell(), sign(1), &[&asc, &sun], 22.0);
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["As 10° (1)", "Su 15°"]);
        assert!(labels[0].is_ascendant);
        assert!(!labels[1].is_ascendant);
        assert_eq!(labels[0].y, 239.0);
        assert_eq!(labels[1].y, 261.0);
    }

    #[test]
    fn test_sign_suffix_per_distinct_sign() {
        let a = birth("Sun", 1, 1.0);
        let b = birth("Moon", 2, 2.0);
        let c = birth("Mars", 1, 3.0);
        let d = birth("Venus", 2, 4.0);
        let labels = layout_birth_house(house(1), cell(), sign(1), &[&a, &b, &c, &d], 22.0);
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Su 1° (1)", "Mo 2° (2)", "Ma 3°", "Ve 4°"]);
    }

    #[test]
    fn test_degree_rounds_half_away_from_zero() {
        assert_eq!(birth_label_text(&birth("Sun", 4, 12.5), true), "Su 13° (4)");
        assert_eq!(birth_label_text(&birth("Sun", 4, 12.49), false), "Su 12°");
        assert_eq!(birth_label_text(&birth("Sun", 4, 29.7), false), "Su 30°");
    }

    #[test]
    fn test_unknown_body_uses_name_prefix() {
        let body = birth("Chiron", 4, 2.0);
        assert_eq!(birth_label_text(&body, true), "Ch 2° (4)");
    }

    #[test]
    fn test_retrograde_flag_carried() {
        let mut saturn = birth("Saturn", 10, 5.0);
        saturn.retrograde = true;
        let labels = layout_birth_house(house(10), cell(), sign(10), &[&saturn], 22.0);
        assert!(labels[0].is_retrograde);
        assert!(!labels[0].is_placeholder);
    }

    #[test]
    fn test_divisional_labels_symbol_only() {
        let sun = divisional("Sun", 2);
        let other = divisional("Gulika", 2);
        let labels = layout_divisional_house(house(1), cell(), &[&sun, &other], 18.0);
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Su", "Gu"]);
        assert_eq!(labels[0].y, 241.0);
        assert_eq!(labels[1].y, 259.0);
    }

    #[test]
    fn test_empty_divisional_house_shows_house_number() {
        let labels = layout_divisional_house(house(11), cell(), &[], 18.0);
        assert_eq!(labels[0].text, "11");
        assert!(labels[0].is_placeholder);
    }
}
