//! Planet listing and karaka highlights
//!
//! Display helpers that sit beside the chart: a per-body table and the
//! chara karakas derived from degrees. Neither affects house assignment.

use std::fmt::Write as _;

use crate::chart::{BirthBody, Planet, Sign};

const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// English name of a zodiac sign number, `"Unknown"` outside 1..=12
pub fn sign_name(index: i64) -> &'static str {
    Sign::new(index)
        .map(|sign| SIGN_NAMES[sign.index() as usize - 1])
        .unwrap_or("Unknown")
}

/// Astronomical glyph for a body
pub fn planet_icon(planet: &Planet) -> &'static str {
    match planet {
        Planet::Sun => "☉",
        Planet::Moon => "☽",
        Planet::Mars => "♂",
        Planet::Mercury => "☿",
        Planet::Jupiter => "♃",
        Planet::Venus => "♀",
        Planet::Saturn => "♄",
        Planet::Rahu => "☊",
        Planet::Ketu => "☋",
        Planet::Ascendant => "⇧",
        Planet::Uranus => "♅",
        Planet::Neptune => "♆",
        Planet::Pluto => "♇",
        Planet::Other(_) => "★",
    }
}

/// One row of the planet listing
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRow {
    pub icon: &'static str,
    pub name: String,
    pub sign: &'static str,
    /// Degree within the sign, one decimal place
    pub degree: String,
    pub retrograde: bool,
}

/// Listing rows for every body, in input order
pub fn planet_rows(bodies: &[BirthBody]) -> Vec<PlanetRow> {
    bodies
        .iter()
        .map(|body| PlanetRow {
            icon: planet_icon(&body.planet),
            name: body.planet.name().to_string(),
            sign: sign_name(body.sign.index() as i64),
            degree: format!("{:.1}°", body.degree),
            retrograde: body.retrograde,
        })
        .collect()
}

/// Plain-text table of the planet listing
pub fn format_table(rows: &[PlanetRow]) -> String {
    if rows.is_empty() {
        return "No valid planetary data available.\n".to_string();
    }
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let sign_width = rows.iter().map(|r| r.sign.len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let marker = if row.retrograde { " R" } else { "" };
        let _ = writeln!(
            out,
            "{} {:<name_width$}  {:<sign_width$}  {:>6}{}",
            row.icon, row.name, row.sign, row.degree, marker
        );
    }
    out
}

/// Highest- and lowest-degree significators
#[derive(Debug, Clone, PartialEq)]
pub struct Karakas {
    /// Body with the highest degree in its sign
    pub atmakaraka: Planet,
    /// Body with the lowest degree in its sign
    pub darakaraka: Planet,
}

/// Derive karakas from the seven classical planets
///
/// Ties go to the body listed first. Returns `None` if no classical planet
/// is present.
pub fn karakas(bodies: &[BirthBody]) -> Option<Karakas> {
    let mut classical = bodies.iter().filter(|b| b.planet.is_classical());
    let first = classical.next()?;
    let (mut high, mut low) = (first, first);
    for body in classical {
        if body.degree > high.degree {
            high = body;
        }
        if body.degree < low.degree {
            low = body;
        }
    }
    Some(Karakas {
        atmakaraka: high.planet.clone(),
        darakaraka: low.planet.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chart::record::{birth_bodies, BodyRecord};

    #[test]
    fn test_sign_names() {
        assert_eq!(sign_name(1), "Aries");
        assert_eq!(sign_name(12), "Pisces");
        assert_eq!(sign_name(0), "Unknown");
        assert_eq!(sign_name(13), "Unknown");
    }

    #[test]
    fn test_planet_rows() {
        let bodies = birth_bodies(&[
            BodyRecord::birth("Sun", 5, 15.44),
            BodyRecord::birth("Saturn", 11, 2.06).retrograde(),
            BodyRecord::birth("Eris", 1, 0.0),
        ]);
        let rows = planet_rows(&bodies);
        assert_eq!(
            rows[0],
            PlanetRow {
                icon: "☉",
                name: "Sun".to_string(),
                sign: "Leo",
                degree: "15.4°".to_string(),
                retrograde: false,
            }
        );
        assert_eq!(rows[1].degree, "2.1°");
        assert!(rows[1].retrograde);
        assert_eq!(rows[2].icon, "★");
    }

    #[test]
    fn test_format_table() {
        let bodies = birth_bodies(&[
            BodyRecord::birth("Moon", 2, 4.0),
            BodyRecord::birth("Jupiter", 9, 21.5).retrograde(),
        ]);
        let table = format_table(&planet_rows(&bodies));
        insta::assert_snapshot!(table.trim_end(), @r"
        ☽ Moon     Taurus         4.0°
        ♃ Jupiter  Sagittarius   21.5° R
        ");
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_table(&[]), "No valid planetary data available.\n");
    }

    #[test]
    fn test_karakas_ignore_nodes_and_ascendant() {
        let bodies = birth_bodies(&[
            BodyRecord::birth("Ascendant", 1, 29.9),
            BodyRecord::birth("Sun", 1, 12.0),
            BodyRecord::birth("Moon", 2, 25.0),
            BodyRecord::birth("Rahu", 3, 0.5),
            BodyRecord::birth("Mars", 4, 3.0),
        ]);
        assert_eq!(
            karakas(&bodies),
            Some(Karakas {
                atmakaraka: Planet::Moon,
                darakaraka: Planet::Mars,
            })
        );
    }

    #[test]
    fn test_karakas_tie_goes_to_first() {
        let bodies = birth_bodies(&[
            BodyRecord::birth("Venus", 1, 10.0),
            BodyRecord::birth("Mercury", 2, 10.0),
        ]);
        let k = karakas(&bodies).unwrap();
        assert_eq!(k.atmakaraka, Planet::Venus);
        assert_eq!(k.darakaraka, Planet::Venus);
    }

    #[test]
    fn test_karakas_none_without_classical() {
        let bodies = birth_bodies(&[BodyRecord::birth("Ascendant", 1, 1.0)]);
        assert_eq!(karakas(&bodies), None);
    }
}
