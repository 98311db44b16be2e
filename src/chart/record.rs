//! Raw body records and their validation
//!
//! Records arrive exactly as the upstream astrology service encodes them:
//! loosely typed JSON with a string-encoded retrograde flag. Validation
//! turns each record into a typed body or drops it with a warning; a bad
//! record never aborts a render.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::grouping::divisional_cell;
use super::types::{BirthBody, DivisionalBody, Planet, Sign};

/// One body as supplied by the data source, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    #[serde(default)]
    pub name: Value,
    /// Degree within the sign
    #[serde(default, rename = "normDegree")]
    pub norm_degree: Value,
    #[serde(default, rename = "fullDegree")]
    pub full_degree: Value,
    /// `"true"` or `"false"`
    #[serde(default, rename = "isRetro")]
    pub is_retro: Value,
    #[serde(default)]
    pub current_sign: Value,
    #[serde(default)]
    pub house_number: Value,
}

/// Why a record was left out of a chart
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRecord {
    #[error("record has no name")]
    MissingName,

    #[error("'{name}': field '{field}' is not numeric")]
    NonNumeric { name: String, field: &'static str },

    #[error("'{name}': field '{field}' value {value} is out of range")]
    OutOfRange {
        name: String,
        field: &'static str,
        value: f64,
    },
}

impl BodyRecord {
    /// Birth-chart record with a sign and a degree
    pub fn birth(name: &str, sign: i64, degree: f64) -> Self {
        Self {
            name: Value::from(name),
            norm_degree: Value::from(degree),
            current_sign: Value::from(sign),
            is_retro: Value::from("false"),
            ..Self::default()
        }
    }

    /// Divisional-chart record with an upstream house number
    pub fn divisional(name: &str, house_number: i64) -> Self {
        Self {
            name: Value::from(name),
            house_number: Value::from(house_number),
            is_retro: Value::from("false"),
            ..Self::default()
        }
    }

    /// Mark the record retrograde using the upstream string encoding
    pub fn retrograde(mut self) -> Self {
        self.is_retro = Value::from("true");
        self
    }

    /// The record's name, if it has a usable one
    pub fn name(&self) -> Option<&str> {
        self.name.as_str().filter(|n| !n.is_empty())
    }

    /// Normalized retrograde flag
    ///
    /// Upstream sends the flag as the string `"true"`; a JSON boolean `true`
    /// is accepted too. Anything else reads as direct motion.
    pub fn is_retrograde(&self) -> bool {
        match &self.is_retro {
            Value::String(s) => s == "true",
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    fn require_name(&self) -> Result<&str, InvalidRecord> {
        self.name().ok_or(InvalidRecord::MissingName)
    }

    /// Validate as a birth-chart body
    pub fn to_birth(&self) -> Result<BirthBody, InvalidRecord> {
        let name = self.require_name()?;
        let degree = number(&self.norm_degree, name, "normDegree")?;
        let sign_value = number(&self.current_sign, name, "current_sign")?;
        let sign = whole(sign_value)
            .and_then(Sign::new)
            .ok_or_else(|| InvalidRecord::OutOfRange {
                name: name.to_string(),
                field: "current_sign",
                value: sign_value,
            })?;

        Ok(BirthBody {
            planet: Planet::from_name(name),
            sign,
            degree,
            full_degree: self.full_degree.as_f64(),
            retrograde: self.is_retrograde(),
        })
    }

    /// Validate as a divisional-chart body
    pub fn to_divisional(&self) -> Result<DivisionalBody, InvalidRecord> {
        let name = self.require_name()?;
        let house_value = number(&self.house_number, name, "house_number")?;
        let (house_number, cell) = whole(house_value)
            .and_then(|n| divisional_cell(n).map(|cell| (n, cell)))
            .ok_or_else(|| InvalidRecord::OutOfRange {
                name: name.to_string(),
                field: "house_number",
                value: house_value,
            })?;

        Ok(DivisionalBody {
            planet: Planet::from_name(name),
            house_number,
            cell,
            sign: self.current_sign.as_f64().and_then(whole).and_then(Sign::new),
            retrograde: self.is_retrograde(),
        })
    }
}

fn number(value: &Value, name: &str, field: &'static str) -> Result<f64, InvalidRecord> {
    value.as_f64().ok_or_else(|| InvalidRecord::NonNumeric {
        name: name.to_string(),
        field,
    })
}

fn whole(value: f64) -> Option<i64> {
    (value.fract() == 0.0).then_some(value as i64)
}

/// Validate birth-chart records, dropping the invalid ones
///
/// Bodies are keyed by name: a later record with an already-seen name
/// replaces the earlier one but keeps its position.
pub fn birth_bodies(records: &[BodyRecord]) -> Vec<BirthBody> {
    let mut bodies: Vec<BirthBody> = Vec::with_capacity(records.len());
    let mut positions: HashMap<Planet, usize> = HashMap::new();

    for record in records {
        match record.to_birth() {
            Ok(body) => {
                if let Some(&slot) = positions.get(&body.planet) {
                    tracing::warn!(body = %body.planet, "duplicate body record replaces earlier entry");
                    bodies[slot] = body;
                } else {
                    positions.insert(body.planet.clone(), bodies.len());
                    bodies.push(body);
                }
            }
            Err(err) => tracing::warn!(%err, "dropping invalid birth chart record"),
        }
    }
    bodies
}

/// Validate divisional-chart records, dropping the invalid ones
pub fn divisional_bodies(records: &[BodyRecord]) -> Vec<DivisionalBody> {
    records
        .iter()
        .filter_map(|record| {
            record
                .to_divisional()
                .map_err(|err| tracing::warn!(%err, "dropping invalid divisional chart record"))
                .ok()
        })
        .collect()
}
