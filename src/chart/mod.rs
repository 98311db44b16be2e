//! House assignment and label layout for diamond-style charts
//!
//! Data flows one way: raw body records are validated, grouped into the
//! twelve house cells, and each cell is laid out into positioned labels.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grouping;
pub mod labels;
pub mod record;
pub mod rotation;
pub mod types;

pub use config::ChartConfig;
pub use engine::{compute, compute_birth, compute_divisional, ChartCanvas, ChartLayout};
pub use error::ChartError;
pub use geometry::HouseGeometry;
pub use grouping::HouseOccupancy;
pub use record::{BodyRecord, InvalidRecord};
pub use rotation::SignToHouseMap;
pub use types::*;
