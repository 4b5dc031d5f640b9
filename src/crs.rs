use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Coordinate system maps are drawn in: geographic long/lat.
pub const MAP_CRS: Crs = Crs::Epsg4326;

/// Spherical earth radius used by web mercator, in meters.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

#[derive(Debug, Error)]
pub enum CrsError {
    #[error("unsupported EPSG code: {0}")]
    UnsupportedEpsg(u32),
}

/// A coordinate reference system tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Crs {
    /// Geographic longitude/latitude in degrees.
    #[serde(rename = "EPSG:4326")]
    Epsg4326,
    /// Spherical web mercator, meters.
    #[serde(rename = "EPSG:3857")]
    Epsg3857,
}

impl Crs {
    pub fn from_epsg(code: u32) -> Result<Self, CrsError> {
        match code {
            4326 => Ok(Crs::Epsg4326),
            3857 => Ok(Crs::Epsg3857),
            other => Err(CrsError::UnsupportedEpsg(other)),
        }
    }

    pub fn epsg_code(&self) -> u32 {
        match self {
            Crs::Epsg4326 => 4326,
            Crs::Epsg3857 => 3857,
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg_code())
    }
}

/// Convert a single (x, y) coordinate from one system to the other.
pub fn reproject(x: f64, y: f64, from: Crs, to: Crs) -> (f64, f64) {
    match (from, to) {
        (Crs::Epsg4326, Crs::Epsg4326) | (Crs::Epsg3857, Crs::Epsg3857) => (x, y),
        (Crs::Epsg4326, Crs::Epsg3857) => {
            let lambda = x.to_radians();
            let phi = y.to_radians();
            (
                EARTH_RADIUS_M * lambda,
                EARTH_RADIUS_M * (PI / 4.0 + phi / 2.0).tan().ln(),
            )
        }
        (Crs::Epsg3857, Crs::Epsg4326) => {
            let lambda = x / EARTH_RADIUS_M;
            let phi = 2.0 * (y / EARTH_RADIUS_M).exp().atan() - PI / 2.0;
            (lambda.to_degrees(), phi.to_degrees())
        }
    }
}
