use geo::Point;
use serde::Serialize;

use crate::crs::{Crs, reproject};

/// An ordered collection of points together with the coordinate system their
/// coordinates are expressed in.
#[derive(Debug, Clone, Serialize)]
pub struct PointSeries {
    points: Vec<Point<f64>>,
    crs: Crs,
}

impl PointSeries {
    pub fn new(points: Vec<Point<f64>>, crs: Crs) -> Self {
        Self { points, crs }
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Reproject every point into `target`, returning the converted series.
    pub fn to_crs(&self, target: Crs) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| {
                let (x, y) = reproject(p.x(), p.y(), self.crs, target);
                Point::new(x, y)
            })
            .collect();
        Self {
            points,
            crs: target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_crs_retags_and_converts() {
        let series = PointSeries::new(vec![Point::new(13.4, 52.52)], Crs::Epsg4326);
        let projected = series.to_crs(Crs::Epsg3857);

        assert_eq!(projected.crs(), Crs::Epsg3857);
        assert_eq!(projected.len(), 1);
        let expected = reproject(13.4, 52.52, Crs::Epsg4326, Crs::Epsg3857);
        assert_eq!(projected.points()[0], Point::new(expected.0, expected.1));
    }

    #[test]
    fn to_crs_same_system_keeps_coordinates() {
        let series = PointSeries::new(vec![Point::new(1.0, 2.0)], Crs::Epsg4326);
        let same = series.to_crs(Crs::Epsg4326);
        assert_eq!(same.points(), series.points());
        assert_eq!(same.crs(), Crs::Epsg4326);
    }

    #[test]
    fn empty_series() {
        let series = PointSeries::new(vec![], Crs::Epsg3857);
        assert!(series.is_empty());
        assert!(series.to_crs(Crs::Epsg4326).is_empty());
    }
}
