use geo::{LineString, Polygon};
use shapefile::{Point as ShpPoint, PolygonRing, Reader, Shape};
use std::error::Error;

fn ring_to_line_string(ring: &PolygonRing<ShpPoint>) -> LineString<f64> {
    LineString::from(
        ring.points()
            .iter()
            .map(|pt| (pt.x, pt.y))
            .collect::<Vec<_>>(),
    )
}

fn polygon_to_geo(p: shapefile::Polygon) -> Option<Polygon<f64>> {
    // first ring is the exterior, the rest are holes
    let (exterior, holes) = p.rings().split_first()?;
    let interiors = holes.iter().map(ring_to_line_string).collect();
    Some(Polygon::new(ring_to_line_string(exterior), interiors))
}

/// Load every polygon record of a shapefile as a `geo` polygon. Non-polygon
/// shapes are skipped.
pub fn load_polygons(shapefile_path: &str) -> Result<Vec<Polygon<f64>>, Box<dyn Error>> {
    let mut reader = Reader::from_path(shapefile_path)?;
    let mut polygons = Vec::new();

    for record in reader.iter_shapes_and_records() {
        let (shape, _) = record?;
        if let Shape::Polygon(p) = shape {
            polygons.extend(polygon_to_geo(p));
        }
    }

    Ok(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{BoundingRect, Contains, Point};

    #[test]
    fn converts_exterior_ring() {
        let shp = shapefile::Polygon::new(PolygonRing::Outer(vec![
            ShpPoint::new(0.0, 0.0),
            ShpPoint::new(0.0, 4.0),
            ShpPoint::new(4.0, 4.0),
            ShpPoint::new(4.0, 0.0),
        ]));
        let poly = polygon_to_geo(shp).unwrap();

        let bounds = poly.bounding_rect().unwrap();
        assert_eq!((bounds.min().x, bounds.min().y), (0.0, 0.0));
        assert_eq!((bounds.max().x, bounds.max().y), (4.0, 4.0));
        assert!(poly.interiors().is_empty());
        assert!(poly.contains(&Point::new(2.0, 2.0)));
    }

    #[test]
    fn keeps_holes_as_interiors() {
        let shp = shapefile::Polygon::with_rings(vec![
            PolygonRing::Outer(vec![
                ShpPoint::new(0.0, 0.0),
                ShpPoint::new(0.0, 10.0),
                ShpPoint::new(10.0, 10.0),
                ShpPoint::new(10.0, 0.0),
            ]),
            PolygonRing::Inner(vec![
                ShpPoint::new(4.0, 4.0),
                ShpPoint::new(4.0, 6.0),
                ShpPoint::new(6.0, 6.0),
                ShpPoint::new(6.0, 4.0),
            ]),
        ]);
        let poly = polygon_to_geo(shp).unwrap();

        assert_eq!(poly.interiors().len(), 1);
        assert!(poly.contains(&Point::new(1.0, 1.0)));
        // inside the hole is outside the polygon
        assert!(!poly.contains(&Point::new(5.0, 5.0)));
    }
}
