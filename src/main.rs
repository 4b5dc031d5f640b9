use std::env;
use std::error::Error;

use geo::{BoundingRect, Polygon, polygon};
use rand::SeedableRng;
use rand::rngs::StdRng;

use geoscatter::{
    Crs, DEFAULT_NUM_POINTS, DEFAULT_SEED, Map, PointSeries, load_polygons, plot_sampled_points,
    sample_points,
};

const OUTPUT_PATH: &str = "sampled_points.html";

fn main() -> Result<(), Box<dyn Error>> {
    let polygon = match env::args().nth(1) {
        Some(path) => load_polygons(&path)?
            .into_iter()
            .next()
            .ok_or("shapefile contains no polygons")?,
        None => demo_polygon(),
    };

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let sampled = sample_points(&mut rng, &polygon, DEFAULT_NUM_POINTS)?;
    println!("sampled {} points", sampled.len());

    let series = PointSeries::new(sampled.clone(), Crs::Epsg4326);
    println!("{}", serde_json::to_string(&series)?);

    let map = Map::new(map_center(&polygon)?, 7);
    let map = plot_sampled_points(&sampled, &series, map);
    map.save(OUTPUT_PATH)?;
    println!("wrote {OUTPUT_PATH}");

    Ok(())
}

// rough Lake Victoria outline, long/lat degrees
fn demo_polygon() -> Polygon<f64> {
    polygon![
        (x: 31.8, y: 0.3),
        (x: 34.0, y: 0.4),
        (x: 34.8, y: -1.0),
        (x: 33.5, y: -2.8),
        (x: 32.0, y: -2.2),
    ]
}

fn map_center(polygon: &Polygon<f64>) -> Result<(f64, f64), Box<dyn Error>> {
    let bounds = polygon
        .bounding_rect()
        .ok_or("polygon has no coordinates")?;
    let center = bounds.center();
    Ok((center.y, center.x))
}
