use geo::Point;

use crate::crs::{Crs, MAP_CRS};
use crate::map::{CircleMarker, FeatureGroup, LayerControl, Map, MarkerStyle};
use crate::series::PointSeries;

/// Knobs for [`plot_sampled_points_with`].
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub target_crs: Crs,
    pub style: MarkerStyle,
    pub layer_name: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            target_crs: MAP_CRS,
            style: MarkerStyle::default(),
            layer_name: "Sampled Points".to_string(),
        }
    }
}

/// Plot sampled points on `map_object` as a toggleable overlay named
/// "Sampled Points", reprojecting to [`MAP_CRS`] when `base` uses another
/// system. Returns the map with the layer and an expanded layer control
/// attached.
pub fn plot_sampled_points(
    sampled_points: &[Point<f64>],
    base: &PointSeries,
    map_object: Map,
) -> Map {
    plot_sampled_points_with(sampled_points, base, map_object, &PlotOptions::default())
}

pub fn plot_sampled_points_with(
    sampled_points: &[Point<f64>],
    base: &PointSeries,
    mut map_object: Map,
    options: &PlotOptions,
) -> Map {
    // The sampled coordinates are expressed in whatever system the base map
    // uses.
    let mut points = PointSeries::new(sampled_points.to_vec(), base.crs());
    if points.crs() != options.target_crs {
        points = points.to_crs(options.target_crs);
    }
    // Bring the base frame into the target system as well; only the points
    // are drawn.
    let _base = if base.crs() != options.target_crs {
        base.to_crs(options.target_crs)
    } else {
        base.clone()
    };

    let mut layer = FeatureGroup::new(options.layer_name.clone(), true, true);
    for point in points.points() {
        // x carries longitude, y carries latitude
        let location = (point.y(), point.x());
        layer.add_marker(CircleMarker::new(location, options.style.clone()));
    }
    map_object.add_layer(layer);
    map_object.add_layer_control(LayerControl { collapsed: false });

    map_object
}
