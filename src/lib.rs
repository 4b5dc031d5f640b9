mod crs;
pub use crs::{Crs, CrsError, MAP_CRS, reproject};

mod series;
pub use series::PointSeries;

mod sample;
pub use sample::{
    DEFAULT_NUM_POINTS, DEFAULT_SEED, SampleError, sample_points, sample_points_capped,
};

mod map;
pub use map::{CircleMarker, FeatureGroup, LayerControl, Map, MarkerStyle};

mod render;
pub use render::{PlotOptions, plot_sampled_points, plot_sampled_points_with};

mod load_polygons;
pub use load_polygons::load_polygons;
