use std::fmt::Write as _;
use std::io;
use std::path::Path;

use serde::Serialize;

const LEAFLET_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
const LEAFLET_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Styling of a circle marker. Field names serialize to the option names
/// Leaflet expects.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: String,
    pub fill: bool,
    #[serde(rename = "fillColor")]
    pub fill_color: String,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            color: "red".to_string(),
            fill: true,
            fill_color: "red".to_string(),
            fill_opacity: 0.7,
        }
    }
}

/// A small filled circle pinned to a position on the map.
#[derive(Debug, Clone)]
pub struct CircleMarker {
    location: (f64, f64),
    style: MarkerStyle,
}

impl CircleMarker {
    /// `location` is (latitude, longitude), matching Leaflet's axis order.
    pub fn new(location: (f64, f64), style: MarkerStyle) -> Self {
        Self { location, style }
    }

    pub fn location(&self) -> (f64, f64) {
        self.location
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }
}

/// A named group of markers the map shows and hides as one unit.
#[derive(Debug, Clone)]
pub struct FeatureGroup {
    name: String,
    overlay: bool,
    control: bool,
    markers: Vec<CircleMarker>,
}

impl FeatureGroup {
    pub fn new(name: impl Into<String>, overlay: bool, control: bool) -> Self {
        Self {
            name: name.into(),
            overlay,
            control,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drawn on the map when the page loads.
    pub fn is_overlay(&self) -> bool {
        self.overlay
    }

    /// Listed in the layer-control widget.
    pub fn in_control(&self) -> bool {
        self.control
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }
}

/// The widget that toggles overlays on and off.
#[derive(Debug, Clone, Copy)]
pub struct LayerControl {
    pub collapsed: bool,
}

/// An interactive map that renders to a self-contained Leaflet page.
///
/// Layers and controls are appended as-is: adding two layers with the same
/// name keeps both, and every added control becomes its own widget.
#[derive(Debug, Clone)]
pub struct Map {
    center: (f64, f64),
    zoom_start: u8,
    layers: Vec<FeatureGroup>,
    controls: Vec<LayerControl>,
}

impl Map {
    /// `center` is (latitude, longitude).
    pub fn new(center: (f64, f64), zoom_start: u8) -> Self {
        Self {
            center,
            zoom_start,
            layers: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: FeatureGroup) {
        self.layers.push(layer);
    }

    pub fn add_layer_control(&mut self, control: LayerControl) {
        self.controls.push(control);
    }

    pub fn layers(&self) -> &[FeatureGroup] {
        &self.layers
    }

    pub fn controls(&self) -> &[LayerControl] {
        &self.controls
    }

    /// Emit the whole map as an HTML page pulling Leaflet from its CDN.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
        html.push_str("<title>sampled points</title>\n");
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\"/>");
        let _ = writeln!(html, "<script src=\"{LEAFLET_JS}\"></script>");
        html.push_str("<style>html, body, #map { height: 100%; margin: 0; }</style>\n");
        html.push_str("</head>\n<body>\n<div id=\"map\"></div>\n<script>\n");

        let _ = writeln!(
            html,
            "var map = L.map('map').setView([{}, {}], {});",
            self.center.0, self.center.1, self.zoom_start
        );
        let _ = writeln!(
            html,
            "L.tileLayer('{TILE_URL}', {{ maxZoom: 19, attribution: '{TILE_ATTRIBUTION}' }}).addTo(map);"
        );
        html.push_str("var overlays = {};\n");

        for (i, layer) in self.layers.iter().enumerate() {
            let _ = writeln!(html, "var layer_{i} = L.featureGroup();");
            for marker in layer.markers() {
                let (lat, lon) = marker.location();
                // plain data, serialization cannot fail
                let style = serde_json::to_string(marker.style()).unwrap();
                let _ = writeln!(
                    html,
                    "L.circleMarker([{lat}, {lon}], {style}).addTo(layer_{i});"
                );
            }
            if layer.is_overlay() {
                let _ = writeln!(html, "layer_{i}.addTo(map);");
            }
            if layer.in_control() {
                let name = serde_json::to_string(layer.name()).unwrap();
                let _ = writeln!(html, "overlays[{name}] = layer_{i};");
            }
        }

        for control in &self.controls {
            let _ = writeln!(
                html,
                "L.control.layers(null, overlays, {{ collapsed: {} }}).addTo(map);",
                control.collapsed
            );
        }

        html.push_str("</script>\n</body>\n</html>\n");
        html
    }

    /// Write [`Map::to_html`] output to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(path, self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(lat: f64, lon: f64) -> CircleMarker {
        CircleMarker::new((lat, lon), MarkerStyle::default())
    }

    #[test]
    fn layers_and_controls_accumulate() {
        let mut map = Map::new((0.0, 0.0), 2);
        map.add_layer(FeatureGroup::new("a", true, true));
        map.add_layer(FeatureGroup::new("a", true, true));
        map.add_layer_control(LayerControl { collapsed: false });
        map.add_layer_control(LayerControl { collapsed: false });

        assert_eq!(map.layers().len(), 2);
        assert_eq!(map.controls().len(), 2);
    }

    #[test]
    fn html_has_one_circle_per_marker() {
        let mut layer = FeatureGroup::new("Sampled Points", true, true);
        layer.add_marker(marker(52.52, 13.4));
        layer.add_marker(marker(48.85, 2.35));
        layer.add_marker(marker(41.9, 12.5));

        let mut map = Map::new((48.0, 9.0), 4);
        map.add_layer(layer);
        map.add_layer_control(LayerControl { collapsed: false });

        let html = map.to_html();
        assert_eq!(html.matches("L.circleMarker(").count(), 3);
        assert!(html.contains("overlays[\"Sampled Points\"] = layer_0;"));
        assert!(html.contains("{ collapsed: false }"));
        assert!(html.contains(TILE_URL));
    }

    #[test]
    fn empty_layer_still_renders() {
        let mut map = Map::new((0.0, 0.0), 2);
        map.add_layer(FeatureGroup::new("empty", true, true));

        let html = map.to_html();
        assert_eq!(html.matches("L.circleMarker(").count(), 0);
        assert!(html.contains("var layer_0 = L.featureGroup();"));
    }

    #[test]
    fn marker_style_serializes_to_leaflet_options() {
        let style = MarkerStyle::default();
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"radius\":3.0"));
        assert!(json.contains("\"fillColor\":\"red\""));
        assert!(json.contains("\"fillOpacity\":0.7"));
    }
}
