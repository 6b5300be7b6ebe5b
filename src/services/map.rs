//! Map view data: decoded route path plus origin/destination markers as GeoJSON.

use crate::error::{AppError, Result};
use crate::models::Coordinates;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Google encodes coordinates with 5 decimal digits
const POLYLINE_PRECISION: u32 = 5;

/// Decode a Google encoded polyline into coordinates
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinates>> {
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| AppError::InvalidInput(format!("Invalid polyline: {}", e)))?;

    line.0
        .into_iter()
        .map(|point| {
            Coordinates::new(point.y, point.x)
                .map_err(|e| AppError::InvalidInput(format!("Invalid polyline point: {}", e)))
        })
        .collect()
}

fn marker(coords: &Coordinates, label: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("popup".to_string(), json!(label));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(coords.to_position()))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Origin and destination markers plus the route line
pub fn map_view(
    origin: &Coordinates,
    destination: &Coordinates,
    encoded_path: &str,
) -> Result<FeatureCollection> {
    let path = decode_polyline(encoded_path)?;

    let mut line_properties = JsonObject::new();
    line_properties.insert("color".to_string(), json!("blue"));
    line_properties.insert("weight".to_string(), json!(2.5));

    let line = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(
            path.iter().map(Coordinates::to_position).collect(),
        ))),
        id: None,
        properties: Some(line_properties),
        foreign_members: None,
    };

    Ok(FeatureCollection {
        bbox: None,
        features: vec![marker(origin, "Origem"), marker(destination, "Destino"), line],
        foreign_members: None,
    })
}
