// Copyright 2025 The QuakeWatch Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use geojson::{Feature, Value};
use serde_json::Value as Json;

use super::{geometry_type, parse_collection};
use crate::FeedError;

/// A single earthquake event from the USGS summary feed.
///
/// Fields are taken verbatim from the feed: `properties.mag`,
/// `properties.place`, `properties.time` and the 3-element `Point`
/// geometry `[longitude, latitude, depth_km]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    /// Human-readable location description (e.g. "12 km NE of Ridgecrest, CA").
    pub place: String,

    /// Event time in milliseconds since the Unix epoch.
    pub time_ms: i64,

    /// Event magnitude.
    pub magnitude: f64,

    /// Hypocenter depth in kilometers.
    pub depth_km: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Latitude in degrees.
    pub latitude: f64,
}

/// Parse a USGS summary feed body into earthquake events.
///
/// An empty `FeatureCollection` yields an empty vector. Every feature must
/// carry the required properties and a 3-element `Point` geometry; the first
/// violation aborts the parse.
pub fn parse_earthquakes(body: &str) -> Result<Vec<Earthquake>, FeedError> {
    let collection = parse_collection(body)?;

    collection.features.iter().map(parse_feature).collect()
}

fn parse_feature(feature: &Feature) -> Result<Earthquake, FeedError> {
    let properties = feature
        .properties
        .as_ref()
        .ok_or(FeedError::MissingField("properties"))?;

    let magnitude = properties
        .get("mag")
        .and_then(Json::as_f64)
        .ok_or(FeedError::MissingField("mag"))?;

    let place = properties
        .get("place")
        .and_then(Json::as_str)
        .ok_or(FeedError::MissingField("place"))?
        .to_owned();

    let time_ms = properties
        .get("time")
        .and_then(Json::as_i64)
        .ok_or(FeedError::MissingField("time"))?;

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(FeedError::MissingField("geometry"))?;

    // USGS points are [longitude, latitude, depth_km]
    match &geometry.value {
        Value::Point(coords) if coords.len() >= 3 => Ok(Earthquake {
            place,
            time_ms,
            magnitude,
            depth_km: coords[2],
            longitude: coords[0],
            latitude: coords[1],
        }),
        Value::Point(_) => Err(FeedError::MissingField("depth")),
        other => Err(FeedError::UnexpectedGeometry(geometry_type(other).to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_body(features: &str) -> String {
        format!(r#"{{"type":"FeatureCollection","features":[{features}]}}"#)
    }

    const RIDGECREST: &str = r#"{
        "type": "Feature",
        "properties": {"mag": 4.2, "place": "12 km NE of Ridgecrest, CA", "time": 1700000000000},
        "geometry": {"type": "Point", "coordinates": [-117.5, 35.7, 8.3]}
    }"#;

    #[test]
    fn test_parse_single_event() {
        let quakes = parse_earthquakes(&feed_body(RIDGECREST)).unwrap();
        assert_eq!(quakes.len(), 1);

        let quake = &quakes[0];
        assert_eq!(quake.place, "12 km NE of Ridgecrest, CA");
        assert_eq!(quake.time_ms, 1_700_000_000_000);
        assert!((quake.magnitude - 4.2).abs() < f64::EPSILON);
        assert!((quake.depth_km - 8.3).abs() < f64::EPSILON);
        assert!((quake.longitude - (-117.5)).abs() < f64::EPSILON);
        assert!((quake.latitude - 35.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_collection_is_ok() {
        let quakes = parse_earthquakes(&feed_body("")).unwrap();
        assert!(quakes.is_empty());
    }

    #[test]
    fn test_missing_magnitude_fails() {
        let feature = r#"{
            "type": "Feature",
            "properties": {"place": "somewhere", "time": 0},
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 10.0]}
        }"#;
        let result = parse_earthquakes(&feed_body(feature));
        assert!(matches!(result, Err(FeedError::MissingField("mag"))));
    }

    #[test]
    fn test_missing_depth_fails() {
        let feature = r#"{
            "type": "Feature",
            "properties": {"mag": 2.0, "place": "somewhere", "time": 0},
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        }"#;
        let result = parse_earthquakes(&feed_body(feature));
        assert!(matches!(result, Err(FeedError::MissingField("depth"))));
    }

    #[test]
    fn test_non_point_geometry_fails() {
        let feature = r#"{
            "type": "Feature",
            "properties": {"mag": 2.0, "place": "somewhere", "time": 0},
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
        }"#;
        let result = parse_earthquakes(&feed_body(feature));
        assert!(matches!(result, Err(FeedError::UnexpectedGeometry(_))));
    }

    #[test]
    fn test_not_geojson_fails() {
        assert!(parse_earthquakes("not json at all").is_err());
    }
}
