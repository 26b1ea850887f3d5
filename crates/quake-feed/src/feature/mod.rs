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

//! Feature layer: GeoJSON documents into typed feed features.
//!
//! Parsers here take the raw response body of a feed and produce owned,
//! immutable feature values. Required fields are mandatory: the feeds are
//! trusted upstream sources, so a missing property aborts the parse with a
//! [`FeedError`](crate::FeedError) instead of skipping the feature.

mod earthquakes;
mod plates;

pub use earthquakes::{parse_earthquakes, Earthquake};
pub use plates::{parse_plate_boundaries, PlateBoundary};

use geojson::{FeatureCollection, GeoJson, Value};

use crate::FeedError;

/// Parse a feed body as a GeoJSON `FeatureCollection`.
fn parse_collection(body: &str) -> Result<FeatureCollection, FeedError> {
    let geojson: GeoJson = body.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// GeoJSON type name of a geometry value, for error messages.
fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
