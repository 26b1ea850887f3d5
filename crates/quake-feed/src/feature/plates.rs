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

use geojson::Value;
use log::warn;

use super::{geometry_type, parse_collection};
use crate::FeedError;

/// One tectonic plate boundary polyline.
///
/// A `MultiLineString` feature in the feed expands to one boundary per
/// member line. No feed properties are consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundary {
    /// Ordered (longitude, latitude) vertices in degrees.
    pub vertices: Vec<(f64, f64)>,
}

/// Parse a plate boundary feed body into polylines.
///
/// `LineString` and `MultiLineString` geometries are consumed; any other
/// geometry type is skipped with a warning.
pub fn parse_plate_boundaries(body: &str) -> Result<Vec<PlateBoundary>, FeedError> {
    let collection = parse_collection(body)?;

    let mut boundaries = Vec::new();
    for feature in &collection.features {
        let Some(geometry) = feature.geometry.as_ref() else {
            warn!("Skipping plate boundary feature without geometry");
            continue;
        };

        match &geometry.value {
            Value::LineString(line) => boundaries.push(boundary_from_line(line)),
            Value::MultiLineString(lines) => {
                boundaries.extend(lines.iter().map(|line| boundary_from_line(line)));
            }
            other => {
                warn!(
                    "Skipping unsupported plate boundary geometry: {}",
                    geometry_type(other)
                );
            }
        }
    }

    Ok(boundaries)
}

fn boundary_from_line(line: &[Vec<f64>]) -> PlateBoundary {
    PlateBoundary {
        vertices: line
            .iter()
            .filter(|position| position.len() >= 2)
            .map(|position| (position[0], position[1]))
            .collect(),
    }
}
