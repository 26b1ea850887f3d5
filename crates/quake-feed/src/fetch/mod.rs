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

//! Fetch layer: async HTTP transport for feed documents.
//!
//! One GET per feed, no retry, no timeout beyond the transport defaults.
//! A non-2xx status is an error; the body is handed to the feature layer
//! for parsing.

use log::info;

use crate::feature::{parse_earthquakes, parse_plate_boundaries, Earthquake, PlateBoundary};
use crate::FeedError;

/// Download and parse a USGS earthquake summary feed.
pub async fn fetch_earthquakes(url: &str) -> Result<Vec<Earthquake>, FeedError> {
    let body = fetch_body(url).await?;
    let quakes = parse_earthquakes(&body)?;
    info!("Loaded {} earthquakes from {}", quakes.len(), url);
    Ok(quakes)
}

/// Download and parse a plate boundary feed.
pub async fn fetch_plate_boundaries(url: &str) -> Result<Vec<PlateBoundary>, FeedError> {
    let body = fetch_body(url).await?;
    let boundaries = parse_plate_boundaries(&body)?;
    info!("Loaded {} plate boundaries from {}", boundaries.len(), url);
    Ok(boundaries)
}

async fn fetch_body(url: &str) -> Result<String, FeedError> {
    info!("Fetching {}...", url);

    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(FeedError::Status(response.status()));
    }

    Ok(response.text().await?)
}
