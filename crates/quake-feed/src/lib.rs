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

//! Client library for fetching and parsing earthquake and plate boundary
//! GeoJSON feeds.
//!
//! The library is split into two layers that can be used independently or
//! composed together:
//!
//! - **Feature layer**: parsing GeoJSON documents into typed features
//!   ([`Earthquake`], [`PlateBoundary`])
//! - **Fetch layer**: async HTTP transport that downloads a feed and hands
//!   it to the feature layer
//!
//! # Quick Start
//!
//! ```no_run
//! use quake_feed::{fetch_earthquakes, USGS_WEEK_FEED_URL};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     match fetch_earthquakes(USGS_WEEK_FEED_URL).await {
//!         Ok(quakes) => {
//!             for quake in &quakes {
//!                 println!("M{} {}", quake.magnitude, quake.place);
//!             }
//!         }
//!         Err(e) => eprintln!("feed unavailable: {e}"),
//!     }
//! }
//! ```
//!
//! # Using the Feature Layer Only
//!
//! ```
//! use quake_feed::feature::parse_earthquakes;
//!
//! let body = r#"{"type":"FeatureCollection","features":[]}"#;
//! let quakes = parse_earthquakes(body).unwrap();
//! assert!(quakes.is_empty());
//! ```

pub mod feature;
pub mod fetch;

use thiserror::Error;

pub use feature::{parse_earthquakes, parse_plate_boundaries, Earthquake, PlateBoundary};
pub use fetch::{fetch_earthquakes, fetch_plate_boundaries};

/// USGS summary feed of all magnitude 1.0+ earthquakes from the past week.
pub const USGS_WEEK_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/1.0_week.geojson";

/// Static tectonic plate boundary polylines (Bird 2002 dataset).
pub const PLATE_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Errors that can occur while downloading or decoding a feed.
///
/// Both layers report through this type: the fetch layer produces the
/// transport variants, the feature layer the schema variants. Feeds are
/// trusted, so schema violations fail the whole load rather than being
/// repaired per feature.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),

    #[error("feature missing required field: {0}")]
    MissingField(&'static str),

    #[error("unexpected geometry: {0}")]
    UnexpectedGeometry(String),
}
