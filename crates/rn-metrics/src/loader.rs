//! CSV loaders for centrality input.
//!
//! # CSV formats
//!
//! ```csv
//! id,longitude,latitude
//! 1,30.3158,59.9391
//! ```
//!
//! ```csv
//! id,way_id,source_id,target_id,name
//! 10,100,1,2,Nevsky Prospekt
//! 11,101,2,3,
//! ```
//!
//! An empty `name` loads as `None`.
//!
//! ```csv
//! way_id
//! 101
//! ```

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use rn_core::{PointId, WayId};

use crate::input::{Edge, Point};
use crate::{MetricsError, MetricsResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRecord {
    id:        i64,
    longitude: f64,
    latitude:  f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    id:        i64,
    way_id:    i64,
    source_id: i64,
    target_id: i64,
    name:      Option<String>,
}

#[derive(Deserialize)]
struct OnewayRecord {
    way_id: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load points from a CSV file.
pub fn load_points_csv(path: &Path) -> MetricsResult<Vec<Point>> {
    load_points_reader(std::fs::File::open(path)?)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
pub fn load_points_reader<R: Read>(reader: R) -> MetricsResult<Vec<Point>> {
    read_records(reader, |r: PointRecord| Point { id: PointId(r.id), lon: r.longitude, lat: r.latitude })
}

/// Load edges from a CSV file.
pub fn load_edges_csv(path: &Path) -> MetricsResult<Vec<Edge>> {
    load_edges_reader(std::fs::File::open(path)?)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R) -> MetricsResult<Vec<Edge>> {
    read_records(reader, |r: EdgeRecord| Edge {
        id:     r.id,
        way_id: WayId(r.way_id),
        source: PointId(r.source_id),
        target: PointId(r.target_id),
        name:   r.name.filter(|n| !n.is_empty()),
    })
}

/// Load the set of one-way way ids from a CSV file.
pub fn load_oneway_csv(path: &Path) -> MetricsResult<FxHashSet<WayId>> {
    load_oneway_reader(std::fs::File::open(path)?)
}

/// Like [`load_oneway_csv`] but accepts any `Read` source.
pub fn load_oneway_reader<R: Read>(reader: R) -> MetricsResult<FxHashSet<WayId>> {
    Ok(read_records(reader, |r: OnewayRecord| WayId(r.way_id))?.into_iter().collect())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<R, T, U, F>(reader: R, convert: F) -> MetricsResult<Vec<U>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
    F: Fn(T) -> U,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map(&convert).map_err(|e| MetricsError::Parse(e.to_string())))
        .collect()
}
