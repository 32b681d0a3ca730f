//! Snapshot capture, restore and on-disk encodings for a [`FlightNetwork`].
//!
//! A [`NetworkSnapshot`] is a flat, ordered record of every airport and every
//! route, including the derived distance and duration of each route. Restoring
//! a snapshot reproduces the stored numbers exactly; nothing is recomputed.
//!
//! # Binary format
//!
//! ```text
//! Header (16 bytes):
//!   - Magic: b"FNSN" (4 bytes)
//!   - Version: u8 (1 byte)
//!   - Flags: u8 (1 byte), currently always 0
//!   - Airport count: u32 LE (4 bytes)
//!   - Route count: u32 LE (4 bytes)
//!   - Reserved: 2 bytes
//!
//! Body:
//!   - postcard-serialized NetworkSnapshot
//!   - zstd compressed
//!
//! Footer (32 bytes):
//!   - SHA-256 checksum of compressed body
//! ```
//!
//! Files whose name ends in `.json` are written as pretty-printed JSON instead.

use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::network::{Airport, FlightNetwork, Route};

/// Magic bytes identifying a network snapshot file.
const SNAPSHOT_MAGIC: &[u8; 4] = b"FNSN";

/// Current snapshot format version.
const SNAPSHOT_VERSION: u8 = 1;

/// Header size in bytes.
const HEADER_SIZE: usize = 16;

/// Checksum size in bytes (SHA-256).
const CHECKSUM_SIZE: usize = 32;

/// zstd compression level (balanced speed/ratio).
const COMPRESSION_LEVEL: i32 = 3;

/// Airport as captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Route as captured in a snapshot, derived fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub distance: f64,
    pub duration: f64,
}

/// Restorable capture of a whole network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub airports: Vec<AirportRecord>,
    pub routes: Vec<RouteRecord>,
}

impl From<&Airport> for AirportRecord {
    fn from(airport: &Airport) -> Self {
        Self {
            code: airport.code.clone(),
            name: airport.name.clone(),
            country: airport.country.clone(),
            latitude: airport.latitude,
            longitude: airport.longitude,
        }
    }
}

impl From<AirportRecord> for Airport {
    fn from(record: AirportRecord) -> Self {
        Airport::new(
            record.code,
            record.name,
            record.country,
            record.latitude,
            record.longitude,
        )
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        Self {
            from: route.from.clone(),
            to: route.to.clone(),
            cost: route.cost,
            distance: route.distance,
            duration: route.duration,
        }
    }
}

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        Route {
            from: record.from,
            to: record.to,
            cost: record.cost,
            distance: record.distance,
            duration: record.duration,
        }
    }
}

impl FlightNetwork {
    /// Capture the whole network. Airports are sorted by code and routes are
    /// grouped by sorted source code, keeping each adjacency list's order.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let mut airports: Vec<AirportRecord> = self.airports().map(AirportRecord::from).collect();
        airports.sort_by(|a, b| a.code.cmp(&b.code));

        let routes = self
            .sorted_route_sources()
            .into_iter()
            .flat_map(|source| self.routes_from(source))
            .map(RouteRecord::from)
            .collect();

        NetworkSnapshot { airports, routes }
    }

    /// Rebuild a network from a snapshot.
    ///
    /// Fails on duplicate airport codes and on routes whose endpoints are not
    /// part of the snapshot, since either would break the store's invariants.
    pub fn from_snapshot(snapshot: NetworkSnapshot) -> Result<Self> {
        let duplicates = duplicate_codes(&snapshot);
        if !duplicates.is_empty() {
            return Err(Error::InvalidSnapshot {
                message: format!("duplicate airport codes: {}", duplicates.join(", ")),
            });
        }

        let mut network = FlightNetwork::new();
        for record in snapshot.airports {
            network.add_airport(record.into());
        }

        for record in snapshot.routes {
            for endpoint in [&record.from, &record.to] {
                if !network.contains_airport(endpoint) {
                    return Err(Error::InvalidSnapshot {
                        message: format!(
                            "route {} -> {} references unknown airport {}",
                            record.from, record.to, endpoint
                        ),
                    });
                }
            }
            network.push_route_unchecked(record.into());
        }

        debug!(
            airports = network.airport_count(),
            routes = network.route_count(),
            "restored network from snapshot"
        );
        Ok(network)
    }
}

impl NetworkSnapshot {
    /// Pretty-printed JSON encoding.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Binary encoding: versioned header, zstd-compressed postcard body and a
    /// SHA-256 checksum footer.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let serialized = postcard::to_allocvec(self).map_err(|e| Error::SnapshotEncode {
            message: format!("postcard serialization failed: {}", e),
        })?;

        let compressed =
            zstd::encode_all(serialized.as_slice(), COMPRESSION_LEVEL).map_err(|e| {
                Error::SnapshotEncode {
                    message: format!("zstd compression failed: {}", e),
                }
            })?;

        let checksum = Sha256::digest(&compressed);

        let airport_count = count_field(self.airports.len(), "airports")?;
        let route_count = count_field(self.routes.len(), "routes")?;

        let mut bytes = Vec::with_capacity(HEADER_SIZE + compressed.len() + CHECKSUM_SIZE);
        bytes.extend_from_slice(SNAPSHOT_MAGIC);
        bytes.push(SNAPSHOT_VERSION);
        bytes.push(0);
        bytes.extend_from_slice(&airport_count.to_le_bytes());
        bytes.extend_from_slice(&route_count.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 2]);
        bytes.extend_from_slice(&compressed);
        bytes.extend_from_slice(&checksum);
        Ok(bytes)
    }

    /// Decode bytes produced by [`NetworkSnapshot::encode`], validating the
    /// header and checksum.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE + CHECKSUM_SIZE {
            return Err(decode_error(format!(
                "input too short ({} bytes)",
                bytes.len()
            )));
        }

        let (header, rest) = bytes.split_at(HEADER_SIZE);
        if &header[0..4] != SNAPSHOT_MAGIC {
            return Err(decode_error("invalid magic bytes".to_string()));
        }

        let version = header[4];
        if version != SNAPSHOT_VERSION {
            return Err(decode_error(format!(
                "unsupported version {} (expected {})",
                version, SNAPSHOT_VERSION
            )));
        }

        let airport_count = read_u32(&header[6..10]);
        let route_count = read_u32(&header[10..14]);

        let (compressed, stored_checksum) = rest.split_at(rest.len() - CHECKSUM_SIZE);
        let computed_checksum = Sha256::digest(compressed);
        if computed_checksum.as_slice() != stored_checksum {
            return Err(decode_error(
                "checksum mismatch - file may be corrupted".to_string(),
            ));
        }

        let decompressed = zstd::decode_all(compressed)
            .map_err(|e| decode_error(format!("zstd decompression failed: {}", e)))?;

        let snapshot: NetworkSnapshot = postcard::from_bytes(&decompressed)
            .map_err(|e| decode_error(format!("postcard deserialization failed: {}", e)))?;

        if snapshot.airports.len() != airport_count as usize
            || snapshot.routes.len() != route_count as usize
        {
            warn!(
                expected_airports = airport_count,
                actual_airports = snapshot.airports.len(),
                expected_routes = route_count,
                actual_routes = snapshot.routes.len(),
                "record count mismatch in network snapshot"
            );
            return Err(decode_error("record counts do not match header".to_string()));
        }

        Ok(snapshot)
    }
}

/// On-disk encoding of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Binary,
    Json,
}

impl SnapshotFormat {
    /// `.json` files use JSON; everything else uses the binary format.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Binary,
        }
    }
}

/// Write the network to `path`, choosing the format from the file extension.
pub fn save_network(network: &FlightNetwork, path: &Path) -> Result<()> {
    let format = SnapshotFormat::from_path(path);
    let snapshot = network.snapshot();
    let bytes = match format {
        SnapshotFormat::Binary => snapshot.encode()?,
        SnapshotFormat::Json => snapshot.to_json()?.into_bytes(),
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Written beside the target, then renamed over it.
    let mut tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        writer.write_all(&bytes)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|err| err.error)?;

    info!(
        path = %path.display(),
        ?format,
        airports = snapshot.airports.len(),
        routes = snapshot.routes.len(),
        file_size = bytes.len(),
        "network saved"
    );
    Ok(())
}

/// Read a network previously written by [`save_network`].
pub fn load_network(path: &Path) -> Result<FlightNetwork> {
    debug!(path = %path.display(), "loading network");

    let bytes = fs::read(path).map_err(|e| Error::SnapshotLoad {
        path: path.to_path_buf(),
        message: format!("failed to read file: {}", e),
    })?;

    let snapshot = match SnapshotFormat::from_path(path) {
        SnapshotFormat::Binary => NetworkSnapshot::decode(&bytes),
        SnapshotFormat::Json => std::str::from_utf8(&bytes)
            .map_err(|e| decode_error(format!("invalid UTF-8: {}", e)))
            .and_then(NetworkSnapshot::from_json),
    }
    .map_err(|e| Error::SnapshotLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let network = FlightNetwork::from_snapshot(snapshot)?;
    info!(
        path = %path.display(),
        airports = network.airport_count(),
        routes = network.route_count(),
        "loaded network"
    );
    Ok(network)
}

/// Like [`load_network`], but a missing file yields an empty network.
pub fn load_or_empty(path: &Path) -> Result<FlightNetwork> {
    if !path.exists() {
        debug!(path = %path.display(), "network file missing, starting empty");
        return Ok(FlightNetwork::new());
    }
    load_network(path)
}

/// Airport codes that appear more than once in a snapshot.
fn duplicate_codes(snapshot: &NetworkSnapshot) -> Vec<&str> {
    let mut seen = HashSet::new();
    snapshot
        .airports
        .iter()
        .filter(|record| !seen.insert(record.code.as_str()))
        .map(|record| record.code.as_str())
        .collect()
}

fn count_field(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::SnapshotEncode {
        message: format!("too many {what} for snapshot header ({len})"),
    })
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

fn decode_error(message: String) -> Error {
    Error::SnapshotDecode { message }
}
