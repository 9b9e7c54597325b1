//! Deterministic synthetic susceptibility field
//!
//! Stands in for the hosted classified rasters. The class at a point is
//! a pure function of (raster id, lon, lat): keyed blake3 hash noise
//! blended with a river-corridor/lowland prior, quantized to class
//! values 1-5. Determinism is what makes the pipeline idempotence
//! property hold end to end against this backend.

use indus_core::LonLat;

/// Noise cell size in degrees
const NOISE_CELL_DEG: f64 = 0.05;

/// Coarse polyline along the Indus river corridor, north to south
const INDUS_CORRIDOR: &[LonLat] = &[
    LonLat { lon: 73.2, lat: 35.0 },
    LonLat { lon: 72.6, lat: 34.0 },
    LonLat { lon: 71.7, lat: 32.5 },
    LonLat { lon: 70.8, lat: 31.0 },
    LonLat { lon: 70.5, lat: 29.5 },
    LonLat { lon: 68.9, lat: 27.9 },
    LonLat { lon: 68.3, lat: 26.4 },
    LonLat { lon: 68.0, lat: 25.0 },
    LonLat { lon: 67.4, lat: 24.0 },
];

/// Distance from a point to a segment, in degrees
fn segment_distance(p: &LonLat, a: &LonLat, b: &LonLat) -> f64 {
    let (dx, dy) = (b.lon - a.lon, b.lat - a.lat);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.lon - a.lon) * dx + (p.lat - a.lat) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.lon + t * dx, a.lat + t * dy);
    ((p.lon - cx).powi(2) + (p.lat - cy).powi(2)).sqrt()
}

/// How close a point sits to the Indus floodplain, 0..1
fn corridor_proximity(point: &LonLat) -> f64 {
    let mut min_dist = f64::INFINITY;
    for pair in INDUS_CORRIDOR.windows(2) {
        min_dist = min_dist.min(segment_distance(point, &pair[0], &pair[1]));
    }
    (1.0 - min_dist / 1.6).clamp(0.0, 1.0)
}

/// Southern lowland prior, 0..1: floodplain provinces skew high-risk,
/// mountain latitudes skew low
fn lowland_prior(lat: f64) -> f64 {
    ((33.0 - lat) / 9.0).clamp(0.0, 1.0)
}

/// Unit-interval hash noise per (raster, noise cell)
fn cell_noise(raster_id: &str, lon: f64, lat: f64) -> f64 {
    let key = blake3::hash(raster_id.as_bytes());
    let xq = (lon / NOISE_CELL_DEG).floor() as i64;
    let yq = (lat / NOISE_CELL_DEG).floor() as i64;
    let mut input = [0u8; 16];
    input[..8].copy_from_slice(&xq.to_le_bytes());
    input[8..].copy_from_slice(&yq.to_le_bytes());
    let digest = blake3::keyed_hash(key.as_bytes(), &input);
    let word = u64::from_le_bytes(digest.as_bytes()[..8].try_into().unwrap());
    word as f64 / u64::MAX as f64
}

/// Susceptibility class value (1-5) at a point for a raster
pub fn class_at(raster_id: &str, point: &LonLat) -> i32 {
    let score = 0.5 * corridor_proximity(point)
        + 0.25 * lowland_prior(point.lat)
        + 0.25 * cell_noise(raster_id, point.lon, point.lat);
    match score {
        s if s < 0.28 => 1,
        s if s < 0.45 => 2,
        s if s < 0.60 => 3,
        s if s < 0.75 => 4,
        _ => 5,
    }
}
